mod common;

use common::{context, RecordingRunner, APP_PY};
use flaskcli::commands::route::{self, add_route, insert_route};
use flaskcli::error::CliError;
use std::fs;
use tempfile::TempDir;

const MARKER: &str = "if __name__ == '__main__':";

// ── insert_route ────────────────────────────────────────────────────

#[test]
fn inserts_block_before_marker() {
    let updated = insert_route(APP_PY, MARKER, "POST", "/items").unwrap();

    let index = APP_PY.find(MARKER).unwrap();
    let expected_block = "\n\n@app.route('/items', methods=['POST'])\ndef handle_post_items():\n    return \"Hello from POST /items\"\n\n";
    assert_eq!(
        updated,
        format!("{}{}{}", &APP_PY[..index], expected_block, &APP_PY[index..])
    );
}

#[test]
fn content_around_insertion_is_untouched() {
    let updated = insert_route(APP_PY, MARKER, "get", "/users").unwrap();
    let index = APP_PY.find(MARKER).unwrap();

    assert!(updated.starts_with(&APP_PY[..index]));
    assert!(updated.ends_with(&APP_PY[index..]));
    assert!(updated.contains("methods=['GET']"));
    assert!(updated.contains("def handle_get_users():"));
}

#[test]
fn only_first_marker_is_used() {
    let content = format!("a\n{MARKER}\nb\n{MARKER}\n");
    let updated = insert_route(&content, MARKER, "GET", "/x").unwrap();

    let first_route = updated.find("@app.route").unwrap();
    let first_marker = updated.find(MARKER).unwrap();
    assert!(first_route < first_marker);
    assert_eq!(updated.matches("@app.route").count(), 1);
    assert!(updated.ends_with(&format!("{MARKER}\nb\n{MARKER}\n")));
}

#[test]
fn no_marker_no_result() {
    assert_eq!(insert_route("app = Flask(__name__)\n", MARKER, "GET", "/"), None);
}

// ── add_route ───────────────────────────────────────────────────────

#[test]
fn add_route_rewrites_app_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.py"), APP_PY).unwrap();
    let runner = RecordingRunner::new();
    let ctx = context(tmp.path(), &runner);

    let handler = add_route(&ctx, tmp.path(), "POST", "/items").unwrap();

    assert_eq!(handler, "handle_post_items");
    let app = fs::read_to_string(tmp.path().join("app.py")).unwrap();
    let route_at = app.find("@app.route('/items', methods=['POST'])").unwrap();
    assert!(route_at < app.find(MARKER).unwrap());
    assert!(app.contains("return \"Hello from POST /items\""));
    assert!(runner.calls().is_empty());
}

#[test]
fn missing_marker_leaves_file_identical() {
    let tmp = TempDir::new().unwrap();
    let original = "from flask import Flask\napp = Flask(__name__)\napp.run()\n";
    fs::write(tmp.path().join("app.py"), original).unwrap();
    let runner = RecordingRunner::new();
    let ctx = context(tmp.path(), &runner);

    let err = add_route(&ctx, tmp.path(), "GET", "/users").unwrap_err();

    assert!(matches!(err, CliError::MarkerNotFound { .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(fs::read_to_string(tmp.path().join("app.py")).unwrap(), original);
}

#[test]
fn missing_app_file() {
    let tmp = TempDir::new().unwrap();
    let runner = RecordingRunner::new();
    let ctx = context(tmp.path(), &runner);

    let err = add_route(&ctx, tmp.path(), "GET", "/users").unwrap_err();
    assert!(matches!(err, CliError::AppFileNotFound { .. }));
}

#[test]
fn duplicate_routes_are_not_detected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.py"), APP_PY).unwrap();
    let runner = RecordingRunner::new();
    let ctx = context(tmp.path(), &runner);

    add_route(&ctx, tmp.path(), "GET", "/users").unwrap();
    add_route(&ctx, tmp.path(), "GET", "/users").unwrap();

    let app = fs::read_to_string(tmp.path().join("app.py")).unwrap();
    assert_eq!(app.matches("def handle_get_users():").count(), 2);
}

#[test]
fn custom_app_file_and_marker_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("main.py"), "app = Flask(__name__)\n# routes end\n").unwrap();
    let runner = RecordingRunner::new();
    let mut ctx = context(tmp.path(), &runner);
    ctx.config.app_file = "main.py".into();
    ctx.config.marker = "# routes end".into();

    add_route(&ctx, tmp.path(), "DELETE", "/items/old").unwrap();

    let app = fs::read_to_string(tmp.path().join("main.py")).unwrap();
    assert!(app.contains("def handle_delete_items_old():"));
    assert!(app.ends_with("\n\n# routes end\n"));
}

// ── run ─────────────────────────────────────────────────────────────

#[test]
fn run_requires_method_and_path() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.py"), APP_PY).unwrap();
    let runner = RecordingRunner::new();
    let ctx = context(tmp.path(), &runner);

    for (method, path) in [(None, None), (Some("GET"), None), (Some("GET"), Some("  "))] {
        let err = route::run(&ctx, method, path).unwrap_err();
        assert!(matches!(err, CliError::MissingArgument(_)));
        assert_eq!(err.exit_code(), 1);
    }
    assert_eq!(fs::read_to_string(tmp.path().join("app.py")).unwrap(), APP_PY);
}

#[test]
fn run_adds_route_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.py"), APP_PY).unwrap();
    let runner = RecordingRunner::new();
    let ctx = context(tmp.path(), &runner);

    route::run(&ctx, Some("put"), Some("/items")).unwrap();

    let app = fs::read_to_string(tmp.path().join("app.py")).unwrap();
    assert!(app.contains("@app.route('/items', methods=['PUT'])"));
    assert!(app.contains("def handle_put_items():"));
}
