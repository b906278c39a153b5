use flaskcli::commands::templates::route::{handler_name, route_block};

// ── handler_name ────────────────────────────────────────────────────

#[test]
fn handler_name_basic() {
    assert_eq!(handler_name("GET", "/users"), "handle_get_users");
    assert_eq!(handler_name("POST", "/items"), "handle_post_items");
}

#[test]
fn handler_name_nested_path() {
    assert_eq!(handler_name("Delete", "/api/v1/items/"), "handle_delete_api_v1_items");
}

#[test]
fn handler_name_root_path() {
    assert_eq!(handler_name("GET", "/"), "handle_get_index");
}

#[test]
fn handler_name_non_identifier_characters() {
    assert_eq!(
        handler_name("GET", "/user-profile/<int:id>"),
        "handle_get_user_profile__int_id_"
    );
}

#[test]
fn handler_name_is_deterministic() {
    assert_eq!(handler_name("patch", "/a/b"), handler_name("patch", "/a/b"));
}

// ── route_block ─────────────────────────────────────────────────────

#[test]
fn route_block_layout() {
    assert_eq!(
        route_block("get", "/hello"),
        "\n\n@app.route('/hello', methods=['GET'])\ndef handle_get_hello():\n    return \"Hello from GET /hello\"\n\n"
    );
}
