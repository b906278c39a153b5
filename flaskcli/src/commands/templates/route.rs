/// Generated Python function name for a route.
///
/// `handle_<method>_<path>`: the method is lowercased, the path loses its
/// surrounding slashes and every remaining character that cannot appear in a
/// Python identifier (including `/`) becomes `_`. The root path maps to `index`.
pub fn handler_name(method: &str, path: &str) -> String {
    let trimmed = path.trim_matches('/');
    let suffix: String = if trimmed.is_empty() {
        "index".to_string()
    } else {
        trimmed
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect()
    };
    format!("handle_{}_{}", method.to_lowercase(), suffix)
}

/// Flask handler block inserted in front of the startup marker.
pub fn route_block(method: &str, path: &str) -> String {
    let method_upper = method.to_uppercase();
    let name = handler_name(method, path);
    format!(
        r#"

@app.route('{path}', methods=['{method_upper}'])
def {name}():
    return "Hello from {method_upper} {path}"

"#
    )
}
