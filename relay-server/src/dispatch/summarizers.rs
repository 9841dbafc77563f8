//! Per-event-type summarizers.
//!
//! Each summarizer reads only the fields relevant to its event kind and
//! composes a short descriptive string. Missing or unexpected fields
//! degrade to a placeholder instead of failing; webhook payload shapes
//! are treated leniently by design.

use serde_json::Value;

/// Placeholder for fields absent from the payload.
const UNAVAILABLE: &str = "unavailable";

/// Look up a string field by JSON pointer, with a placeholder fallback.
fn str_field<'a>(payload: &'a Value, pointer: &str) -> &'a str {
    payload
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or(UNAVAILABLE)
}

/// Summarize a `star` event (a user starred or unstarred a repository).
pub fn summarize_star(payload: &Value) -> String {
    let action = str_field(payload, "/action");
    let login = str_field(payload, "/sender/login");
    let repo = str_field(payload, "/repository/full_name");

    match action {
        "created" => format!("User {} created star on {}", login, repo),
        "deleted" => format!("User {} deleted star on {}", login, repo),
        other => format!("Unhandled star action: {}", other),
    }
}

/// Summarize an `issues` lifecycle event.
pub fn summarize_issues(payload: &Value) -> String {
    let action = str_field(payload, "/action");
    let title = str_field(payload, "/issue/title");
    let reporter = str_field(payload, "/issue/user/login");

    match action {
        "opened" => format!("An issue was opened with this title {}", title),
        "closed" => format!("An issue was closed by {}", reporter),
        "reopened" => format!("An issue was reopened by {}", reporter),
        other => format!("Unhandled issue action: {}", other),
    }
}
