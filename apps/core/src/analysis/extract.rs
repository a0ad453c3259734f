//! Text extraction from heterogeneous message payloads.
//!
//! Stored messages carry their text in whatever shape the upstream bot
//! framework produced: a bare string, an object with a conventional text
//! key, or a string leaf buried inside nested tool output. Extraction is
//! total: every payload maps to a string, possibly empty, and the lookup
//! order is fixed so results are reproducible.

use serde_json::Value;
use std::collections::VecDeque;

/// Conventional payload keys, tried in order before any deep traversal.
const TEXT_KEYS: &[&str] = &["content", "text", "message", "reply", "answer", "data"];

/// Upper bound on nodes visited during deep traversal. Decoded JSON is
/// acyclic, but the cap keeps a pathological document from dominating a pass.
const MAX_VISITED_NODES: usize = 4096;

/// Extracts the text of a message payload.
///
/// Resolution order:
/// 1. a bare string payload is returned unchanged;
/// 2. the first conventional key holding a non-blank string wins;
/// 3. breadth-first search over nested values returns the first non-blank
///    string leaf;
/// 4. anything else yields the empty string.
pub fn extract_message_text(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            for key in TEXT_KEYS {
                if let Some(Value::String(s)) = map.get(*key) {
                    if !s.trim().is_empty() {
                        return s.clone();
                    }
                }
            }
            first_string_leaf(payload).unwrap_or_default()
        }
        Value::Array(_) => first_string_leaf(payload).unwrap_or_default(),
        _ => String::new(),
    }
}

/// Breadth-first scan for the first non-blank string leaf. Containers are
/// expanded level by level through an explicit queue; the visit counter
/// bounds the walk.
fn first_string_leaf(root: &Value) -> Option<String> {
    let mut queue: VecDeque<&Value> = VecDeque::new();
    queue.push_back(root);
    let mut visited = 0usize;

    while let Some(node) = queue.pop_front() {
        visited += 1;
        if visited > MAX_VISITED_NODES {
            return None;
        }

        let children: Vec<&Value> = match node {
            Value::Object(map) => map.values().collect(),
            Value::Array(items) => items.iter().collect(),
            _ => Vec::new(),
        };

        for value in children {
            match value {
                Value::String(s) if !s.trim().is_empty() => return Some(s.clone()),
                Value::Object(_) | Value::Array(_) => queue.push_back(value),
                _ => {}
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_payload() {
        let payload = json!("What is the hostel fee?");
        assert_eq!(extract_message_text(&payload), "What is the hostel fee?");
    }

    #[test]
    fn test_content_key_preferred() {
        let payload = json!({
            "content": "the text",
            "text": "not this one",
        });
        assert_eq!(extract_message_text(&payload), "the text");
    }

    #[test]
    fn test_blank_content_falls_through_to_next_key() {
        let payload = json!({
            "content": "   ",
            "text": "fallback",
        });
        assert_eq!(extract_message_text(&payload), "fallback");
    }

    #[test]
    fn test_key_priority_order() {
        let payload = json!({
            "answer": "lower priority",
            "message": "higher priority",
        });
        assert_eq!(extract_message_text(&payload), "higher priority");
    }

    #[test]
    fn test_nested_string_leaf() {
        let payload = json!({
            "response_metadata": { "tokens": 42 },
            "response": { "inner": { "value": "buried text" } },
        });
        assert_eq!(extract_message_text(&payload), "buried text");
    }

    #[test]
    fn test_array_payload_traversed() {
        let payload = json!([{ "tokens": 1 }, { "output": "from array" }]);
        assert_eq!(extract_message_text(&payload), "from array");
    }

    #[test]
    fn test_no_string_leaf_yields_empty() {
        let payload = json!({ "a": 1, "b": { "c": null, "d": [2, 3] } });
        assert_eq!(extract_message_text(&payload), "");
    }

    #[test]
    fn test_non_container_payloads_yield_empty() {
        assert_eq!(extract_message_text(&json!(null)), "");
        assert_eq!(extract_message_text(&json!(42)), "");
        assert_eq!(extract_message_text(&json!(true)), "");
    }

    #[test]
    fn test_numbers_never_returned_as_text() {
        let payload = json!({ "value": 7, "deep": { "leaf": "found" } });
        assert_eq!(extract_message_text(&payload), "found");
    }

    #[test]
    fn test_deeply_nested_payload_terminates() {
        let mut payload = json!({ "leaf": 0 });
        for _ in 0..200 {
            payload = json!({ "wrap": payload });
        }
        // No string leaf anywhere; the walk must still finish.
        assert_eq!(extract_message_text(&payload), "");
    }

    #[test]
    fn test_wide_payload_capped() {
        let children: Vec<Value> = (0..(MAX_VISITED_NODES + 100)).map(|_| json!({})).collect();
        let payload = Value::Array(children);
        assert_eq!(extract_message_text(&payload), "");
    }

    #[test]
    fn test_bare_string_not_trimmed() {
        let payload = json!("  padded  ");
        assert_eq!(extract_message_text(&payload), "  padded  ");
    }
}
