use serde_json::Value;

/// Resolves a record's finish reason.
///
/// The nested `response.choices[0].finish_reason` path wins whenever it
/// resolves to a non-null value, even one that is not a string. The flat
/// top-level `finish_reason` field is consulted only when the nested path is
/// structurally absent or null.
fn finish_reason(record: &Value) -> Option<&Value> {
    let nested = record
        .get("response")
        .and_then(|response| response.get("choices"))
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("finish_reason"));

    match nested {
        Some(value) if !value.is_null() => Some(value),
        _ => record.get("finish_reason").filter(|value| !value.is_null()),
    }
}

/// True iff the record's finish reason is exactly the string `"tool_calls"`.
///
/// Total over arbitrary record shapes: missing fields, wrong types, and empty
/// choice lists all resolve to `false`.
pub fn is_tool_call(record: &Value) -> bool {
    finish_reason(record).and_then(Value::as_str) == Some("tool_calls")
}
