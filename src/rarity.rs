use serde_json::Value;

/// Canonical string form of a `Rare` value.
///
/// Strings keep their text as-is, booleans read `True`/`False`, everything
/// else is rendered as compact JSON, so `3` and `"3"` land in the same group.
pub fn label_of(rare: &Value) -> String {
    match rare {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_owned(),
        Value::Bool(false) => "False".to_owned(),
        other => other.to_string(),
    }
}

/// Folds spelling variants of a rarity onto one key: `" purple+ "` -> `PURPLE_PLUS`.
pub fn normalize(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    for c in label.trim().chars() {
        if c.is_whitespace() {
            out.push('_');
        } else if c == '+' {
            out.push_str("_PLUS");
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}
