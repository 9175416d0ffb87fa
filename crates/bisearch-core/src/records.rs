//! Utilities for the records output format

/// Escape backslashes and double quotes so a value can sit inside a quoted
/// field.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// Render a node id as a single records field.
///
/// Plain ids are written as-is. Ids that are empty or contain whitespace,
/// a double quote or a backslash are quoted, so a reader can always split a
/// record line back into its fields.
pub fn record_id(id: &str) -> String {
    let needs_quotes =
        id.is_empty() || id.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\');
    if needs_quotes {
        format!("\"{}\"", escape_quotes(id))
    } else {
        id.to_string()
    }
}

/// Join ids into space-separated records fields.
pub fn record_ids<'a>(ids: impl IntoIterator<Item = &'a String>) -> String {
    ids.into_iter()
        .map(|id| record_id(id))
        .collect::<Vec<_>>()
        .join(" ")
}
