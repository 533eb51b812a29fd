/// Normalize a raw model reply into displayable commentary.
///
/// Strips one wrapping markdown code fence if present (with or without a
/// language tag) and trims whitespace. An empty reply yields `None`.
pub fn extract_commentary(raw: &str) -> Option<String> {
    let trimmed = raw.trim();

    let body = if let Some(rest) = trimmed.strip_prefix("```") {
        // Drop the optional language tag on the opening fence line
        let rest = rest.split_once('\n').map(|(_, tail)| tail).unwrap_or("");
        rest.strip_suffix("```").unwrap_or(rest)
    } else {
        trimmed
    };

    let body = body.trim();
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}
