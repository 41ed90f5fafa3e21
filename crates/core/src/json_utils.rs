//! Helpers for cleaning up model replies.

/// Info strings recognised even when the fence is written on one line.
const FENCE_LANGUAGES: &[&str] = &["json", "sql", "postgresql", "postgres", "pgsql", "psql"];

/// Strip a markdown code fence wrapped around a model reply.
///
/// Handles `` ```json ... ``` ``, `` ```sql ... ``` `` and bare fences, also
/// when the whole fence sits on a single line.
#[must_use]
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    if trimmed.len() >= 6 && trimmed.starts_with("```") && trimmed.ends_with("```") {
        let without_prefix = trimmed.strip_prefix("```").unwrap_or(trimmed);
        let inner = without_prefix.strip_suffix("```").unwrap_or(without_prefix);
        return strip_info_string(inner).trim();
    }
    trimmed
}

/// Drop the language tag after the opening fence. Unknown tags are dropped
/// only when they fill the whole first line.
fn strip_info_string(inner: &str) -> &str {
    let tag_len = inner
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(inner.len());
    let (tag, rest) = inner.split_at(tag_len);
    let known = FENCE_LANGUAGES.iter().any(|lang| lang.eq_ignore_ascii_case(tag));
    if known || (!tag.is_empty() && rest.starts_with('\n')) { rest } else { inner }
}
