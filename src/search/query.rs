//! Query sanitization and result-size policy.

/// Result count used when the caller gives none, or gives a non-positive one.
pub const DEFAULT_LIMIT: usize = 20;
/// Hard cap on results per request.
pub const MAX_LIMIT: usize = 100;
/// Default sample size for popular foods.
pub const POPULAR_DEFAULT_LIMIT: usize = 10;

/// Trims the raw query. Returns `None` when nothing is left, so a blank search
/// box never turns into a match-everything query.
pub fn normalize_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Escapes every regex metacharacter so the text is matched literally.
pub fn literal_pattern(text: &str) -> String {
    regex::escape(text)
}

/// Missing or `< 1` resets to `DEFAULT_LIMIT` (not 1); anything above `MAX_LIMIT` is capped.
pub fn resolve_limit(limit: Option<i64>) -> usize {
    resolve_with_default(limit, DEFAULT_LIMIT)
}

/// Same policy as `resolve_limit`, defaulting to `POPULAR_DEFAULT_LIMIT`.
pub fn resolve_popular_limit(limit: Option<i64>) -> usize {
    resolve_with_default(limit, POPULAR_DEFAULT_LIMIT)
}

fn resolve_with_default(limit: Option<i64>, default: usize) -> usize {
    match limit {
        Some(n) if n > MAX_LIMIT as i64 => MAX_LIMIT,
        Some(n) if n >= 1 => n as usize,
        _ => default,
    }
}

/// Lenient integer parsing for query-string limits. Anything unparsable counts as absent.
pub fn parse_limit(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}
