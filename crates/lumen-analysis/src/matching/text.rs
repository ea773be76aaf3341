//! String normalization.

/// Identifier form used for name matching: lowercase with spaces, hyphens and
/// underscores removed (`first_name` → `firstname`).
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Phrase form used for comparing visible text against phrase sets:
/// lowercase, single-spaced, without surrounding punctuation or arrows.
pub fn normalize_phrase(raw: &str) -> String {
    let collapsed = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    collapsed
        .trim_matches(|c: char| c.is_ascii_punctuation() || matches!(c, '…' | '»' | '«' | '→' | '›'))
        .trim()
        .to_string()
}

/// Member part of an enum-style value: `Color.Red` → `Red`, `Overflow.Hidden`
/// → `Hidden`. Values without a dot are returned trimmed.
pub fn enum_member(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.rsplit_once('.') {
        Some((_, member)) if !member.is_empty() && member.chars().all(char::is_alphanumeric) => member,
        _ => trimmed,
    }
}

/// Strip one layer of surrounding double quotes, as formula literals carry them.
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
}

pub fn word_count(raw: &str) -> usize {
    raw.split_whitespace().count()
}
