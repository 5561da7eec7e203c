//! Parsing helpers for the admin and checkout forms.

/// Parse a VND amount typed by a person: "1.250.000", "1,250,000 ₫" and
/// "1250000" all read as 1_250_000.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .trim_end_matches('₫')
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ' '))
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Id from a `<select>` value; empty means nothing chosen.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok().filter(|id| *id > 0)
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    s.chars().take(max).collect::<String>() + "…"
}
