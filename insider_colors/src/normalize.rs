use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:university|college)(?:\s+of)?\s+)+").expect("leading institution pattern")
});

static TRAILING_INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\s+(?:university|college))+$").expect("trailing institution pattern")
});

/// Lookup form of an organization name.
///
/// Lower-cased, whitespace collapsed, institutional prefix ("university of",
/// "college", ...) and suffix ("university", "college") removed.
pub fn normalize_name(input: &str) -> String {
    let lowered = input.to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    let without_prefix = LEADING_INSTITUTION.replace(&collapsed, "");
    let without_suffix = TRAILING_INSTITUTION.replace(&without_prefix, "");
    without_suffix.trim().to_string()
}

/// Drops the final word of a multi-word normalized name.
///
/// `"iowa state"` becomes `"iowa"`; single-word names have no short form.
pub fn short_form(normalized: &str) -> Option<&str> {
    let (head, _) = normalized.rsplit_once(' ')?;
    let head = head.trim_end();
    if head.is_empty() {
        None
    } else {
        Some(head)
    }
}
