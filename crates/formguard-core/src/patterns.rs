// File: src/patterns.rs
// Purpose: Compiled patterns and content scans shared by the field validators

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, no whitespace and a single '@'
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

// Markup/script injection: <script, inline handlers (onclick=), javascript: URIs
static DANGEROUS_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)<\s*script").unwrap(),
        Regex::new(r"(?i)on\w+\s*=").unwrap(),
        Regex::new(r"(?i)javascript\s*:").unwrap(),
    ]
});

/// Characters rejected outright in hardened mode
pub const DISALLOWED_CHARS: &[char] = &['<', '>', '{', '}', ';', '&'];

/// Characters that satisfy the strict policy's special-character rule
pub const SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|',
    '<', '>',
];

/// Matches the `local@domain.tld` shape
pub fn matches_email_shape(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Returns true if the value looks like a markup or script injection attempt
///
/// # Examples
/// ```
/// use formguard_core::contains_dangerous_pattern;
/// assert!(contains_dangerous_pattern("<SCRIPT>alert(1)</script>"));
/// assert!(contains_dangerous_pattern("x onclick = y"));
/// assert!(contains_dangerous_pattern("JavaScript :void(0)"));
/// assert!(!contains_dangerous_pattern("user@example.com"));
/// ```
pub fn contains_dangerous_pattern(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    DANGEROUS_PATTERNS.iter().any(|re| re.is_match(value))
}

pub fn contains_disallowed_char(value: &str) -> bool {
    value.contains(DISALLOWED_CHARS)
}

pub fn has_special_char(value: &str) -> bool {
    value.contains(SPECIAL_CHARS)
}
