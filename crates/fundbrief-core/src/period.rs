use once_cell::sync::Lazy;
use regex::Regex;

/// Filename convention for semi-annual reports: `<year>_<semester>_Report...`
/// The match is anchored at the start of the basename; this is strict prefix
/// matching, not a search over the substring.
static PERIOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d{4})_(Fall|Spring)_Report").unwrap());

/// Derive (academic year, semester) from a report's basename.
///
/// The year is exactly 4 digits, the semester token matches case-insensitively
/// and is returned as written in the filename. Filenames that do not follow
/// the convention yield `("", "")` — there is no partial-match fallback.
pub fn resolve_period(filename: &str) -> (String, String) {
    match PERIOD_RE.captures(filename) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (String::new(), String::new()),
    }
}
