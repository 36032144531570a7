//! Field extraction engine: a fixed set of independent pattern rules that
//! scan recovered report text for performance metrics and narrative sections.
//!
//! Every rule is first-match and case-insensitive, and all rules operate on
//! the same full text — a later rule may match inside a region an earlier
//! rule already captured. A rule that fails to match yields an absent value,
//! never an error. The patterns are compiled once and shared read-only
//! across concurrent extraction tasks.

use once_cell::sync::Lazy;
use regex::Regex;

static AUM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)with\s*\$([\d\.]+)\s*million\s+currently\s+under\s+management").unwrap()
});

static RETURN_6M_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)6[-\s]*month.*?([\-\d\.]+)%").unwrap());

static RETURN_12M_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)12[-\s]*month.*?([\-\d\.]+)%").unwrap());

static DIVIDEND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)dividend.*?\$([\d,\.]+)").unwrap());

static BENCHMARK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)benchmark[^%\n]*?([\-\d\.]+)%").unwrap());

// Narrative sections span lines, so these enable dot-matches-newline.
// The anchors are plain substrings, not word boundaries: "Future" inside an
// unrelated word ends the Summary capture early. Preserved behavior.
static SUMMARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Review of Operations(.*?)Future").unwrap());

static FUTURE_FINDINGS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Future Findings(.*?)(?:Investment Plan|$)").unwrap());

static INVESTMENT_PLAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Investment Plan(.*)").unwrap());

/// The eight metric/narrative fields one extraction pass produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFields {
    pub aum: Option<f64>,
    pub return_6m: Option<f64>,
    pub return_12m: Option<f64>,
    pub dividend: Option<f64>,
    pub benchmark_return: Option<f64>,
    pub summary: String,
    pub future_findings: String,
    pub investment_plan: String,
}

/// Parse a numeric capture into a finite float.
///
/// The metric character classes admit strings that are not numbers (a bare
/// `-` or `.`); those yield `None` rather than an error, so a malformed
/// capture can never take down the record it belongs to.
fn parse_metric(capture: &str) -> Option<f64> {
    capture.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn capture_metric(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|caps| parse_metric(caps.get(1)?.as_str()))
}

fn capture_section(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Run every extraction rule over the recovered text.
///
/// Rules are logically independent; evaluation order does not affect the
/// result.
pub fn extract_fields(text: &str) -> ReportFields {
    ReportFields {
        aum: capture_metric(&AUM_RE, text),
        return_6m: capture_metric(&RETURN_6M_RE, text),
        return_12m: capture_metric(&RETURN_12M_RE, text),
        dividend: DIVIDEND_RE
            .captures(text)
            .and_then(|caps| parse_metric(&caps[1].replace(',', ""))),
        benchmark_return: capture_metric(&BENCHMARK_RE, text),
        summary: capture_section(&SUMMARY_RE, text),
        future_findings: capture_section(&FUTURE_FINDINGS_RE, text),
        investment_plan: capture_section(&INVESTMENT_PLAN_RE, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aum_basic() {
        let fields =
            extract_fields("The fund opened with $12.5 million currently under management.");
        assert_eq!(fields.aum, Some(12.5));
    }

    #[test]
    fn aum_absent_without_phrase() {
        let fields = extract_fields("The fund manages $12.5 million.");
        assert_eq!(fields.aum, None);
    }

    #[test]
    fn aum_case_insensitive_flexible_spacing() {
        let fields =
            extract_fields("WITH $8 MILLION CURRENTLY UNDER MANAGEMENT, we held steady.");
        assert_eq!(fields.aum, Some(8.0));
    }

    #[test]
    fn return_6m_negative() {
        let fields = extract_fields("The 6-month return was -3.2% for the period.");
        assert_eq!(fields.return_6m, Some(-3.2));
    }

    #[test]
    fn return_6m_does_not_cross_lines() {
        // Without dot-matches-newline the percentage must share a line.
        let fields = extract_fields("6-month figures follow\nreturn of 4.1%");
        assert_eq!(fields.return_6m, None);
    }

    #[test]
    fn return_12m_with_space_separator() {
        let fields = extract_fields("Our 12 month performance reached 8.75% overall.");
        assert_eq!(fields.return_12m, Some(8.75));
    }

    #[test]
    fn return_rules_are_independent() {
        let fields =
            extract_fields("6-month return: 2.1% while the 12-month return hit 5.4% net.");
        assert_eq!(fields.return_6m, Some(2.1));
        assert_eq!(fields.return_12m, Some(5.4));
    }

    #[test]
    fn dividend_strips_thousands_separators() {
        let fields = extract_fields("A dividend of $1,250.00 was paid to the endowment.");
        assert_eq!(fields.dividend, Some(1250.0));
    }

    #[test]
    fn benchmark_stops_at_percent_and_newline() {
        let fields = extract_fields("The benchmark Russell 3000 returned 7.3% this half.");
        assert_eq!(fields.benchmark_return, Some(7.3));
        // A newline between "benchmark" and the number blocks the match.
        let fields = extract_fields("benchmark details below\n7.3%");
        assert_eq!(fields.benchmark_return, None);
    }

    #[test]
    fn malformed_capture_is_absent_not_an_error() {
        // "-" alone satisfies the character class but is not a number.
        let fields = extract_fields("6-month spread was -% wide");
        assert_eq!(fields.return_6m, None);
    }

    #[test]
    fn summary_between_markers() {
        let fields = extract_fields("Review of Operations\nThe fund grew steadily.\nFuture");
        assert_eq!(fields.summary, "The fund grew steadily.");
    }

    #[test]
    fn summary_truncates_at_first_future_substring() {
        // "Future" is a plain substring anchor, not a word boundary.
        let fields =
            extract_fields("Review of Operations\nGrowth in Future Tech was strong.\nFuture Findings\nMore.");
        assert_eq!(fields.summary, "Growth in");
    }

    #[test]
    fn summary_absent_without_marker() {
        let fields = extract_fields("Operations went well. Future plans follow.");
        assert_eq!(fields.summary, "");
    }

    #[test]
    fn future_findings_bounded_by_investment_plan() {
        let text = "Future Findings\nRates will matter.\nInvestment Plan\nBuy quality.";
        let fields = extract_fields(text);
        assert_eq!(fields.future_findings, "Rates will matter.");
        assert_eq!(fields.investment_plan, "Buy quality.");
    }

    #[test]
    fn future_findings_runs_to_end_without_plan_marker() {
        let fields = extract_fields("Future Findings\nRates will matter.\n");
        assert_eq!(fields.future_findings, "Rates will matter.");
        assert_eq!(fields.investment_plan, "");
    }

    #[test]
    fn sections_span_newlines() {
        let text = "Review of Operations\nLine one.\nLine two.\nFuture Findings\nA.\nB.";
        let fields = extract_fields(text);
        assert_eq!(fields.summary, "Line one.\nLine two.");
        assert_eq!(fields.future_findings, "A.\nB.");
    }

    #[test]
    fn empty_text_yields_all_absent() {
        assert_eq!(extract_fields(""), ReportFields::default());
    }
}
