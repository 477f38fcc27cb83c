use chrono::NaiveDate;

/// Formats tried in order; the first that yields a real calendar date wins.
/// Month-first takes the ambiguous cases, so `03/15/2015` is 15 March and
/// `25/12/2015` still parses through the day-first fallback.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%d/%m/%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Flexible parse of an order-date string → `NaiveDate`.
/// Returns `None` if no format matches.
pub fn parse_order_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
