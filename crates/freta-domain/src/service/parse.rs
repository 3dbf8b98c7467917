//! Cell-level parsing and date normalization helpers

/// Placeholder for an absent feed date.
pub const EMPTY_DATE: &str = "--/--/----";

/// Upper-case Portuguese month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "JANEIRO",
    "FEVEREIRO",
    "MARÇO",
    "ABRIL",
    "MAIO",
    "JUNHO",
    "JULHO",
    "AGOSTO",
    "SETEMBRO",
    "OUTUBRO",
    "NOVEMBRO",
    "DEZEMBRO",
];

/// Abbreviated month names for trend rows.
pub const MONTH_SHORT: [&str; 12] = [
    "JAN", "FEV", "MAR", "ABR", "MAI", "JUN", "JUL", "AGO", "SET", "OUT", "NOV", "DEZ",
];

/// Parse a spreadsheet money/quantity cell.
///
/// Strips the `R$` currency marker and thousands-separator dots, converts
/// the decimal comma, and parses the rest. Empty or unparsable input is
/// zero, never an error.
pub fn parse_decimal(raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    let cleaned = raw
        .replace("R$", "")
        .replace('.', "")
        .replacen(',', ".", 1);
    cleaned.trim().parse().unwrap_or(0.0)
}

/// Normalize a feed date cell to `DD/MM/YYYY`.
///
/// The gviz feed serializes dates as `Date(year,month,day)` with a
/// zero-based month; plain strings pass through unchanged.
pub fn normalize_feed_date(raw: &str) -> String {
    if raw.starts_with("Date") {
        let parts: Vec<u32> = raw
            .split(|c: char| !c.is_ascii_digit())
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse().ok())
            .collect();
        if parts.len() >= 3 {
            return format!("{:02}/{:02}/{}", parts[2], parts[1] + 1, parts[0]);
        }
    }
    raw.to_string()
}

/// Reformat an entry-form date (`YYYY-MM-DD`) to `DD/MM/YYYY`.
///
/// Anything not shaped like a dashed triple passes through unchanged.
pub fn format_date_br(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 3 {
        return raw.to_string();
    }
    format!("{}/{}/{}", parts[2], parts[1], parts[0])
}

/// One-based month number of a `DD/MM/YYYY` date.
pub fn month_number(date_br: &str) -> Option<usize> {
    let month: usize = date_br.split('/').nth(1)?.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

/// Month name of a `DD/MM/YYYY` date, empty when the month part is absent
/// or out of range.
pub fn month_name(date_br: &str) -> &'static str {
    month_number(date_br)
        .map(|month| MONTH_NAMES[month - 1])
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_currency() {
        assert_eq!(parse_decimal("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_decimal("R$1.000.000,00"), 1_000_000.0);
        assert_eq!(parse_decimal("12,5"), 12.5);
        assert_eq!(parse_decimal("42"), 42.0);
    }

    #[test]
    fn test_parse_decimal_degenerate() {
        assert_eq!(parse_decimal(""), 0.0);
        assert_eq!(parse_decimal("abc"), 0.0);
        assert_eq!(parse_decimal("R$ "), 0.0);
    }

    #[test]
    fn test_normalize_feed_date() {
        // gviz months are zero-based.
        assert_eq!(normalize_feed_date("Date(2026,0,20)"), "20/01/2026");
        assert_eq!(normalize_feed_date("Date(2025,11,3)"), "03/12/2025");
        assert_eq!(normalize_feed_date("15/04/2026"), "15/04/2026");
        assert_eq!(normalize_feed_date("Date()"), "Date()");
    }

    #[test]
    fn test_format_date_br() {
        assert_eq!(format_date_br("2026-01-20"), "20/01/2026");
        assert_eq!(format_date_br("20/01/2026"), "20/01/2026");
        assert_eq!(format_date_br("janeiro"), "janeiro");
        assert_eq!(format_date_br(""), "");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name("20/01/2026"), "JANEIRO");
        assert_eq!(month_name("01/12/2025"), "DEZEMBRO");
        assert_eq!(month_name("--/--/----"), "");
        assert_eq!(month_name("20/13/2026"), "");
        assert_eq!(month_name(""), "");
    }
}
