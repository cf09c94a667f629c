use chrono::DateTime;

/// Formats an RFC 3339 timestamp like "Wed Apr 30 2025". Anything that does
/// not parse is shown as-is.
pub fn format_iso_date(iso_string: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(iso_string) {
        datetime.format("%a %b %d %Y").to_string()
    } else {
        iso_string.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_like_a_js_date_string() {
        assert_eq!(
            format_iso_date("2025-04-30T05:17:22.000Z"),
            "Wed Apr 30 2025"
        );
    }

    #[test]
    fn echoes_unparseable_input() {
        assert_eq!(format_iso_date("sometime soon"), "sometime soon");
    }
}
