/// Format ISO date string to DD.MM.YYYY format
/// Example: "2026-02-11" or "2026-02-11T14:02:26Z" -> "11.02.2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Current date in the wire format (YYYY-MM-DD), from the browser clock.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year() as u32,
        now.get_month() as u32 + 1,
        now.get_date() as u32
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-02-11"), "11.02.2026");
        assert_eq!(format_date("2026-02-11T14:02:26.123Z"), "11.02.2026");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
