//! Small text formatting helpers shared by console and TUI output.

use chrono::NaiveDate;

/// Currency display matching the backend's own habits: whole amounts lose
/// the decimals ("$15"), fractional ones keep what the number carries
/// ("$7.5"). The amount itself always comes from the backend.
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", amount as i64)
    } else {
        format!("${}", amount)
    }
}

/// "adult" -> "Adult", for ticket row labels
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Friendly date for the TUI ("Mon Jul 1, 2024")
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%a %b %-d, %Y").to_string()
}

/// Wire-shaped date for console output and summaries
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_prices_drop_decimals() {
        assert_eq!(format_price(15.0), "$15");
        assert_eq!(format_price(25.0), "$25");
        assert_eq!(format_price(0.0), "$0");
    }

    #[test]
    fn fractional_prices_keep_them() {
        assert_eq!(format_price(9.5), "$9.5");
        assert_eq!(format_price(19.75), "$19.75");
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("adult"), "Adult");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("vip pass"), "Vip pass");
    }
}
