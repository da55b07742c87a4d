use thousands::Separable;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Formats a count with a thousands separator, e.g. `1234` -> `"1,234"`.
pub fn format_count(count: usize) -> String {
    count.separate_with_commas()
}

/// Formats a number of days with one decimal place.
pub fn format_days(days: f64) -> String {
    format!("{days:.1}")
}

/// Cuts `s` so that it fits in `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        // leave one column for the ellipsis
        if current_width + char_width > width - 1 {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(1234567, "1,234,567")]
    fn test_format_count(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(format_count(count), expected);
    }

    #[rstest]
    #[case(0.0, "0.0")]
    #[case(2.0, "2.0")]
    #[case(1.5, "1.5")]
    #[case(2.44, "2.4")]
    fn test_format_days(#[case] days: f64, #[case] expected: &str) {
        assert_eq!(format_days(days), expected);
    }

    #[test]
    fn test_truncate_to_width_fits() {
        assert_eq!(truncate_to_width("Noise", 5), "Noise");
    }

    #[test]
    fn test_truncate_to_width_cuts() {
        assert_eq!(truncate_to_width("Noise - Residential", 8), "Noise -…");
    }

    #[test]
    fn test_truncate_to_width_double_width() {
        assert_eq!(truncate_to_width("こんにちは", 5), "こん…");
    }

    #[test]
    fn test_truncate_to_width_zero() {
        assert_eq!(truncate_to_width("Noise", 0), "");
    }
}
