// Indonesian (id-ID) number formatting helpers

/// Insert "." separators into a plain digit string: "1500" -> "1.500".
fn group_digits(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

/// Format an integer with id-ID thousands grouping: 1500 -> "1.500".
pub fn group_thousands(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a number the way id-ID locale output does: grouped integer part,
/// decimal comma, at most `max_decimals` fraction digits with trailing
/// zeros trimmed. 1234.56 -> "1.234,56", 1000.0 -> "1.000".
pub fn format_id(value: f64, max_decimals: usize) -> String {
    let rendered = format!("{:.*}", max_decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (rendered.as_str(), ""),
    };

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Whole-rupiah currency display: 1500.0 -> "Rp 1.500".
pub fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_id(value, 0))
}

/// Axis label for an amount already expressed in millions of rupiah:
/// 2.0 -> "Rp 2 Jt".
pub fn format_jt(value_jt: f64, decimals: usize) -> String {
    format!("Rp {} Jt", format_id(value_jt, decimals))
}

/// Percentage share of `part` in `total` at one decimal place. A zero or
/// negative total yields "0.0" rather than a division by zero.
pub fn format_percent(part: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0.0".to_string();
    }
    format!("{:.1}", part / total * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1500), "1.500");
        assert_eq!(group_thousands(1234567), "1.234.567");
        assert_eq!(group_thousands(-42000), "-42.000");
    }

    #[test]
    fn test_format_id_trims_trailing_zeros() {
        assert_eq!(format_id(1234.56, 2), "1.234,56");
        assert_eq!(format_id(1234.5, 2), "1.234,5");
        assert_eq!(format_id(1000.0, 2), "1.000");
        assert_eq!(format_id(0.1, 1), "0,1");
    }

    #[test]
    fn test_format_rupiah() {
        let formatted = format_rupiah(1500.0);
        assert!(formatted.contains("Rp"));
        assert!(formatted.contains("1.500"));
        assert_eq!(formatted, "Rp 1.500");
    }

    #[test]
    fn test_format_jt() {
        assert_eq!(format_jt(2.0, 0), "Rp 2 Jt");
        assert_eq!(format_jt(2.0, 1), "Rp 2 Jt");
        assert_eq!(format_jt(2.5, 1), "Rp 2,5 Jt");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(1.0, 3.0), "33.3");
        assert_eq!(format_percent(3200.0, 6400.0), "50.0");
        assert_eq!(format_percent(5.0, 0.0), "0.0");
    }
}
