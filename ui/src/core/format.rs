//! Formatting helpers for presenting dashboard numbers.

/// Thousands-separated article counts: `1234` → `"1,234"`.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed growth badge: `12` → `"+12%"`, `-3` → `"-3%"`.
pub fn format_growth(pct: i32) -> String {
    format!("{pct:+}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(92), "92");
        assert_eq!(format_count(1_234), "1,234");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn growth_keeps_its_sign() {
        assert_eq!(format_growth(18), "+18%");
        assert_eq!(format_growth(-3), "-3%");
        assert_eq!(format_growth(0), "+0%");
    }
}
