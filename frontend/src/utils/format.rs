/// Whole dollars with comma thousands separators, e.g. `$12,500`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(7500), "$7,500");
        assert_eq!(format_currency(10_000), "$10,000");
        assert_eq!(format_currency(100_000), "$100,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
    }
}
