//! Won-amount formatting: magnitude-scaled units and digit grouping.

const JO: f64 = 1_000_000_000_000.0;
const EOK: f64 = 100_000_000.0;
const MAN: f64 = 10_000.0;

/// Format an amount using the largest applicable Korean unit
/// (조 / 억 / 만 / 원), flooring away the remainder.
pub fn format_unit(amount: f64) -> String {
    if amount >= JO {
        format!("{}조 원", (amount / JO).floor() as i64)
    } else if amount >= EOK {
        format!("{}억 원", (amount / EOK).floor() as i64)
    } else if amount >= MAN {
        format!("{}만 원", (amount / MAN).floor() as i64)
    } else {
        format!("{} 원", amount.round() as i64)
    }
}

/// Round to the nearest won and insert thousands separators.
pub fn group_digits(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_million_scale() {
        assert_eq!(format_unit(150_000_000.0), "1억 원");
    }

    #[test]
    fn trillion_scale() {
        assert_eq!(format_unit(2_500_000_000_000.0), "2조 원");
    }

    #[test]
    fn ten_thousand_scale() {
        assert_eq!(format_unit(987_654.0), "98만 원");
    }

    #[test]
    fn base_unit_below_ten_thousand() {
        assert_eq!(format_unit(9_999.0), "9999 원");
        assert_eq!(format_unit(0.0), "0 원");
    }

    #[test]
    fn unit_boundaries_are_inclusive() {
        assert_eq!(format_unit(10_000.0), "1만 원");
        assert_eq!(format_unit(100_000_000.0), "1억 원");
        assert_eq!(format_unit(1_000_000_000_000.0), "1조 원");
    }

    #[test]
    fn remainder_is_discarded_not_rounded() {
        // 1.9억 floors to 1억, never rounds to 2억.
        assert_eq!(format_unit(199_999_999.0), "1억 원");
    }

    #[test]
    fn grouping_inserts_commas() {
        assert_eq!(group_digits(1_234_567.0), "1,234,567");
        assert_eq!(group_digits(1_000.0), "1,000");
        assert_eq!(group_digits(999.0), "999");
        assert_eq!(group_digits(0.0), "0");
    }

    #[test]
    fn grouping_rounds_fractions() {
        assert_eq!(group_digits(1_234.6), "1,235");
    }

    #[test]
    fn grouping_handles_negative() {
        assert_eq!(group_digits(-1_234_567.0), "-1,234,567");
    }
}
