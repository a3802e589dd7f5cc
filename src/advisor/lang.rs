//! Language tag and currency display helpers

use serde::{Deserialize, Serialize};

/// Supported advisory languages
///
/// Azerbaijani is the product's primary language; English is the alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Az,
    En,
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Az
    }
}

/// Round to a whole amount and group digits in thousands
pub fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
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

/// Format an amount with the manat sign, as shown in every advisory string
pub fn format_manat(value: f64) -> String {
    format!("{} ₼", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1_000.0), "1,000");
        assert_eq!(format_amount(43_200.0), "43,200");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_rounds_before_grouping() {
        assert_eq!(format_amount(1_234.56), "1,235");
        assert_eq!(format_amount(-1_234.56), "-1,235");
    }

    #[test]
    fn test_manat_suffix() {
        assert_eq!(format_manat(43_200.0), "43,200 ₼");
    }
}
