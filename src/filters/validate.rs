use super::sanitize::group_thousands;
use super::YEAR_MIN;
use thiserror::Error;

/// Why one side of a min/max pair was rejected.
///
/// The `Display` output is the message shown under the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeViolation {
    #[error("{field} must be a number")]
    NotANumber { field: String },

    #[error("{field} cannot be less than 0")]
    NegativeValue { field: String },

    #[error("{field} cannot be greater than {other}")]
    MinExceedsMax { field: String, other: String },

    #[error("{field} cannot exceed {bound}")]
    ExceedsBound { field: String, bound: String },

    #[error("{field} cannot be earlier than {minimum}")]
    BelowMinimum { field: String, minimum: String },
}

/// Errors for a min/max pair, each side reported independently
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeErrors {
    pub min: Option<RangeViolation>,
    pub max: Option<RangeViolation>,
}

impl RangeErrors {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RangeViolation> {
        self.min.iter().chain(self.max.iter())
    }
}

enum Parsed {
    Empty,
    Invalid,
    Number(f64),
}

fn parse_grouped(raw: &str) -> Parsed {
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Parsed::Empty;
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Parsed::Number(v),
        _ => Parsed::Invalid,
    }
}

/// Check a min/max pair of raw inputs against `[0, bound]`.
///
/// Empty inputs are not evaluated. Per side the first failing check wins, in
/// order: not a number, negative, min above max (min side only), above bound.
pub fn validate_range(
    min_raw: &str,
    max_raw: &str,
    bound: f64,
    label: &str,
) -> Result<(), RangeErrors> {
    let min_field = format!("Min {}", label);
    let max_field = format!("Max {}", label);
    let bound_text = group_thousands(bound);

    let min = parse_grouped(min_raw);
    let max = parse_grouped(max_raw);

    let min_error = match min {
        Parsed::Empty => None,
        Parsed::Invalid => Some(RangeViolation::NotANumber {
            field: min_field.clone(),
        }),
        Parsed::Number(v) if v < 0.0 => Some(RangeViolation::NegativeValue {
            field: min_field.clone(),
        }),
        Parsed::Number(v) if matches!(max, Parsed::Number(m) if v > m) => {
            Some(RangeViolation::MinExceedsMax {
                field: min_field.clone(),
                other: max_field.clone(),
            })
        }
        Parsed::Number(v) if v > bound => Some(RangeViolation::ExceedsBound {
            field: min_field.clone(),
            bound: bound_text.clone(),
        }),
        Parsed::Number(_) => None,
    };

    let max_error = match max {
        Parsed::Empty => None,
        Parsed::Invalid => Some(RangeViolation::NotANumber { field: max_field }),
        Parsed::Number(v) if v < 0.0 => Some(RangeViolation::NegativeValue { field: max_field }),
        Parsed::Number(v) if v > bound => Some(RangeViolation::ExceedsBound {
            field: max_field,
            bound: bound_text,
        }),
        Parsed::Number(_) => None,
    };

    let errors = RangeErrors {
        min: min_error,
        max: max_error,
    };

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check a model year against `[YEAR_MIN, current_year + 1]`.
///
/// Next year's models are already on sale, hence the `+ 1`.
pub fn validate_year(raw: &str, current_year: i32) -> Result<(), RangeViolation> {
    let field = "Year".to_string();
    match parse_grouped(raw) {
        Parsed::Empty => Ok(()),
        Parsed::Invalid => Err(RangeViolation::NotANumber { field }),
        Parsed::Number(v) if v < f64::from(YEAR_MIN) => Err(RangeViolation::BelowMinimum {
            field,
            minimum: YEAR_MIN.to_string(),
        }),
        Parsed::Number(v) if v > f64::from(current_year + 1) => {
            Err(RangeViolation::ExceedsBound {
                field,
                bound: (current_year + 1).to_string(),
            })
        }
        Parsed::Number(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{MILEAGE_MAX, PRICE_MAX};

    #[test]
    fn min_above_max_is_reported_on_min() {
        let errors = validate_range("500", "100", PRICE_MAX, "Price").unwrap_err();
        assert_eq!(
            errors.min,
            Some(RangeViolation::MinExceedsMax {
                field: "Min Price".into(),
                other: "Max Price".into(),
            })
        );
        assert!(errors.max.is_none());
        assert_eq!(
            errors.min.unwrap().to_string(),
            "Min Price cannot be greater than Max Price"
        );
    }

    #[test]
    fn empty_min_is_not_evaluated() {
        assert!(validate_range("", "200", PRICE_MAX, "Price").is_ok());
        assert!(validate_range("", "", PRICE_MAX, "Price").is_ok());
        assert!(validate_range("   ", "", MILEAGE_MAX, "Mileage").is_ok());
    }

    #[test]
    fn grouped_values_are_accepted() {
        assert!(validate_range("1,000", "25,000", PRICE_MAX, "Price").is_ok());
    }

    #[test]
    fn not_a_number_on_either_side() {
        let errors = validate_range("12abc", "x", MILEAGE_MAX, "Mileage").unwrap_err();
        assert_eq!(errors.min.unwrap().to_string(), "Min Mileage must be a number");
        assert_eq!(errors.max.unwrap().to_string(), "Max Mileage must be a number");
    }

    #[test]
    fn negative_values_are_rejected() {
        let errors = validate_range("-1", "-5", PRICE_MAX, "Price").unwrap_err();
        assert!(matches!(errors.min, Some(RangeViolation::NegativeValue { .. })));
        assert!(matches!(errors.max, Some(RangeViolation::NegativeValue { .. })));
    }

    #[test]
    fn bound_messages_use_grouping() {
        let errors = validate_range("", "1,000,001", MILEAGE_MAX, "Mileage").unwrap_err();
        assert!(errors.min.is_none());
        assert_eq!(
            errors.max.unwrap().to_string(),
            "Max Mileage cannot exceed 1,000,000"
        );
    }

    #[test]
    fn min_ordering_check_precedes_bound_check() {
        let errors = validate_range("20000000", "10", PRICE_MAX, "Price").unwrap_err();
        assert!(matches!(errors.min, Some(RangeViolation::MinExceedsMax { .. })));

        let errors = validate_range("20000000", "", PRICE_MAX, "Price").unwrap_err();
        assert_eq!(
            errors.min.unwrap().to_string(),
            "Min Price cannot exceed 9,999,999"
        );
    }

    #[test]
    fn unparsable_max_does_not_trigger_ordering() {
        let errors = validate_range("500", "abc", PRICE_MAX, "Price").unwrap_err();
        assert!(errors.min.is_none());
        assert!(errors.max.is_some());
    }

    #[test]
    fn year_window() {
        assert!(validate_year("", 2026).is_ok());
        assert!(validate_year("2027", 2026).is_ok());
        assert!(validate_year("1886", 2026).is_ok());
        assert_eq!(
            validate_year("1800", 2026).unwrap_err().to_string(),
            "Year cannot be earlier than 1886"
        );
        assert_eq!(
            validate_year("2030", 2026).unwrap_err().to_string(),
            "Year cannot exceed 2027"
        );
    }
}
