use super::{MILEAGE_MAX, PRICE_MAX, YEAR_INPUT_MAX};

/// Kind of numeric input control, decides stripping rules and clamp bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Price,
    Mileage,
    /// Whole numbers such as the model year
    Integer,
}

impl FieldKind {
    pub fn allows_decimal(&self) -> bool {
        matches!(self, FieldKind::Price)
    }

    pub fn upper_bound(&self) -> f64 {
        match self {
            FieldKind::Price => PRICE_MAX,
            FieldKind::Mileage => MILEAGE_MAX,
            FieldKind::Integer => YEAR_INPUT_MAX,
        }
    }
}

/// Result of cleaning one keystroke's worth of input
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedInput {
    pub value: f64,
    /// Plain number, what gets stored back into the draft
    pub stored: String,
    /// Thousands-grouped number for display, e.g. "9,999,999"
    pub display: String,
}

/// Clean raw text from an input control into a bounded number.
///
/// Everything but digits is dropped (a decimal point survives for prices, and
/// only its first occurrence counts). Text that still doesn't parse becomes 0.
pub fn sanitize_numeric_input(raw: &str, kind: FieldKind) -> SanitizedInput {
    let cleaned = strip_numeric(raw, kind.allows_decimal());
    let parsed = cleaned.parse::<f64>().unwrap_or(0.0);
    let value = if parsed.is_finite() {
        parsed.clamp(0.0, kind.upper_bound())
    } else {
        0.0
    };

    SanitizedInput {
        value,
        stored: format_plain(value),
        display: group_thousands(value),
    }
}

/// Keep only digits, plus a single decimal point when `allow_decimal` is set.
/// "1.2.3" collapses to "1.23".
pub(crate) fn strip_numeric(raw: &str, allow_decimal: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;

    for c in raw.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if c == '.' && allow_decimal && !seen_point {
            out.push(c);
            seen_point = true;
        }
    }

    out
}

pub(crate) fn format_plain(value: f64) -> String {
    format!("{}", value)
}

/// en-US style grouping with at most three fraction digits
pub(crate) fn group_thousands(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let whole = rounded.trunc().abs() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let fraction = format!("{:.3}", rounded.fract().abs());
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0');
    if fraction.len() > 1 {
        grouped.push_str(fraction);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
