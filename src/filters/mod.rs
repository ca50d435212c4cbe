pub mod form;
pub mod query;
pub mod sanitize;
pub mod validate;

pub use form::{FilterErrors, FilterForm, NumericField, TextField};
pub use query::{build_query, FilterDraft, FilterQuery};
pub use sanitize::{sanitize_numeric_input, FieldKind, SanitizedInput};
pub use validate::{validate_range, validate_year, RangeErrors, RangeViolation};

/// Highest price accepted by the search filters
pub const PRICE_MAX: f64 = 9_999_999.0;

/// Highest mileage accepted by the search filters
pub const MILEAGE_MAX: f64 = 1_000_000.0;

/// Year inputs are capped at four digits while typing
pub const YEAR_INPUT_MAX: f64 = 9_999.0;

/// Earliest model year accepted on submission
pub const YEAR_MIN: i32 = 1886;
