use super::sanitize::strip_numeric;
use serde::{Deserialize, Serialize, Serializer};

/// Search criteria exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterDraft {
    pub make: String,
    pub model: String,
    pub year: String,
    pub min_price: String,
    pub max_price: String,
    pub min_mileage: String,
    pub max_mileage: String,
    pub transmission: String,
    pub fuel_type: String,
    pub is_sold: bool,
    pub seller_email: String,
    pub agent_email: String,
}

/// Normalized search payload, only meaningful fields are present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_price"
    )]
    pub min_price: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_price"
    )]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_mileage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mileage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    pub is_sold: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_email: Option<String>,
}

// Whole prices go out as JSON integers: 5000, not 5000.0
fn serialize_price<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
            serializer.serialize_some(&(*v as i64))
        }
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}

fn text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn whole<T: std::str::FromStr>(raw: &str) -> Option<T> {
    strip_numeric(raw, false).parse().ok()
}

fn decimal(raw: &str) -> Option<f64> {
    strip_numeric(raw, true)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Turn a draft into the sparse search payload.
///
/// Never fails: a numeric field that doesn't parse is left out, which the
/// search endpoint treats as "no preference".
pub fn build_query(draft: &FilterDraft) -> FilterQuery {
    FilterQuery {
        make: text(&draft.make),
        model: text(&draft.model),
        year: whole(&draft.year),
        min_price: decimal(&draft.min_price),
        max_price: decimal(&draft.max_price),
        min_mileage: whole(&draft.min_mileage),
        max_mileage: whole(&draft.max_mileage),
        transmission: text(&draft.transmission),
        fuel_type: text(&draft.fuel_type),
        is_sold: draft.is_sold,
        seller_email: text(&draft.seller_email),
        agent_email: text(&draft.agent_email),
    }
}

impl FilterQuery {
    pub fn is_unfiltered(&self) -> bool {
        *self
            == FilterQuery {
                is_sold: self.is_sold,
                ..Default::default()
            }
    }
}
