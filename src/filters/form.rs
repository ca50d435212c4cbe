use super::query::{build_query, FilterDraft, FilterQuery};
use super::sanitize::{sanitize_numeric_input, FieldKind, SanitizedInput};
use super::validate::{validate_range, validate_year, RangeErrors, RangeViolation};
use super::{MILEAGE_MAX, PRICE_MAX};
use chrono::{Datelike, Utc};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Make,
    Model,
    Transmission,
    FuelType,
    SellerEmail,
    AgentEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Year,
    MinPrice,
    MaxPrice,
    MinMileage,
    MaxMileage,
}

impl NumericField {
    pub fn kind(&self) -> FieldKind {
        match self {
            NumericField::Year => FieldKind::Integer,
            NumericField::MinPrice | NumericField::MaxPrice => FieldKind::Price,
            NumericField::MinMileage | NumericField::MaxMileage => FieldKind::Mileage,
        }
    }
}

/// Field errors recorded by the last submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterErrors {
    pub price: RangeErrors,
    pub mileage: RangeErrors,
    pub year: Option<RangeViolation>,
}

impl FilterErrors {
    pub fn is_empty(&self) -> bool {
        self.price.is_empty() && self.mileage.is_empty() && self.year.is_none()
    }

    pub fn messages(&self) -> Vec<String> {
        self.year
            .iter()
            .chain(self.price.iter())
            .chain(self.mileage.iter())
            .map(ToString::to_string)
            .collect()
    }
}

impl fmt::Display for FilterErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for FilterErrors {}

/// Search filter form state: the draft being edited plus its field errors
#[derive(Debug, Clone, Default)]
pub struct FilterForm {
    draft: FilterDraft,
    errors: FilterErrors,
}

impl FilterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form scoped to one agent's listings
    pub fn for_agent(agent_email: &str) -> Self {
        let mut form = Self::new();
        form.set_text(TextField::AgentEmail, agent_email);
        form
    }

    pub fn draft(&self) -> &FilterDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FilterErrors {
        &self.errors
    }

    pub fn set_text(&mut self, field: TextField, raw: &str) {
        let slot = match field {
            TextField::Make => &mut self.draft.make,
            TextField::Model => &mut self.draft.model,
            TextField::Transmission => &mut self.draft.transmission,
            TextField::FuelType => &mut self.draft.fuel_type,
            TextField::SellerEmail => &mut self.draft.seller_email,
            TextField::AgentEmail => &mut self.draft.agent_email,
        };
        *slot = raw.to_string();
    }

    pub fn set_sold(&mut self, is_sold: bool) {
        self.draft.is_sold = is_sold;
    }

    /// Sanitize and store a numeric input, clearing that field's error.
    /// Returns the sanitized value so callers can show the grouped form.
    pub fn set_numeric(&mut self, field: NumericField, raw: &str) -> SanitizedInput {
        let sanitized = sanitize_numeric_input(raw, field.kind());

        match field {
            // A cleared year means no preference, not year 0
            NumericField::Year if !raw.chars().any(|c| c.is_ascii_digit()) => {
                self.draft.year.clear();
                self.errors.year = None;
            }
            NumericField::Year => {
                self.draft.year = sanitized.stored.clone();
                self.errors.year = None;
            }
            NumericField::MinPrice => {
                self.draft.min_price = sanitized.stored.clone();
                self.errors.price.min = None;
            }
            NumericField::MaxPrice => {
                self.draft.max_price = sanitized.stored.clone();
                self.errors.price.max = None;
            }
            NumericField::MinMileage => {
                self.draft.min_mileage = sanitized.stored.clone();
                self.errors.mileage.min = None;
            }
            NumericField::MaxMileage => {
                self.draft.max_mileage = sanitized.stored.clone();
                self.errors.mileage.max = None;
            }
        }

        sanitized
    }

    /// Validate every range and build the query if nothing failed.
    /// On failure the draft stays as-is for correction.
    pub fn submit(&mut self) -> Result<FilterQuery, FilterErrors> {
        self.submit_in_year(Utc::now().year())
    }

    pub fn submit_in_year(&mut self, current_year: i32) -> Result<FilterQuery, FilterErrors> {
        let draft = &self.draft;
        self.errors = FilterErrors {
            price: validate_range(&draft.min_price, &draft.max_price, PRICE_MAX, "Price")
                .err()
                .unwrap_or_default(),
            mileage: validate_range(
                &draft.min_mileage,
                &draft.max_mileage,
                MILEAGE_MAX,
                "Mileage",
            )
            .err()
            .unwrap_or_default(),
            year: validate_year(&draft.year, current_year).err(),
        };

        if !self.errors.is_empty() {
            debug!("Filter submission blocked: {}", self.errors);
            return Err(self.errors.clone());
        }

        let query = build_query(&self.draft);
        debug!(
            "Sending filters to API: {}",
            serde_json::to_string(&query).unwrap_or_default()
        );
        Ok(query)
    }

    /// Back to all-empty defaults, keeping the agent scope
    pub fn reset(&mut self) {
        let agent_email = std::mem::take(&mut self.draft.agent_email);
        *self = Self::default();
        self.draft.agent_email = agent_email;
    }
}
