use crate::models::{AccountType, NewUser};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountFormError {
    #[error("Please fill in all the fields.")]
    MissingFields,

    #[error("Invalid date format. Please use YYYY/MM/DD and ensure the date is valid.")]
    InvalidDob,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Date of birth must be a real calendar date written as YYYY/MM/DD
pub fn is_valid_dob(dob: &str) -> bool {
    let parts: Vec<&str> = dob.split('/').collect();
    if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
        return false;
    }
    NaiveDate::parse_from_str(dob, "%Y/%m/%d").is_ok()
}

/// Admin "add new account" form
#[derive(Debug, Clone, Default)]
pub struct NewUserForm {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub password: String,
    pub account_type: Option<AccountType>,
}

impl NewUserForm {
    /// Checks run in form order; the first failure is reported
    pub fn validate(&self) -> Result<NewUser, AccountFormError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let dob = self.dob.trim();
        let email = self.email.trim();

        let account_type = match self.account_type {
            Some(t)
                if !first_name.is_empty()
                    && !last_name.is_empty()
                    && !dob.is_empty()
                    && !email.is_empty()
                    && !self.password.is_empty() =>
            {
                t
            }
            _ => return Err(AccountFormError::MissingFields),
        };

        if !is_valid_dob(dob) {
            return Err(AccountFormError::InvalidDob);
        }
        if !is_valid_email(email) {
            return Err(AccountFormError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AccountFormError::PasswordTooShort);
        }

        Ok(NewUser {
            name: format!("{} {}", first_name, last_name),
            dob: dob.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            user_profile: account_type,
        })
    }
}
