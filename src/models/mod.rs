use serde::{Deserialize, Serialize};
use std::fmt;

/// A car listing as returned by the marketplace API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i64,
    pub transmission: String,
    pub fuel_type: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_sold: Option<bool>,
}

impl Listing {
    /// Card title, e.g. "Honda Civic (2019)"
    pub fn title(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }
}

/// Account profile, serialized with the names the API expects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountType {
    #[serde(rename = "buyer")]
    Buyer,
    #[serde(rename = "seller")]
    Seller,
    #[serde(rename = "usedCarAgent")]
    UsedCarAgent,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Buyer => "buyer",
            AccountType::Seller => "seller",
            AccountType::UsedCarAgent => "usedCarAgent",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "buyer" => Ok(AccountType::Buyer),
            "seller" => Ok(AccountType::Seller),
            "usedCarAgent" | "agent" => Ok(AccountType::UsedCarAgent),
            other => Err(format!("unknown account type: {}", other)),
        }
    }
}

/// User account row from the admin search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub user_profile: Option<String>,
    #[serde(default)]
    pub is_suspended: Option<bool>,
}

/// Payload for `create_user`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub dob: String,
    pub email: String,
    pub password: String,
    pub user_profile: AccountType,
}
