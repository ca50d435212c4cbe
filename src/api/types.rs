use crate::models::{Listing, UserAccount};
use serde::{Deserialize, Serialize};

/// Response of `search_listing`
#[derive(Debug, Clone, Deserialize)]
pub struct ListingList {
    #[serde(default)]
    pub listing_list: Vec<Listing>,
}

/// Response of `search_user`
#[derive(Debug, Clone, Deserialize)]
pub struct AccountList {
    #[serde(default)]
    pub account_list: Vec<UserAccount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteListingRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteListingResponse {
    #[serde(default)]
    pub success: bool,
}

/// Error body the API sends with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
