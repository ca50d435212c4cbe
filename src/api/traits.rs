use crate::filters::FilterQuery;
use crate::models::{Listing, NewUser, UserAccount};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Operations the marketplace API exposes to the dashboards
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// Listings matching the query; an unfiltered query returns everything
    async fn search_listings(&self, query: &FilterQuery) -> Result<Vec<Listing>>;

    async fn delete_listing(&self, id: i64) -> Result<()>;

    async fn search_users(&self, term: &str) -> Result<Vec<UserAccount>>;

    async fn view_user(&self, email: &str) -> Result<UserAccount>;

    async fn create_user(&self, user: &NewUser) -> Result<()>;

    async fn suspend_user(&self, id: &str) -> Result<()>;

    /// Suspend one account after another, stopping at the first failure.
    /// Returns how many were suspended.
    async fn suspend_users(&self, ids: &[String]) -> Result<usize> {
        for (done, id) in ids.iter().enumerate() {
            if let Err(e) = self.suspend_user(id).await {
                return Err(e.context(format!(
                    "Failed to suspend users ({} of {} suspended)",
                    done,
                    ids.len()
                )));
            }
        }
        info!("Suspended {} users", ids.len());
        Ok(ids.len())
    }
}
