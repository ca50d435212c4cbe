use crate::api::traits::MarketplaceApi;
use crate::api::types::{
    AccountList, DeleteListingRequest, DeleteListingResponse, ErrorBody, ListingList,
};
use crate::config::ClientConfig;
use crate::filters::FilterQuery;
use crate::models::{Listing, NewUser, UserAccount};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use tracing::{debug, info, warn};

/// HTTP client for the marketplace API
pub struct MarketplaceClient {
    client: Client,
    config: ClientConfig,
}

impl MarketplaceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("car-market/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// `/api/users/suspend/{id}` with the id escaped as a single path segment
    fn suspend_url(&self, id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.endpoint("/api/users/suspend"))
            .context("Invalid API base URL")?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("API base URL cannot take a path"))?
            .push(id);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send the request and turn non-2xx statuses into errors, preferring the
    /// API's own `{"error": ...}` message
    async fn send(&self, request: RequestBuilder, action: &str) -> Result<Response> {
        let response = self
            .authorized(request)
            .send()
            .await
            .with_context(|| format!("Failed to {}", action))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("API returned status {} while trying to {}", status, action);
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) => anyhow::bail!("Failed to {}: {} ({})", action, err.error, status),
            Err(_) => anyhow::bail!("Failed to {}: {}", action, status),
        }
    }
}

#[async_trait]
impl MarketplaceApi for MarketplaceClient {
    async fn search_listings(&self, query: &FilterQuery) -> Result<Vec<Listing>> {
        let url = self.config.endpoint("/api/listing/search_listing");
        if query.is_unfiltered() {
            debug!("POST {} (unfiltered search)", url);
        } else {
            debug!("POST {}", url);
        }

        let response = self
            .send(self.client.post(&url).json(query), "fetch listings")
            .await?;
        let body: ListingList = response
            .json()
            .await
            .context("Failed to parse listings response")?;

        info!("Fetched {} listings", body.listing_list.len());
        Ok(body.listing_list)
    }

    async fn delete_listing(&self, id: i64) -> Result<()> {
        let url = self.config.endpoint("/api/listing/delete_listing");
        debug!("POST {} (id {})", url, id);

        let response = self
            .send(
                self.client.post(&url).json(&DeleteListingRequest { id }),
                "delete listing",
            )
            .await?;
        let body: DeleteListingResponse = response
            .json()
            .await
            .context("Failed to parse delete response")?;

        if !body.success {
            anyhow::bail!("Failed to delete listing {}", id);
        }
        info!("Deleted listing {}", id);
        Ok(())
    }

    async fn search_users(&self, term: &str) -> Result<Vec<UserAccount>> {
        let url = self.config.endpoint("/api/users/search_user");
        debug!("GET {} (search {:?})", url, term);

        let response = self
            .send(
                self.client.get(&url).query(&[("search", term)]),
                "fetch users",
            )
            .await?;
        let body: AccountList = response
            .json()
            .await
            .context("Failed to parse users response")?;

        info!("Fetched {} users", body.account_list.len());
        Ok(body.account_list)
    }

    async fn view_user(&self, email: &str) -> Result<UserAccount> {
        let url = self.config.endpoint("/api/users/view_user");
        debug!("GET {} (email {})", url, email);

        let response = self
            .send(self.client.get(&url).query(&[("email", email)]), "view user")
            .await?;
        response
            .json()
            .await
            .context("Failed to parse user response")
    }

    async fn create_user(&self, user: &NewUser) -> Result<()> {
        let url = self.config.endpoint("/api/users/create_user");
        debug!("POST {} ({})", url, user.email);

        self.send(self.client.post(&url).json(user), "add user")
            .await?;
        info!("Created {} account for {}", user.user_profile, user.email);
        Ok(())
    }

    async fn suspend_user(&self, id: &str) -> Result<()> {
        let url = self.suspend_url(id)?;
        debug!("POST {}", url);

        self.send(self.client.post(url), "suspend user").await?;
        info!("Suspended user {}", id);
        Ok(())
    }
}
