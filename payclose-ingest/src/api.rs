//! Card source backed by the finance backend's REST API.

use anyhow::{Context, Result};
use payclose_core::BillingProfile;

use crate::backend_json::{CardRecord, collect_profiles};

/// Pulls the caller's active cards from `GET {base_url}/credit-cards`.
///
/// This is the one asynchronous read in the system; it completes before
/// any cycle computation runs. The backend resolves the user from the
/// bearer token, so no user id travels here.
#[derive(Debug, Clone)]
pub struct ApiSource {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl ApiSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub async fn fetch_cards(&self) -> Result<Vec<BillingProfile>> {
        let url = format!("{}/credit-cards", self.base_url.trim_end_matches('/'));
        tracing::debug!(%url, "fetching card snapshot");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?
            .error_for_status()
            .with_context(|| format!("fetching {url}"))?;

        let records: Vec<CardRecord> = response
            .json()
            .await
            .context("decoding card snapshot response")?;

        tracing::info!(cards = records.len(), "card snapshot fetched");
        collect_profiles(records)
    }
}
