//! Activities REST API Client
//!
//! Native HTTP client for the three activities endpoints.

use reqwest::{Client, Response};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::endpoints;
use crate::error::{ClientError, ClientResult};
use crate::model::{Activities, ApiMessage};

/// Activities REST API client
pub struct ActivitiesClient {
    client: Client,
    base_url: String,
}

impl ActivitiesClient {
    /// Create a new client with the given configuration
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: endpoints::normalize_base(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full activity mapping
    pub async fn list(&self) -> ClientResult<Activities> {
        let url = endpoints::activities_url(&self.base_url);
        tracing::debug!(url = %url, "Fetching activities");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let activities: Activities = serde_json::from_str(&body)?;
        tracing::debug!(count = activities.len(), "Fetched activities");
        Ok(activities)
    }

    /// Sign `email` up for `activity`, returning the server's confirmation
    pub async fn signup(&self, activity: &str, email: &str) -> ClientResult<String> {
        let url = endpoints::signup_url(&self.base_url, activity, email);
        tracing::debug!(activity = %activity, email = %email, "Signing up");

        let response = self.client.post(&url).send().await?;
        let (status, message) = read_message(response).await?;

        if status.is_success() {
            Ok(message.message.unwrap_or_default())
        } else {
            tracing::warn!(status = status.as_u16(), "Signup rejected");
            Err(ClientError::Api {
                status: status.as_u16(),
                detail: message.detail,
            })
        }
    }

    /// Remove `email` from `activity`. The confirmation text is optional;
    /// only the status decides success.
    pub async fn unregister(&self, activity: &str, email: &str) -> ClientResult<Option<String>> {
        let url = endpoints::unregister_url(&self.base_url, activity, email);
        tracing::debug!(activity = %activity, email = %email, "Unregistering");

        let response = self.client.post(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(serde_json::from_str::<ApiMessage>(&body)
                .ok()
                .and_then(|m| m.message))
        } else {
            tracing::warn!(status = status.as_u16(), "Unregister rejected");
            Err(api_error(status.as_u16(), &body))
        }
    }
}

/// Read a signup body. A body that is not an [`ApiMessage`] is a parse
/// failure whatever the status.
async fn read_message(response: Response) -> ClientResult<(reqwest::StatusCode, ApiMessage)> {
    let status = response.status();
    let body = response.text().await?;
    let message: ApiMessage = serde_json::from_str(&body)?;
    Ok((status, message))
}

fn api_error(status: u16, body: &str) -> ClientError {
    let detail = serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.detail);
    ClientError::Api { status, detail }
}
