//! Scoreboard transport client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::BroadcastConfig;

use super::types::{AttemptApiModel, ResultApiModel};

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("request timed out")]
    Timeout,

    #[error("api error: {0}")]
    ApiError(String),
}

/// Outbound transport to the external scoreboard service.
///
/// Implementations send JSON and do not consume any response body; the
/// scheduler treats failures as best-effort losses.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn post_attempt(&self, model: &AttemptApiModel) -> Result<(), ApiClientError>;

    async fn post_result(&self, model: &ResultApiModel) -> Result<(), ApiClientError>;
}

/// HTTP implementation posting to `{base_url}{route}`.
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    attempt_route: String,
    result_route: String,
}

impl HttpApiClient {
    pub fn new(config: &BroadcastConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            attempt_route: config.lift_attempt.route.clone(),
            result_route: config.lift_result.route.clone(),
        }
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), route)
    }

    async fn post_json<T: Serialize + Sync>(
        &self,
        route: &str,
        body: &T,
    ) -> Result<(), ApiClientError> {
        let url = self.endpoint(route);
        debug!(url = %url, "posting broadcast payload");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiClientError::Timeout
                } else if e.is_connect() {
                    ApiClientError::ConnectionFailed(e.to_string())
                } else {
                    ApiClientError::ApiError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(ApiClientError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        // Response body is ignored by contract.
        Ok(())
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn post_attempt(&self, model: &AttemptApiModel) -> Result<(), ApiClientError> {
        self.post_json(&self.attempt_route, model).await
    }

    async fn post_result(&self, model: &ResultApiModel) -> Result<(), ApiClientError> {
        self.post_json(&self.result_route, model).await
    }
}
