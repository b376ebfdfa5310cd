//! Mock scoreboard client for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::broadcast::{ApiClient, ApiClientError, AttemptApiModel, ResultApiModel};

/// Mock implementation of the [`ApiClient`] trait.
///
/// Records every posted payload for assertions and supports one-shot error
/// injection:
///
/// ```rust,ignore
/// let client = MockApiClient::new();
/// client.set_next_error(ApiClientError::Timeout).await;
/// // next post fails, subsequent posts succeed and are recorded
/// ```
#[derive(Debug, Default)]
pub struct MockApiClient {
    attempts: Arc<RwLock<Vec<AttemptApiModel>>>,
    results: Arc<RwLock<Vec<ResultApiModel>>>,
    next_error: Arc<RwLock<Option<ApiClientError>>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt payloads posted so far.
    pub async fn posted_attempts(&self) -> Vec<AttemptApiModel> {
        self.attempts.read().await.clone()
    }

    /// Result payloads posted so far.
    pub async fn posted_results(&self) -> Vec<ResultApiModel> {
        self.results.read().await.clone()
    }

    pub async fn attempt_count(&self) -> usize {
        self.attempts.read().await.len()
    }

    pub async fn result_count(&self) -> usize {
        self.results.read().await.len()
    }

    /// Configure the next post to fail with the given error.
    pub async fn set_next_error(&self, error: ApiClientError) {
        *self.next_error.write().await = Some(error);
    }

    async fn take_error(&self) -> Option<ApiClientError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn post_attempt(&self, model: &AttemptApiModel) -> Result<(), ApiClientError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        self.attempts.write().await.push(model.clone());
        Ok(())
    }

    async fn post_result(&self, model: &ResultApiModel) -> Result<(), ApiClientError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        self.results.write().await.push(model.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meet::{Lift, WeightUnit};
    use crate::testing::fixtures;

    fn attempt_model() -> AttemptApiModel {
        AttemptApiModel {
            competition_name: "Test Meet".to_string(),
            lifter: fixtures::entry(1, "A", 1),
            lift_code: Lift::Squat,
            weight_unit: WeightUnit::Kg,
            lifter_weight_class: "83".to_string(),
        }
    }

    #[tokio::test]
    async fn test_records_posted_attempts() {
        let client = MockApiClient::new();
        client.post_attempt(&attempt_model()).await.unwrap();
        client.post_attempt(&attempt_model()).await.unwrap();

        assert_eq!(client.attempt_count().await, 2);
        assert_eq!(client.posted_attempts().await[0].lifter.id, 1);
        assert_eq!(client.result_count().await, 0);
    }

    #[tokio::test]
    async fn test_error_injection_is_one_shot() {
        let client = MockApiClient::new();
        client.set_next_error(ApiClientError::Timeout).await;

        assert!(client.post_attempt(&attempt_model()).await.is_err());
        assert!(client.post_attempt(&attempt_model()).await.is_ok());
        assert_eq!(client.attempt_count().await, 1);
    }
}
