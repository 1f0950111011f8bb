//! Model traits

use super::payload::PayloadVariant;
use super::types::ProviderOutcome;
use async_trait::async_trait;
use std::time::Duration;

/// One classified call to a generative model endpoint.
///
/// Implementations perform exactly one network request per call and never
/// retry; retry policy belongs to the dispatcher.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Get the client ID used in logs and errors
    fn id(&self) -> &str;

    /// Send one request variant
    async fn call(&self, variant: &PayloadVariant, timeout: Duration) -> ProviderOutcome;
}
