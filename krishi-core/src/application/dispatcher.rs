//! Sequential fallback across request variants.
//!
//! Only a capability rejection (HTTP 400) moves on to the next variant. Any
//! fatal outcome stops the chain so that a real outage is reported instead of
//! being masked by attempts that cannot help.

use crate::infrastructure::model::{PayloadVariant, ProviderClient, ProviderError, ProviderOutcome};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Drives a [`ProviderClient`] across ordered variants
pub struct VariantFallbackDispatcher<'a> {
    client: &'a dyn ProviderClient,
}

impl<'a> VariantFallbackDispatcher<'a> {
    pub fn new(client: &'a dyn ProviderClient) -> Self {
        Self { client }
    }

    /// Try each variant in order until one succeeds or one fails fatally.
    ///
    /// When every variant is rejected the last rejection is returned. An empty
    /// variant list yields `ProviderError::Exhausted`.
    pub async fn dispatch(&self, variants: &[PayloadVariant], timeout: Duration) -> ProviderOutcome {
        let mut last_rejection: Option<ProviderOutcome> = None;

        for (attempt, variant) in variants.iter().enumerate() {
            debug!(
                provider = self.client.id(),
                attempt,
                capability = %variant.capability(),
                "Dispatching request variant"
            );

            match self.client.call(variant, timeout).await {
                ProviderOutcome::Success(envelope) => {
                    info!(
                        provider = self.client.id(),
                        attempt,
                        capability = %variant.capability(),
                        "Provider accepted request variant"
                    );
                    return ProviderOutcome::Success(envelope);
                }
                ProviderOutcome::Recoverable { status, body } => {
                    warn!(
                        provider = self.client.id(),
                        attempt,
                        capability = %variant.capability(),
                        status = status.as_u16(),
                        "Provider rejected request variant, trying next"
                    );
                    last_rejection = Some(ProviderOutcome::Recoverable { status, body });
                }
                ProviderOutcome::Fatal(error) => {
                    warn!(
                        provider = self.client.id(),
                        attempt,
                        capability = %variant.capability(),
                        %error,
                        "Provider call failed, aborting variant chain"
                    );
                    return ProviderOutcome::Fatal(error);
                }
            }
        }

        last_rejection
            .unwrap_or_else(|| ProviderOutcome::Fatal(ProviderError::exhausted(self.client.id())))
    }
}
