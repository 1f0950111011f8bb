//! Model infrastructure module
//!
//! # Structure
//! - `types` - ProviderOutcome and ProviderError
//! - `traits` - ProviderClient trait
//! - `payload` - request bodies and the variant builder
//! - `clients` - HTTP client implementations

pub mod clients;
pub mod payload;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use clients::{GeminiClient, HttpClientBase};
pub use payload::{Capability, PayloadBuilder, PayloadVariant};
pub use traits::ProviderClient;
pub use types::{CAPABILITY_REJECTION_STATUS, ProviderError, ProviderOutcome};
