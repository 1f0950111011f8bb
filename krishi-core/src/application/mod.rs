//! # Application Module
//!
//! Task orchestration on top of the provider clients.
//!
//! ## Submodules
//!
//! - [`gateway`] - `AgriGateway`, one method per agricultural task
//! - [`dispatcher`] - sequential fallback across request variants
//! - [`extract`] - text extraction from provider envelopes
//! - [`parser`] - fence stripping and JSON validation
//! - [`degraded`] - placeholder payloads for unparsable replies
//! - [`query`] - typed task inputs from loose JSON bodies
//! - [`advisory`] - forecast normalisation
//! - [`diagnostics`] - credential probe report

pub mod advisory;
pub mod degraded;
pub mod diagnostics;
pub mod dispatcher;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod parser;
pub mod prompts;
pub mod query;

pub use advisory::AdvisoryReport;
pub use degraded::{DegradedResponseBuilder, DegradedResult};
pub use diagnostics::CredentialReport;
pub use dispatcher::VariantFallbackDispatcher;
pub use error::GatewayError;
pub use extract::TextExtractor;
pub use gateway::AgriGateway;
pub use parser::{OutputFormatError, ParsedResult, StructuredOutputParser};
pub use query::{AdvisoryQuery, ChatQuery, ChatTurn, MarketQuery, SchemeQuery, StoreQuery};
