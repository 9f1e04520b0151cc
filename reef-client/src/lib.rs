//! Reef Client - HTTP client for the restaurant backend
//!
//! Issues the panel's form-encoded calls and decodes the JSON envelopes.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{OrderAccepted, PanelClient};

// Re-export shared types for convenience
pub use shared::{MenuDish, OrderHit};
