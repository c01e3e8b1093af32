//! Meridian Client - HTTP client for the Meridian POS backend
//!
//! Wraps the backend REST API (auth, orders, transactions, menu) and
//! provides the cancellable order poller the dashboards refresh from.

pub mod config;
pub mod error;
pub mod http;
pub mod poller;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use poller::{OrderPoller, OrderSource};

// Re-export shared types for convenience
pub use meridian_core::{LoginResponse, Order, OrderStatus, Transaction, UserInfo};
