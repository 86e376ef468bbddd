//! Adapters layer: Concrete implementations of ports.
//!
//! - `http`: reqwest client for the remote scoring service
//! - `sanitize`: vitals and credential filtering for logs

pub mod http;
pub mod sanitize;

pub use http::HttpRiskService;
