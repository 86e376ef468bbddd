//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the remote scoring service.

mod risk_service;

#[cfg(test)]
pub(crate) mod mock;

pub use risk_service::RiskScoringService;
