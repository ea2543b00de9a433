#![deny(missing_docs)]
//! # HTTP IP gateway
//!
//! A small HTTP service that answers `GET /` with a greeting, rejecting every
//! client whose address is not on a configured allowlist, plus a [`probe`]
//! that smoke-checks a running gateway.

mod cli;
mod config;
mod error;
mod middleware;
pub mod probe;
mod router;
mod routes;
mod service;
pub mod tracing;

#[cfg(feature = "test-utils")]
pub mod test;

pub use cli::HttpIpGatewayArgs;
pub use config::{AllowedIps, Configuration};
pub use error::{ErrorResponse, HttpIpGatewayError, HttpIpGatewayResult};
pub use service::HttpIpGatewayService;
