//! Core components of the `sourcearena-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`SaClient`] and its builder.
//! - The primary [`SaError`] type.
//! - The parameter enums shared by the endpoint modules.
//! - Query assembly and the shared response handler.

/// The main client (`SaClient`), builder, and configuration.
pub mod client;
/// The primary error type (`SaError`) for the crate.
pub mod error;
/// Parameter enums used by the endpoint methods.
pub mod models;
/// The decoded response type and the off-day check.
pub mod payload;

pub(crate) mod net;
pub(crate) mod params;

// convenient re-exports so most code can just `use crate::core::SaClient`
pub use client::{SaClient, SaClientBuilder};
pub use error::SaError;
pub use models::{AdjustType, SymbolsMarket};
pub use payload::{Payload, is_off_day_payload};
