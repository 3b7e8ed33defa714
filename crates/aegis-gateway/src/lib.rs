//! Data store gateway for the Aegis assistant.
//!
//! Exposes the generic find/insert/patch boundary the core depends on, plus
//! a PostgREST-style REST implementation.

pub mod error;
pub mod filter;
pub mod store;

pub use error::GatewayError;
pub use filter::Filter;
pub use store::{DataStore, RestStore};
