//! Core domain + application logic for the TeraBox listing bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind a
//! port (trait) implemented in the adapter crate, and the listing API client
//! sits behind its own port so handlers can be tested with stubs.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod handler;
pub mod listing;
pub mod logging;
pub mod messaging;
pub mod share;

pub use errors::{Error, Result};
