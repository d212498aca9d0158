//! Core domain + application logic for the Telegram broadcast bot.
//!
//! This crate is intentionally framework-agnostic. The Telegram Bot API lives
//! behind ports (traits) implemented in the adapter crate.

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod membership;
pub mod policy;
pub mod ports;

pub use errors::{Error, Result};
