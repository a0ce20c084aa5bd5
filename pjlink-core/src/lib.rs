//! # pjlink-core
//!
//! Core protocol implementation for PJLink projectors.
//!
//! This crate provides the low-level protocol primitives:
//! - Command catalog per class
//! - Request validation and encoding
//! - Greeting (challenge) parsing and the MD5 authentication digest
//! - Reply parsing
//! - Protocol constants

pub mod auth;
pub mod catalog;
pub mod challenge;
pub mod constants;
pub mod error;
pub mod request;
pub mod response;

pub use challenge::{Challenge, GreetingMode};
pub use constants::DEFAULT_PORT;
pub use error::{Error, Result};
pub use request::Request;
pub use response::Response;

/// Protocol class implemented by this crate
pub const PROTOCOL_CLASS: u8 = 1;
