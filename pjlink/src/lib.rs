//! # pjlink
//!
//! Rust client for the PJLink projector control protocol (class 1).
//!
//! ## Features
//!
//! - Async/await API using Tokio
//! - Optional MD5 challenge-response authentication
//! - Request validation before anything reaches the wire
//! - Typed replies for power, inputs, mute, lamps and error status
//!
//! Each operation opens one TCP connection, sends one command, reads one
//! reply and closes the connection.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pjlink::Projector;
//!
//! #[tokio::main]
//! async fn main() -> pjlink::Result<()> {
//!     let projector = Projector::new("192.168.1.50", "");
//!
//!     let status = projector.get_power_status().await?;
//!     println!("{}", status);
//!
//!     projector.turn_off().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod projector;
pub mod session;

// Re-exports
pub use error::{Error, Result};
pub use projector::Projector;
pub use session::Session;

// Re-export types
pub use pjlink_core::{Challenge, GreetingMode, Request, Response};
pub use pjlink_types::{
    AvMute, ErrorCode, ErrorStatus, Health, InputKind, InputSource, Lamp, PowerStatus,
    ProjectorInfo,
};
