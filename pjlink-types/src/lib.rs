//! Typed PJLink class 1 reply values

pub mod error;
pub mod input;
pub mod lamp;
pub mod mute;
pub mod projector_info;
pub mod status;

pub use error::{Error, Result};
pub use input::{InputKind, InputSource};
pub use lamp::Lamp;
pub use mute::AvMute;
pub use projector_info::ProjectorInfo;
pub use status::{ErrorCode, ErrorStatus, Health, PowerStatus};
