//! Transport layer for PJLink
//!
//! Provides the line-oriented TCP channel to a projector. PJLink frames every
//! message with a single carriage return, so the transport speaks in lines.

pub mod error;
pub mod tcp;

pub use error::{Error, Result};
pub use tcp::TcpTransport;

use async_trait::async_trait;

/// Transport trait for a single projector connection
#[async_trait]
pub trait Transport: Send + Sync {
    /// Connect to projector
    async fn connect(&mut self) -> Result<()>;
    
    /// Disconnect from projector
    async fn disconnect(&mut self) -> Result<()>;
    
    /// Check if connected
    fn is_connected(&self) -> bool;
    
    /// Send raw bytes in one write
    async fn send(&mut self, data: &[u8]) -> Result<()>;
    
    /// Receive one line, terminator stripped
    ///
    /// End of stream yields whatever was read before it, possibly an empty
    /// string.
    async fn receive_line(&mut self) -> Result<String>;
    
    /// Get remote address
    fn remote_addr(&self) -> String;
}
