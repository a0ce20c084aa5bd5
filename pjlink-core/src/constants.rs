//! Protocol constants

use std::time::Duration;

/// Default PJLink TCP port
pub const DEFAULT_PORT: u16 = 4352;

/// Default connection timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default deadline for each line read (greeting and reply)
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Record terminator for every line in both directions
pub const LINE_TERMINATOR: u8 = b'\r';

/// Command mnemonics are always four characters
pub const COMMAND_LEN: usize = 4;

/// Maximum parameter length in bytes
pub const MAX_PARAMETER_LEN: usize = 128;

/// Longest line accepted from a projector, terminator excluded
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Leading character of every command and reply header
pub const HEADER_MARK: char = '%';

/// Query sentinel parameter
pub const QUERY: &str = "?";

/// Reply value for an accepted command
pub const OK: &str = "OK";

/// Greeting marker sent by the projector at connection start
pub const GREETING_MARKER: &str = "PJLINK";

/// Authentication failure marker
pub const AUTH_ERROR: &str = "ERRA";

/// Greeting authentication flags
pub mod auth_flags {
    /// Authentication disabled on the projector
    pub const DISABLED: &str = "0";

    /// Authentication required, seed follows
    pub const ENABLED: &str = "1";
}
