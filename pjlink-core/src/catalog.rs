//! Command catalog
//!
//! Valid command mnemonics per PJLink class. The sets are disjoint and fixed
//! at compile time.

/// Class 1 command mnemonics
pub const CLASS_1: &[&str] = &[
    "POWR", // Power control / status
    "INST", // Input list
    "INPT", // Input switch / status
    "AVMT", // Mute control / status
    "ERST", // Error status
    "LAMP", // Lamp hours and state
    "NAME", // Projector name
    "INF1", // Manufacturer
    "INF2", // Product name
    "INFO", // Other information
    "CLSS", // Supported class
];

/// Class 2 command mnemonics (recognized, never sent)
pub const CLASS_2: &[&str] = &[
    "SNUM", "SVER", "INNM", "IRES", "RRES", "FILT", "RLMP", "RFIL", "SVOL", "MVOL", "FREZ",
];

/// Commands known for a class (empty for unknown classes)
pub fn commands(class: u8) -> &'static [&'static str] {
    match class {
        1 => CLASS_1,
        2 => CLASS_2,
        _ => &[],
    }
}

/// Check whether `command` is a known mnemonic of `class`
///
/// # Examples
///
/// ```
/// use pjlink_core::catalog;
///
/// assert!(catalog::is_valid(1, "POWR"));
/// assert!(!catalog::is_valid(2, "POWR"));
/// ```
pub fn is_valid(class: u8, command: &str) -> bool {
    commands(class).contains(&command)
}
