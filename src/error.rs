//! Error types for configuration and the serial codec
//!
//! [`ConfigError`] covers construction of button ladder configuration,
//! [`FrameError`] covers the wire codec in [`protocol`](crate::protocol).
//!
//! ## Example
//!
//! ```
//! use flydash_panel::{Builder, ConfigError};
//!
//! // Missing pin
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(ConfigError::MissingPin)));
//!
//! // Reserved pin
//! let result = Builder::new().pin(255).build();
//! assert!(matches!(result, Err(ConfigError::ReservedPin { pin: 255 })));
//! ```

/// Maximum number of expected readings per analog pin
///
/// A resistor ladder on the 10-12 bit converters this crate targets does not
/// resolve usefully past eight taps.
pub const MAX_LEVELS: usize = 8;

/// Raw pin value reserved on the wire for "no pin assigned"
pub const RESERVED_PIN: u8 = 255;

/// Length in bytes of a command identifier (`CONNE`, `ALTIT`, ...)
pub const COMMAND_ID_LEN: usize = 5;

/// Capacity of a command frame body and of an encoded frame
///
/// The longest frame is `$` plus an identifier plus the 11 characters of
/// `i32::MIN` plus `#`, 18 bytes.
pub const MAX_FRAME_BYTES: usize = 24;

/// Maximum length in bytes of a report identifier
pub const MAX_REPORT_ID_BYTES: usize = 16;

/// Capacity of an encoded report line, terminator included
pub const MAX_REPORT_BYTES: usize = 32;

/// Errors that can occur when building button ladder configuration
///
/// These errors surface at construction time, before the configuration is
/// handed to the input loop.
#[derive(Debug)]
pub enum ConfigError {
    /// More expected readings supplied than the table can hold
    ///
    /// The table holds at most [`MAX_LEVELS`] entries; nothing is copied
    /// when the caller's slice is longer.
    CapacityExceeded {
        /// Fixed capacity of the level table
        capacity: usize,
        /// Number of levels the caller supplied
        requested: usize,
    },
    /// The reserved "no pin assigned" value was used as a real pin
    ///
    /// See [`RESERVED_PIN`].
    ReservedPin {
        /// The rejected pin value
        pin: u8,
    },
    /// No pin was specified
    ///
    /// [`Builder::pin()`](crate::config::Builder::pin) must be called before
    /// building.
    MissingPin,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::CapacityExceeded {
                capacity,
                requested,
            } => {
                write!(
                    f,
                    "Level table overflow: {requested} levels supplied, capacity {capacity}"
                )
            }
            ConfigError::ReservedPin { pin } => {
                write!(f, "Pin {pin} is reserved for unconfigured sensors")
            }
            ConfigError::MissingPin => write!(f, "A pin must be specified"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors that can occur in the serial codec
#[derive(Debug)]
pub enum FrameError {
    /// Frame body grew past [`MAX_FRAME_BYTES`] before the terminator
    ///
    /// The decoder discards the frame and resynchronizes on the next `$`.
    Overflow {
        /// Capacity of the frame buffer
        capacity: usize,
    },
    /// Frame shorter than a command identifier
    Truncated {
        /// Length of the received frame body
        len: usize,
    },
    /// Identifier is not one the panel understands
    UnknownCommand {
        /// The unrecognized identifier bytes
        id: [u8; COMMAND_ID_LEN],
    },
    /// Payload present where none is allowed, or not a decimal value
    InvalidPayload,
    /// Report identifier empty, over-long, or containing reserved characters
    ///
    /// See [`Report::new()`](crate::protocol::Report::new) for constraints.
    InvalidReportId,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::Overflow { capacity } => {
                write!(f, "Frame exceeded {capacity} bytes before its terminator")
            }
            FrameError::Truncated { len } => {
                write!(
                    f,
                    "Frame body of {len} bytes is shorter than a command identifier"
                )
            }
            FrameError::UnknownCommand { id } => {
                let id = core::str::from_utf8(id).unwrap_or("<non-ascii>");
                write!(f, "Unknown command identifier {id:?}")
            }
            FrameError::InvalidPayload => write!(f, "Command payload is not a valid value"),
            FrameError::InvalidReportId => {
                write!(f, "Report identifier is empty, over-long or not plain ASCII")
            }
        }
    }
}

impl core::error::Error for FrameError {}
