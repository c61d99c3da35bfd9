#![cfg_attr(not(test), no_std)]

//! Panel-side support for a flight dashboard: the analog button ladder
//! configuration table and the serial codec spoken with the desktop
//! application.
//!
//! Several buttons share one analog input through a resistor ladder; each
//! button pulls the pin to a distinct level, and [`ButtonSensorConfig`]
//! holds the expected reading per button. Matching live readings against the
//! table, and debouncing them, is left to the firmware's input loop.
//!
//! # Examples
//!
//! ```
//! use flydash_panel::{Builder, Command, FrameDecoder};
//!
//! // One ladder: four buttons on analog pin 3.
//! let buttons = Builder::new()
//!     .pin(3)
//!     .levels(&[100, 300, 600, 900])
//!     .build()
//!     .expect("valid configuration");
//! assert_eq!(buttons.level_count(), 4);
//!
//! // Decode a command frame from the host.
//! let mut decoder = FrameDecoder::new();
//! let mut decoded = None;
//! for &byte in b"$ALTIT3500#" {
//!     if let Some(result) = decoder.push_byte(byte) {
//!         decoded = Some(result);
//!     }
//! }
//! assert!(matches!(decoded, Some(Ok(Command::Altitude(3500)))));
//! ```

pub mod config;
pub mod error;
pub mod protocol;

pub use config::{AnalogPin, Builder, ButtonSensorConfig};
pub use error::{ConfigError, FrameError, MAX_LEVELS, RESERVED_PIN};
pub use protocol::{Command, FrameDecoder, Report};
