//! Serial codec between the panel and the desktop application
//!
//! Host to panel commands travel as framed ASCII: `$`, a five character
//! identifier, an optional signed decimal payload, `#`. The panel answers
//! with newline terminated `ID-VALUE` report lines, split on the first `-`
//! by the receiving side.
//!
//! [`FrameDecoder`] consumes the inbound stream one byte at a time so it can
//! sit directly in a serial poll loop; partial frames survive across reads
//! and garbage between frames is skipped.

pub use crate::error::{
    FrameError, COMMAND_ID_LEN, MAX_FRAME_BYTES, MAX_REPORT_BYTES, MAX_REPORT_ID_BYTES,
};

use arrayvec::{ArrayString, ArrayVec};
use core::fmt::Write;

/// Commands the desktop application sends to the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Host attached to the serial port
    Connect,
    /// Host is detaching
    Disconnect,
    /// Altitude readout, feet
    Altitude(i32),
    /// Heading readout, degrees
    Heading(i32),
    /// Ground speed readout, knots
    GroundSpeed(i32),
    /// Airspeed readout, knots
    AirSpeed(i32),
}

impl Command {
    /// Wire identifier of the command
    pub fn id(&self) -> &'static str {
        match self {
            Command::Connect => "CONNE",
            Command::Disconnect => "DISCO",
            Command::Altitude(_) => "ALTIT",
            Command::Heading(_) => "HEADI",
            Command::GroundSpeed(_) => "GROSP",
            Command::AirSpeed(_) => "AIRSP",
        }
    }

    /// Payload value, `None` for commands that carry none
    pub fn payload(&self) -> Option<i32> {
        match *self {
            Command::Connect | Command::Disconnect => None,
            Command::Altitude(value)
            | Command::Heading(value)
            | Command::GroundSpeed(value)
            | Command::AirSpeed(value) => Some(value),
        }
    }

    /// Encode the command as a `$ID[payload]#` frame
    pub fn encode(&self) -> ArrayString<MAX_FRAME_BYTES> {
        let mut frame = ArrayString::new();
        // Longest frame is 18 bytes, under MAX_FRAME_BYTES.
        write!(frame, "${}", self.id()).ok();
        if let Some(value) = self.payload() {
            write!(frame, "{value}").ok();
        }
        write!(frame, "#").ok();
        frame
    }
}

/// Incremental decoder for the inbound command stream
///
/// Push received bytes as they arrive; a completed frame yields a
/// [`Command`] or a [`FrameError`]. The decoder resynchronizes on the next
/// `$` after any error.
#[derive(Default)]
pub struct FrameDecoder {
    buf: ArrayVec<u8, MAX_FRAME_BYTES>,
    in_frame: bool,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one byte of the inbound stream
    ///
    /// Returns `Some` when `byte` completes a frame. Bytes outside a frame
    /// are discarded; a `$` inside a frame restarts it.
    pub fn push_byte(&mut self, byte: u8) -> Option<Result<Command, FrameError>> {
        match byte {
            b'$' => {
                self.buf.clear();
                self.in_frame = true;
                None
            }
            b'#' if self.in_frame => {
                self.in_frame = false;
                let result = parse_frame(&self.buf);
                self.buf.clear();
                Some(result)
            }
            _ if self.in_frame => {
                if self.buf.try_push(byte).is_err() {
                    self.buf.clear();
                    self.in_frame = false;
                    return Some(Err(FrameError::Overflow {
                        capacity: MAX_FRAME_BYTES,
                    }));
                }
                None
            }
            _ => None,
        }
    }
}

fn parse_frame(body: &[u8]) -> Result<Command, FrameError> {
    if body.len() < COMMAND_ID_LEN {
        return Err(FrameError::Truncated { len: body.len() });
    }
    let (id, payload) = body.split_at(COMMAND_ID_LEN);

    let command = match id {
        b"CONNE" => {
            require_empty(payload)?;
            Command::Connect
        }
        b"DISCO" => {
            require_empty(payload)?;
            Command::Disconnect
        }
        b"ALTIT" => Command::Altitude(parse_value(payload)?),
        b"HEADI" => Command::Heading(parse_value(payload)?),
        b"GROSP" => Command::GroundSpeed(parse_value(payload)?),
        b"AIRSP" => Command::AirSpeed(parse_value(payload)?),
        _ => {
            let mut unknown = [0u8; COMMAND_ID_LEN];
            unknown.copy_from_slice(id);
            return Err(FrameError::UnknownCommand { id: unknown });
        }
    };
    Ok(command)
}

fn require_empty(payload: &[u8]) -> Result<(), FrameError> {
    if payload.is_empty() {
        Ok(())
    } else {
        Err(FrameError::InvalidPayload)
    }
}

fn parse_value(payload: &[u8]) -> Result<i32, FrameError> {
    core::str::from_utf8(payload)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(FrameError::InvalidPayload)
}

/// An `ID-VALUE` report line the panel sends back to the host
///
/// The host splits each line on the first `-`, so identifiers may not
/// contain one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report<'a> {
    id: &'a str,
    value: i32,
}

impl<'a> Report<'a> {
    /// Create a report with identifier validation
    ///
    /// # Errors
    ///
    /// Returns `FrameError::InvalidReportId` if `id` is empty, longer than
    /// [`MAX_REPORT_ID_BYTES`], contains `-`, or holds non printable ASCII.
    pub fn new(id: &'a str, value: i32) -> Result<Self, FrameError> {
        let valid = !id.is_empty()
            && id.len() <= MAX_REPORT_ID_BYTES
            && id.bytes().all(|b| b.is_ascii_graphic() && b != b'-');
        if !valid {
            return Err(FrameError::InvalidReportId);
        }
        Ok(Report { id, value })
    }

    /// Report identifier
    pub fn id(&self) -> &str {
        self.id
    }

    /// Report value
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Encode the report as a newline terminated line
    pub fn encode(&self) -> ArrayString<MAX_REPORT_BYTES> {
        let mut line = ArrayString::new();
        // Identifier, separator, 11 digit value and newline stay under capacity.
        writeln!(line, "{}-{}", self.id, self.value).ok();
        line
    }
}
