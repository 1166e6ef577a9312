//! Message framing of the i3/sway IPC protocol.
//!
//! Every message, in both directions, is a 14-byte header followed by a
//! UTF-8 payload:
//!
//! ```text
//! +--------------------+----------------+----------------+-------------+
//! | "i3-ipc" (6 bytes) | length (u32le) | type (u32le)   | payload ... |
//! +--------------------+----------------+----------------+-------------+
//! ```
//!
//! A reply carries the type of the request it answers.  Events (type with
//! the high bit set) may arrive in between and are skipped.

use log::{debug, warn};
use std::io::{self, Read, Write};

pub const MAGIC: &[u8; 6] = b"i3-ipc";
pub const HEADER_LEN: usize = 14;
const EVENT_BIT: u32 = 1 << 31;
/// Largest payload accepted from the peer; a layout tree stays far below.
pub const MAX_PAYLOAD: usize = 64 << 20;

/// Request (and matching reply) types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MessageType {
    RunCommand = 0,
    GetWorkspaces = 1,
    Subscribe = 2,
    GetOutputs = 3,
    GetTree = 4,
    GetMarks = 5,
    GetBarConfig = 6,
    GetVersion = 7,
}

/// Errors produced while talking to the window manager.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("io error: {0}")]
    Io(io::Error),
    #[error("timed out waiting for the window manager")]
    Timeout,
    #[error("connect to {path}: {source}")]
    Connect { path: String, source: io::Error },
    #[error("bad magic {0:?}, not an i3 IPC message")]
    BadMagic([u8; 6]),
    #[error("payload of {0} bytes exceeds the message size limit")]
    TooLarge(usize),
    #[error("payload is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("socket discovery failed: {0}")]
    Discovery(String),
    #[error("command failed: {0}")]
    CommandFailed(String),
}

impl From<io::Error> for IpcError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => IpcError::Timeout,
            _ => IpcError::Io(e),
        }
    }
}

/// A decoded message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub length: u32,
    pub message_type: u32,
}

impl Header {
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[..6].copy_from_slice(MAGIC);
        bytes[6..10].copy_from_slice(&self.length.to_le_bytes());
        bytes[10..].copy_from_slice(&self.message_type.to_le_bytes());
        bytes
    }

    pub fn decode(bytes: &[u8; HEADER_LEN]) -> Result<Self, IpcError> {
        let mut magic = [0u8; 6];
        magic.copy_from_slice(&bytes[..6]);
        if &magic != MAGIC {
            return Err(IpcError::BadMagic(magic));
        }
        Ok(Self {
            length: u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]),
            message_type: u32::from_le_bytes([bytes[10], bytes[11], bytes[12], bytes[13]]),
        })
    }

    pub fn is_event(&self) -> bool {
        self.message_type & EVENT_BIT != 0
    }
}

/// Frame `payload` as a `message_type` message and write it out.
pub fn write_message<W: Write>(
    mut writer: W,
    message_type: MessageType,
    payload: &str,
) -> Result<(), IpcError> {
    if payload.len() > MAX_PAYLOAD {
        return Err(IpcError::TooLarge(payload.len()));
    }
    let length = u32::try_from(payload.len()).map_err(|_| IpcError::TooLarge(payload.len()))?;
    let header = Header {
        length,
        message_type: message_type as u32,
    };
    writer.write_all(&header.encode())?;
    writer.write_all(payload.as_bytes())?;
    writer.flush()?;
    debug!("sent {:?} ({} bytes)", message_type, length);
    Ok(())
}

/// Read one complete message.
pub fn read_message<R: Read>(mut reader: R) -> Result<(Header, String), IpcError> {
    let mut bytes = [0u8; HEADER_LEN];
    reader.read_exact(&mut bytes)?;
    let header = Header::decode(&bytes)?;
    let length = header.length as usize;
    if length > MAX_PAYLOAD {
        return Err(IpcError::TooLarge(length));
    }

    let mut payload = vec![0u8; length];
    reader.read_exact(&mut payload)?;
    Ok((header, String::from_utf8(payload)?))
}

/// Read messages until the reply of type `expected` arrives and return its
/// payload.
pub fn read_reply<R: Read>(mut reader: R, expected: MessageType) -> Result<String, IpcError> {
    loop {
        let (header, payload) = read_message(&mut reader)?;
        if header.message_type == expected as u32 {
            debug!("received {:?} ({} bytes)", expected, header.length);
            return Ok(payload);
        }
        if header.is_event() {
            debug!("skipping event {:#x}", header.message_type);
        } else {
            warn!(
                "unexpected reply type {}, waiting for {:?}",
                header.message_type, expected
            );
        }
    }
}
