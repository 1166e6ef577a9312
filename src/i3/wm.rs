//! [`WindowManager`] implementation backed by i3 (or sway) IPC.
//!
//! One connection is opened per invocation and used for exactly two
//! requests: GET_TREE for the layout snapshot and RUN_COMMAND for the focus
//! change.

use super::ipc::{read_reply, write_message, IpcError, MessageType};
use crate::traits::WindowManager;
use crate::tree::LayoutNode;
use log::{debug, info};
use serde::Deserialize;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// i3-backed window manager.
pub struct I3Wm {
    stream: UnixStream,
}

/// One entry of a RUN_COMMAND reply.
#[derive(Deserialize)]
struct CommandOutcome {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl I3Wm {
    /// Connect to the IPC socket at `path`.
    ///
    /// `timeout` bounds every read and write on the connection; `None`
    /// waits forever.
    pub fn connect(path: &Path, timeout: Option<Duration>) -> Result<Self, IpcError> {
        let stream = UnixStream::connect(path).map_err(|source| IpcError::Connect {
            path: path.display().to_string(),
            source,
        })?;
        stream.set_read_timeout(timeout)?;
        stream.set_write_timeout(timeout)?;
        info!("connected to {}", path.display());
        Ok(Self::from_stream(stream))
    }

    /// Use an already connected stream.
    pub fn from_stream(stream: UnixStream) -> Self {
        Self { stream }
    }

    /// Send one request and wait for its reply.
    pub fn request(&self, message_type: MessageType, payload: &str) -> Result<String, IpcError> {
        write_message(&self.stream, message_type, payload)?;
        read_reply(&self.stream, message_type)
    }
}

/// Find the IPC socket of the running window manager.
///
/// Tried in order: `configured`, `$I3SOCK`, `$SWAYSOCK`, and finally the
/// output of `i3 --get-socketpath`.
pub fn socket_path(configured: Option<&Path>) -> Result<PathBuf, IpcError> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }

    for var in ["I3SOCK", "SWAYSOCK"] {
        match std::env::var(var) {
            Ok(path) if !path.is_empty() => {
                debug!("socket from ${}", var);
                return Ok(PathBuf::from(path));
            }
            _ => {}
        }
    }

    let output = std::process::Command::new("i3")
        .arg("--get-socketpath")
        .output()
        .map_err(|e| IpcError::Discovery(format!("run i3 --get-socketpath: {}", e)))?;
    if !output.status.success() {
        return Err(IpcError::Discovery(format!(
            "i3 --get-socketpath exited with {}",
            output.status
        )));
    }
    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if path.is_empty() {
        return Err(IpcError::Discovery("i3 --get-socketpath printed nothing".into()));
    }
    Ok(PathBuf::from(path))
}

//  WindowManager implementation

impl WindowManager for I3Wm {
    type Error = IpcError;

    fn tree(&self) -> Result<LayoutNode, Self::Error> {
        let json = self.request(MessageType::GetTree, "")?;
        Ok(serde_json::from_str(&json)?)
    }

    fn focus(&self, id: &str) -> Result<String, Self::Error> {
        let command = format!("[con_id={}] focus", id);
        info!("request: {}", command);
        let reply = self.request(MessageType::RunCommand, &command)?;
        info!("response: {}", reply);

        let outcomes: Vec<CommandOutcome> = serde_json::from_str(&reply)?;
        if let Some(failed) = outcomes.into_iter().find(|o| !o.success) {
            return Err(IpcError::CommandFailed(
                failed.error.unwrap_or_else(|| reply.clone()),
            ));
        }
        Ok(reply)
    }
}
