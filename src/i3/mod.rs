//! i3-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`WindowManager`](crate::traits::WindowManager) trait, powered by the
//! i3 IPC socket.  Sway speaks the same protocol; the differences in the
//! shape of its layout tree are absorbed by [`crate::tree`].
//!
//! Nothing outside this module should reference the IPC protocol directly.

pub mod ipc;
pub mod wm;
