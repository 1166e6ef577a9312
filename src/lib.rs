//! **i3nav**: directional and tab-order focus navigation for i3 and sway.
//!
//! Each invocation takes one snapshot of the layout tree, picks a target
//! window and asks the window manager to focus it.
//!
//! # Architecture
//!
//! * [`tree`] turns the window manager's JSON tree into a typed
//!   [`tree::Container`] and reduces it to the windows on screen or the
//!   tabs around the focused window.
//! * [`planar`] and [`linear`] are the two navigation engines: nearest
//!   window in a direction, and neighbour in an ordered list.
//! * [`resolver`] combines both with a [`traits::WindowManager`], so the
//!   navigation logic is not coupled to any specific transport.
//!
//! The concrete i3 IPC backend lives in [`i3`].

pub mod cli;
pub mod command;
pub mod config;
pub mod geometry;
pub mod i3;
pub mod linear;
pub mod planar;
pub mod resolver;
pub mod traits;
pub mod tree;
