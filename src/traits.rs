//! Core traits that decouple i3nav from any specific window manager or
//! logging setup.
//!
//! The [`Navigator`](crate::resolver::Navigator) only depends on
//! [`WindowManager`], and every navigation step reports its recoverable
//! conditions through a [`Diagnostics`] sink handed to it by the caller.

use crate::tree::LayoutNode;
use log::{error, warn};
use std::cell::RefCell;

/// Abstraction over a window manager that can describe its layout and move
/// focus.
///
/// An implementation might talk to i3 or sway over IPC, or it might be a
/// canned stub used in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Fetch a complete snapshot of the layout tree.
    fn tree(&self) -> Result<LayoutNode, Self::Error>;

    /// Move focus to the container with the given id.
    ///
    /// Returns the raw reply of the window manager.
    fn focus(&self, id: &str) -> Result<String, Self::Error>;
}

//  Diagnostics

/// A recoverable condition met while navigating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A container uses a layout this tool does not understand; its subtree
    /// contributes no windows.
    UnsupportedLayout { id: i64, layout: String },

    /// None of `candidates` windows is focused; the first one is used as the
    /// starting point instead.
    NoFocusedWindow { candidates: usize },
}

/// Receiver for [`Diagnostic`]s.
pub trait Diagnostics {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to the [`log`] facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::UnsupportedLayout { id, layout } => {
                error!("unsupported layout {:?} on container {}", layout, id)
            }
            Diagnostic::NoFocusedWindow { candidates } => {
                warn!("no focused window among {} candidate(s), using the first", candidates)
            }
        }
    }
}

/// Drops every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Diagnostics for Silent {
    fn report(&self, _: Diagnostic) {}
}

/// Keeps every diagnostic in arrival order.
#[derive(Debug, Default)]
pub struct Recorded(RefCell<Vec<Diagnostic>>);

impl Recorded {
    pub fn take(&self) -> Vec<Diagnostic> {
        self.0.take()
    }
}

impl Diagnostics for Recorded {
    fn report(&self, diagnostic: Diagnostic) {
        self.0.borrow_mut().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_keeps_order() {
        let sink = Recorded::default();
        sink.report(Diagnostic::NoFocusedWindow { candidates: 2 });
        sink.report(Diagnostic::UnsupportedLayout {
            id: 7,
            layout: "grid".into(),
        });
        assert_eq!(
            sink.take(),
            vec![
                Diagnostic::NoFocusedWindow { candidates: 2 },
                Diagnostic::UnsupportedLayout {
                    id: 7,
                    layout: "grid".into()
                },
            ]
        );
        assert!(sink.take().is_empty());
    }

    #[test]
    fn silent_and_log_accept_everything() {
        Silent.report(Diagnostic::NoFocusedWindow { candidates: 0 });
        LogDiagnostics.report(Diagnostic::NoFocusedWindow { candidates: 0 });
    }
}
