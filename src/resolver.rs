//! The orchestrator that ties the layout tree, the navigation engines and
//! the window manager together.
//!
//! [`NavigationResolver`] turns one snapshot and one [`Command`] into the id
//! of the window to focus.  [`Navigator`] wraps it with the window manager
//! round trips: fetch the tree, resolve, send the focus command.

use crate::command::{Command, Direction};
use crate::config::NavigationConfig;
use crate::geometry::{focused_index, partition_floating, Window};
use crate::linear::Sequence;
use crate::planar::{Arrangement, Relation};
use crate::traits::{Diagnostic, Diagnostics, WindowManager};
use crate::tree::flatten::flatten;
use crate::tree::tabs::locate_tab_group;
use crate::tree::{Container, TreeError};
use log::{debug, info};

/// Possible errors from the navigator.
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),

    /// The layout tree could not be interpreted.
    #[error("malformed layout tree: {0}")]
    Snapshot(#[from] TreeError),

    /// Nothing to move to, even after wrapping if that was allowed.
    #[error("no window to focus")]
    NoWindow,
}

/// Picks the target window for a command from one layout snapshot.
///
/// When a floating window has focus only floating windows are considered;
/// otherwise direction commands move between the visible tiled windows and
/// order commands move between the tabs around the focused window.
pub struct NavigationResolver<'a, D: Diagnostics + ?Sized> {
    settings: &'a NavigationConfig,
    diagnostics: &'a D,
}

impl<'a, D: Diagnostics + ?Sized> NavigationResolver<'a, D> {
    pub fn new(settings: &'a NavigationConfig, diagnostics: &'a D) -> Self {
        Self {
            settings,
            diagnostics,
        }
    }

    /// Id of the window `command` moves focus to, if there is one.
    pub fn resolve(&self, root: &Container, command: Command, wrap: bool) -> Option<String> {
        let (floating, tiled) = partition_floating(flatten(root, self.diagnostics));
        let floating_focused = focused_index(&floating).is_some();
        debug!(
            "{} floating, {} tiled, floating focused: {}",
            floating.len(),
            tiled.len(),
            floating_focused
        );

        let target = match command {
            Command::Go(direction) => {
                let (windows, relation) = if floating_focused {
                    (floating, self.settings.floating_relation)
                } else {
                    (tiled, self.settings.tiled_relation)
                };
                self.go(windows, relation, direction, wrap)
            }
            Command::Step(step) => {
                let sequence = self.sequence(root, floating_focused.then_some(floating.as_slice()));
                sequence
                    .next(step)
                    .or_else(|| if wrap { sequence.first(step) } else { None })
                    .map(str::to_owned)
            }
            Command::Number(position) => {
                if wrap {
                    debug!("wrap has no effect on {}", command);
                }
                let sequence = self.sequence(root, floating_focused.then_some(floating.as_slice()));
                sequence.at(position).map(str::to_owned)
            }
        };

        match &target {
            Some(id) => info!("{} -> {}", command, id),
            None => info!("{} -> nothing", command),
        }
        target
    }

    fn go(&self, windows: Vec<Window>, relation: Relation, direction: Direction, wrap: bool) -> Option<String> {
        let current = self.current(&windows);
        let arrangement = Arrangement::new(windows, current, relation);
        arrangement
            .next(direction)
            .or_else(|| if wrap { arrangement.first(direction) } else { None })
            .map(str::to_owned)
    }

    /// Floating windows from left to right when one of them has focus, the
    /// tabs around the focused window otherwise.
    fn sequence(&self, root: &Container, floating: Option<&[Window]>) -> Sequence {
        match floating {
            Some(windows) => {
                let mut windows = windows.to_vec();
                windows.sort_by_key(|w| w.rect.x);
                Sequence::new(
                    windows.iter().map(|w| w.id.clone()).collect(),
                    self.current(&windows),
                )
            }
            None => {
                let group = locate_tab_group(root);
                Sequence::new(group.ids, group.current)
            }
        }
    }

    /// Index of the focused window, or `0` (with a diagnostic) when none is.
    fn current(&self, windows: &[Window]) -> usize {
        focused_index(windows).unwrap_or_else(|| {
            if !windows.is_empty() {
                self.diagnostics.report(Diagnostic::NoFocusedWindow {
                    candidates: windows.len(),
                });
            }
            0
        })
    }
}

/// Moves focus on a [`WindowManager`].
///
/// The navigator is generic over any [`WindowManager`] implementation,
/// making it independent of i3 or any other concrete backend.
///
/// # Typical usage
///
/// ```ignore
/// let wm = I3Wm::connect(&socket_path(None)?, None)?;
/// let navigator = Navigator::new(wm, NavigationConfig::default());
/// navigator.handle(Command::Go(Direction::Right), false, &LogDiagnostics)?;
/// ```
pub struct Navigator<W: WindowManager> {
    wm: W,
    settings: NavigationConfig,
}

impl<W: WindowManager> Navigator<W> {
    pub fn new(wm: W, settings: NavigationConfig) -> Self {
        Self { wm, settings }
    }

    /// Process a single [`Command`] and return the id of the window that
    /// received focus.
    ///
    /// `wrap` is combined with the configured default.  No focus command is
    /// sent unless a target was found.
    pub fn handle<D: Diagnostics + ?Sized>(
        &self,
        command: Command,
        wrap: bool,
        diagnostics: &D,
    ) -> Result<String, NavigatorError> {
        let wrap = wrap || self.settings.wrap;
        info!("{}{}", command, if wrap { " (wrap)" } else { "" });

        let node = self
            .wm
            .tree()
            .map_err(|e| NavigatorError::WindowManager(e.to_string()))?;
        let root = Container::from_node(&node)?;

        let target = NavigationResolver::new(&self.settings, diagnostics)
            .resolve(&root, command, wrap)
            .ok_or(NavigatorError::NoWindow)?;

        self.wm
            .focus(&target)
            .map_err(|e| NavigatorError::WindowManager(e.to_string()))?;
        Ok(target)
    }
}
