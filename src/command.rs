//! Commands and types used throughout i3nav.
//!
//! This module defines the vocabulary that all components share:
//! [`Command`] describes every focus movement the navigator can perform,
//! and [`Direction`] / [`Step`] name the geometric and sequential
//! movements it is built from.

use std::fmt;

/// Direction for geometric navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Direction for sequential (tab order) navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Next,
    Prev,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => write!(f, "next"),
            Step::Prev => write!(f, "prev"),
        }
    }
}

/// Every focus movement the navigator can perform.
///
/// Commands are produced by the command line front-end and consumed by the
/// [`Navigator`](crate::resolver::Navigator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move focus to the nearest visible window in the given direction.
    Go(Direction),

    /// Move focus to the neighbouring tab (or floating window) in tab order.
    Step(Step),

    /// Move focus to the tab at the given **1-based** position.
    ///
    /// Position `0` never names a tab and always resolves to nothing.
    Number(usize),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Go(dir) => write!(f, "{}", dir),
            Command::Step(step) => write!(f, "{}", step),
            Command::Number(n) => write!(f, "number {}", n),
        }
    }
}
