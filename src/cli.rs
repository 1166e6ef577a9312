//! Command-line interface.
//!
//! ```text
//! i3nav [--wrap] [--config PATH] [--socket PATH] <left|up|right|down|next|prev|number N>
//! ```

use crate::command::{Command, Direction, Step};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Move i3 focus by direction, by tab order, or to a tab by number.
#[derive(Debug, Parser)]
#[command(name = "i3nav", version)]
pub struct Cli {
    /// Wrap around at the edges of the screen or tab group.
    ///
    /// Has no effect on `number`.
    #[arg(long, short, global = true)]
    pub wrap: bool,

    /// Path to configuration file to use (overrides default).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// IPC socket to connect to instead of discovering one.
    #[arg(long, value_name = "PATH", global = true)]
    pub socket: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Focus the nearest window to the left.
    Left,
    /// Focus the nearest window above.
    Up,
    /// Focus the nearest window to the right.
    Right,
    /// Focus the nearest window below.
    Down,
    /// Focus the next tab.
    Next,
    /// Focus the previous tab.
    Prev,
    /// Focus the tab at a 1-based position.
    Number {
        #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        n: usize,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        match self.command {
            Commands::Left => Command::Go(Direction::Left),
            Commands::Up => Command::Go(Direction::Up),
            Commands::Right => Command::Go(Direction::Right),
            Commands::Down => Command::Go(Direction::Down),
            Commands::Next => Command::Step(Step::Next),
            Commands::Prev => Command::Step(Step::Prev),
            Commands::Number { n } => Command::Number(n),
        }
    }
}
