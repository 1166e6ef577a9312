//! Entry point for **i3nav**.
//!
//! Parses one command, connects to the window manager, moves focus and
//! exits.  Any failure is logged and reported through a non-zero exit
//! status.

use clap::Parser;
use i3nav::cli::Cli;
use i3nav::config::Config;
use i3nav::i3::wm::{socket_path, I3Wm};
use i3nav::resolver::Navigator;
use i3nav::traits::LogDiagnostics;
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// Resolve the config directory (`$XDG_CONFIG_HOME/i3nav`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("i3nav")
}

/// Load the config from `explicit`, or from
/// `$XDG_CONFIG_HOME/i3nav/config.json` when none was given.
///
/// A missing default file means defaults, a broken one is reported and
/// replaced by defaults; an explicit path must load.
fn load_config(explicit: Option<&Path>) -> Result<Config, String> {
    if let Some(path) = explicit {
        let cfg = Config::load(path).map_err(|e| e.to_string())?;
        info!("loaded config from {}", path.display());
        return Ok(cfg);
    }

    let path = config_dir().join("config.json");
    match Config::load_optional(&path) {
        Ok(Some(cfg)) => {
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Ok(None) => {
            info!("no config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => {
            warn!("{}, using defaults", e);
            Ok(Config::default())
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let config = load_config(cli.config.as_deref())?;

    let configured = cli.socket.as_deref().or(config.ipc.socket_path.as_deref());
    let path = socket_path(configured).map_err(|e| e.to_string())?;
    let wm = I3Wm::connect(&path, config.ipc.timeout()).map_err(|e| e.to_string())?;

    let navigator = Navigator::new(wm, config.navigation);
    navigator
        .handle(cli.command(), cli.wrap, &LogDiagnostics)
        .map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(target) => info!("focused {}", target),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
