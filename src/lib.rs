pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::terminal::TerminalDisplay;
pub use config::toml_config::TomlConfig;
pub use core::{Action, ConfigProvider, DisplayPort, NameRegistry, Outcome, RosterSession};
pub use utils::error::{Result, RosterError};
