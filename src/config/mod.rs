pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation;

pub const DEFAULT_PROMPT: &str = "roster> ";

#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "roster")]
#[command(about = "A small interactive roster of names")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Names to start with, comma separated
    #[arg(long, value_delimiter = ',')]
    pub seed: Vec<String>,

    /// Prompt shown before each command
    #[arg(long)]
    pub prompt: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn seed_names(&self) -> &[String] {
        &self.seed
    }

    fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    fn show_list_on_start(&self) -> bool {
        !self.seed.is_empty()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider("seed", "prompt", self)
    }
}

/// 名冊設定共用的驗證規則
pub(crate) fn validate_provider<C: ConfigProvider>(
    seed_field: &str,
    prompt_field: &str,
    config: &C,
) -> Result<()> {
    for name in config.seed_names() {
        validation::validate_non_empty_string(seed_field, name)?;
    }
    validation::validate_unique_names(seed_field, config.seed_names())?;
    validation::validate_single_line(prompt_field, config.prompt())?;
    Ok(())
}
