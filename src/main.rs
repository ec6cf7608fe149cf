use anyhow::Context;
use clap::Parser;
use small_roster::app::repl;
use small_roster::utils::error::ErrorSeverity;
use small_roster::utils::{logger, validation::Validate};
use small_roster::{CliConfig, ConfigProvider, RosterError, RosterSession, TerminalDisplay, TomlConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match &cli.config {
        Some(path) => {
            // 載入 TOML 配置並套用命令列覆蓋
            let mut config = TomlConfig::from_file(path).unwrap_or_else(|e| {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            });
            config.apply_cli_overrides(&cli);

            logger::init_cli_logger(config.verbose());
            tracing::info!("📁 Loaded configuration from: {}", path);
            start(&config)
        }
        None => {
            logger::init_cli_logger(cli.verbose);
            start(&cli)
        }
    }
}

fn start<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let stdout = io::stdout();
    let mut display = TerminalDisplay::new(stdout.lock());
    display.write_line(repl::HELP)?;

    let mut session = match RosterSession::from_config(config, display) {
        Ok(session) => session,
        Err(e) => exit_with(e),
    };

    let stdin = io::stdin();
    let summary = repl::run(&mut session, stdin.lock(), config.prompt())
        .context("interactive session failed")?;

    tracing::debug!("Final roster: {:?}", session.registry().list());
    tracing::debug!("Summary: {:?}", summary);
    Ok(())
}

fn exit_with(e: RosterError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
