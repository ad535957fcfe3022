use anyhow::Result;
use clap::Parser;

use focusboard::logging::{init_tracing, LogTarget};

fn main() -> Result<()> {
    let cli = focusboard::cli::Cli::parse();
    let config = focusboard::config::from_cli(&cli)?;

    match cli.command.clone() {
        Some(focusboard::cli::CliCommand::Tui(args)) => {
            init_tracing(cli.log_filter.as_deref(), LogTarget::File(config.log_path()))?;
            focusboard::tui::run(config, args)?;
        }
        None => {
            init_tracing(cli.log_filter.as_deref(), LogTarget::File(config.log_path()))?;
            focusboard::tui::run(config, Default::default())?;
        }
        Some(command) => {
            init_tracing(cli.log_filter.as_deref(), LogTarget::Stderr)?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            focusboard::commands::execute(&config, command, &mut handle)?;
        }
    }

    Ok(())
}
