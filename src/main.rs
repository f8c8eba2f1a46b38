// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use parts::adapters::Cli;
use parts::domain::LoggingConfig;
use std::process::ExitCode;

fn init_logging(logging: &LoggingConfig) {
    if !logging.console_enabled() {
        return;
    }
    match logging.root_level() {
        Ok(level) => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init(),
        Err(e) => eprintln!("Warning: {}", e),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match parts::service::load_settings() {
        Ok(settings) => init_logging(&settings.logging),
        Err(e) => eprintln!("Warning: failed to load settings: {}", e),
    }

    let stdout = std::io::stdout();
    if let Err(e) = cli.run(&mut stdout.lock()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
