mod app;
mod cli;
mod client;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod responses;
mod types;
mod validation;
mod view;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use client::PayrollClient;
use config::Config;
use error::{PayrollError, Result};
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli).await {
        for line in error_report(&e, verbose) {
            eprintln!("{line}");
        }
        std::process::exit(1);
    }
}

/// Lines printed for a failed run; the cause chain only with --verbose.
fn error_report(e: &PayrollError, verbose: bool) -> Vec<String> {
    let mut lines = vec![format!("Error: {e}")];
    if verbose {
        let mut source = e.source();
        while let Some(cause) = source {
            lines.push(format!("Caused by: {cause}"));
            source = cause.source();
        }
    }
    lines
}

async fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "payroll", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let base_url = config.base_url(cli.base_url.as_deref())?;
            let client = PayrollClient::new(base_url, config.timeout())?;

            match command {
                Commands::Employees(args) => {
                    commands::employees::list(&client, &config, args).await?;
                }
                Commands::Check => {
                    commands::check::run(&client).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
