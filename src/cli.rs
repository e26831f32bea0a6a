use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Html,
}

#[derive(Parser)]
#[command(name = "payroll")]
#[command(about = "Fetch and render the employee list", version)]
#[command(after_help = "EXAMPLES:
    payroll employees                      Show employees as a table
    payroll employees -o html --out e.html Write an HTML page
    payroll check                          Validate employee records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, html)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// API base URL (overrides PAYROLL_BASE_URL and the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Suppress informational messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the employee list and render it
    #[command(
        alias = "list",
        after_help = "EXAMPLES:
    payroll employees
    payroll employees --json
    payroll employees -o html --container react
    payroll employees -o html --out employees.html"
    )]
    Employees(EmployeesArgs),
    /// Validate fetched employee records
    #[command(after_help = "EXAMPLES:
    payroll check
    payroll check --base-url http://localhost:8080")]
    Check,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    payroll completions bash > ~/.bash_completion.d/payroll
    payroll completions zsh > ~/.zfunc/_payroll
    payroll completions fish > ~/.config/fish/completions/payroll.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    payroll init")]
    Init,
}

#[derive(Args, Default)]
pub struct EmployeesArgs {
    /// Id of the HTML container element the table is mounted into
    #[arg(long)]
    pub container: Option<String>,

    /// Write a full HTML document to this file (html format only)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let cli = Cli::parse_from(["payroll", "employees", "-o", "html", "--json"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_list_alias_and_args() {
        let cli = Cli::parse_from([
            "payroll",
            "list",
            "--format",
            "html",
            "--container",
            "react",
            "--base-url",
            "http://h:1",
        ]);
        assert_eq!(cli.output_format(), OutputFormat::Html);
        assert_eq!(cli.base_url.as_deref(), Some("http://h:1"));
        match cli.command {
            Commands::Employees(args) => {
                assert_eq!(args.container.as_deref(), Some("react"));
                assert!(args.out.is_none());
            }
            _ => panic!("expected employees command"),
        }
    }
}
