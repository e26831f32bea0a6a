use std::io::{self, BufRead, Write};

use url::Url;

use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_CONTAINER};
use crate::error::{PayrollError, Result};

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Build the config file body from raw answers; empty answers keep defaults.
fn render_config(base_url: &str, timeout_secs: &str, container: &str) -> Result<String> {
    if !base_url.is_empty() {
        Url::parse(base_url).map_err(|e| PayrollError::InvalidBaseUrl {
            url: base_url.to_string(),
            source: e,
        })?;
    }

    let non_empty = |answer: &str| (!answer.is_empty()).then(|| answer.to_string());
    let config = Config {
        base_url: non_empty(base_url),
        timeout_secs: timeout_secs.parse().ok(),
        container: non_empty(container),
    };

    Ok(toml::to_string(&config)?)
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Payroll CLI Configuration");
    println!("=========================\n");

    let base_url = prompt(&format!("API base URL [{DEFAULT_BASE_URL}]: "))?;
    let timeout_secs = prompt("Request timeout in seconds [none]: ")?;
    let container = prompt(&format!("HTML container id [{DEFAULT_CONTAINER}]: "))?;

    let config_content = render_config(&base_url, &timeout_secs, &container)?;

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PayrollError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, config_content).map_err(|e| PayrollError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());

    Ok(())
}
