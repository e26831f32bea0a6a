use std::path::Path;

use tracing::{debug, info};

use crate::app::App;
use crate::cli::{EmployeesArgs, OutputFormat};
use crate::client::PayrollClient;
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::view::html;

pub async fn list(client: &PayrollClient, config: &Config, args: EmployeesArgs) -> Result<()> {
    let mut app = App::new();
    app.mount(client).await?;

    let table = app.render();
    debug!(state = ?app.state(), rows = table.rows().len(), "rendered");

    match output::format() {
        OutputFormat::Table => {
            println!("{}", output::table_string(table.rows()));
        }
        OutputFormat::Json => output::print_json(app.employees()),
        OutputFormat::Html => {
            let container = config.resolve_container(args.container.as_deref());
            match args.out {
                Some(path) => {
                    write_document(&path, &html::document(&container, &table))?;
                    output::print_message(&format!(
                        "Wrote {} employees to {}",
                        table.rows().len(),
                        path.display()
                    ));
                }
                None => println!("{}", html::mount(&container, &table)),
            }
        }
    }

    Ok(())
}

fn write_document(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)?;
    info!(path = %path.display(), "wrote HTML document");
    Ok(())
}
