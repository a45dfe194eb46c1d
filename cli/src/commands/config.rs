//! Config commands

use std::path::Path;

use colored::Colorize;
use formsmith_forms::FormsConfig;

use crate::output::OutputFormat;
use crate::ConfigCommands;

pub fn handle(action: ConfigCommands, path: &Path, settings: &FormsConfig, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Show => match format {
            OutputFormat::Table => print!("{}", settings.to_toml()?),
            _ => format.print_value(settings)?,
        },
        ConfigCommands::Init => {
            if crate::config::init(path)? {
                println!("{} {}", "Configuration initialized at".green(), path.display());
            } else {
                println!("{} already exists, left unchanged", path.display());
            }
        }
    }
    Ok(())
}
