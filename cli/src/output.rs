//! Output formatting

use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// Data that can be shown as table rows
pub trait TableRows {
    type Row: Tabled;

    fn rows(&self) -> Vec<Self::Row>;
}

impl OutputFormat {
    pub fn print<T: Serialize + TableRows>(&self, data: &T) -> anyhow::Result<()> {
        match self {
            OutputFormat::Table => {
                println!("{}", Table::new(data.rows()));
                Ok(())
            }
            _ => self.print_value(data),
        }
    }

    /// Serialized output only; tables fall back to JSON
    pub fn print_value<T: Serialize + ?Sized>(&self, data: &T) -> anyhow::Result<()> {
        match self {
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(data)?),
            OutputFormat::Json | OutputFormat::Table => println!("{}", serde_json::to_string_pretty(data)?),
        }
        Ok(())
    }
}
