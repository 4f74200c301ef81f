//! Keys command implementation

use miette::Result;

use crate::cli::Cli;
use crate::error::CliError;
use crate::input::effective_keys;

pub fn run_keys(cli: &Cli, node_type: Option<&str>) -> Result<()> {
    let keys = effective_keys(cli)?;

    match node_type {
        Some(node_type) => {
            let fields = keys
                .get(node_type)
                .ok_or_else(|| CliError::UnknownType(node_type.to_string()))?;
            println!("{}", format_entry(node_type, fields));
        }
        None => {
            for (node_type, fields) in keys.iter() {
                println!("{}", format_entry(node_type, fields));
            }
        }
    }

    Ok(())
}

fn format_entry(node_type: &str, fields: &[String]) -> String {
    if fields.is_empty() {
        format!("{}:", node_type)
    } else {
        format!("{}: {}", node_type, fields.join(", "))
    }
}
