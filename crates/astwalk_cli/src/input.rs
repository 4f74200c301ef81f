//! Loading the AST and the visitor keys a command runs with.

use std::fs;
use std::path::Path;

use astwalk_ast::VisitorKeys;
use miette::{IntoDiagnostic, Result};
use serde_json::Value;
use tracing::debug;

use crate::cli::Cli;
use crate::error::CliError;

/// Reads a JSON AST file.
pub fn load_ast(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let ast = serde_json::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ast)
}

/// Builds the keys table from the bundled Babel keys and `--keys`.
pub fn effective_keys(cli: &Cli) -> Result<VisitorKeys> {
    let mut keys = if cli.no_default_keys {
        VisitorKeys::new()
    } else {
        VisitorKeys::babel().clone()
    };

    if let Some(path) = &cli.keys {
        let custom = VisitorKeys::from_file(path).into_diagnostic()?;
        debug!(
            "Loaded {} visitor key entries from {}",
            custom.len(),
            path.display()
        );
        keys.extend(custom);
    } else if cli.no_default_keys {
        return Err(CliError::NoKeys.into());
    }

    Ok(keys)
}
