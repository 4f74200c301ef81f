//! Stats command implementation

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::path::Path;

use astwalk_ast::{traverse, Ancestry, AstNode, VisitorKeys};
use miette::Result;
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, OutputFormat};
use crate::input::{effective_keys, load_ast};
use crate::output::output_stats;

/// Per-type counts of the nodes a traversal visited.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub max_depth: usize,
    pub types: BTreeMap<String, usize>,
}

pub fn run_stats(cli: &Cli, file: &Path, format: OutputFormat) -> Result<()> {
    let keys = effective_keys(cli)?;
    let ast = load_ast(file)?;

    let stats = collect_stats(&ast, &keys);
    output_stats(&stats, format)
}

fn count(node: &Value, ancestry: &Ancestry<'_, '_, Value>, stats: &mut Stats) -> Result<(), Infallible> {
    stats.total += 1;
    stats.max_depth = stats.max_depth.max(ancestry.depth());
    *stats
        .types
        .entry(node.node_type().unwrap_or_default().to_string())
        .or_default() += 1;
    Ok(())
}

pub fn collect_stats(ast: &Value, keys: &VisitorKeys) -> Stats {
    let mut stats = Stats::default();
    let Ok(()) = traverse(ast, keys, count, &mut stats);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_collect_stats() {
        let ast = json!({
            "type": "BinaryExpression",
            "operator": "+",
            "left": { "type": "Identifier", "name": "a" },
            "right": {
                "type": "CallExpression",
                "callee": { "type": "Identifier", "name": "f" },
                "arguments": [{ "type": "NumericLiteral", "value": 1 }]
            }
        });

        let stats = collect_stats(&ast, VisitorKeys::babel());

        assert_eq!(stats.total, 5);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(
            stats.types,
            BTreeMap::from([
                ("BinaryExpression".to_string(), 1),
                ("CallExpression".to_string(), 1),
                ("Identifier".to_string(), 2),
                ("NumericLiteral".to_string(), 1),
            ])
        );
    }

    #[test]
    fn test_unknown_root_counts_nothing() {
        let ast = json!({ "type": "Mystery", "child": { "type": "Identifier" } });

        assert_eq!(collect_stats(&ast, VisitorKeys::babel()), Stats::default());
    }
}
