//! Trace command implementation

use std::convert::Infallible;
use std::path::Path;

use astwalk_ast::{traverse, Ancestry, AstNode, HandlerKind, Phase, VisitorKeys};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::input::{effective_keys, load_ast};
use crate::output::output_trace;

/// One enter or exit callback as observed during a traversal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEvent {
    pub event: Phase,
    #[serde(rename = "type")]
    pub node_type: String,
    /// Ancestry path; empty for the root.
    pub path: String,
    pub depth: usize,
}

pub fn run_trace(cli: &Cli, file: &Path, events: &str, format: OutputFormat) -> Result<()> {
    // Reject bad handler names before any input is read.
    let kind: HandlerKind = events.parse().into_diagnostic()?;
    let keys = effective_keys(cli)?;
    let ast = load_ast(file)?;

    let trace = collect_trace(&ast, &keys, kind);
    debug!("Collected {} events from {}", trace.len(), file.display());

    output_trace(&trace, format)
}

fn record(
    phase: Phase,
    node: &Value,
    ancestry: &Ancestry<'_, '_, Value>,
    events: &mut Vec<TraceEvent>,
) -> Result<(), Infallible> {
    events.push(TraceEvent {
        event: phase,
        node_type: node.node_type().unwrap_or_default().to_string(),
        path: ancestry.path(),
        depth: ancestry.depth(),
    });
    Ok(())
}

pub fn collect_trace(ast: &Value, keys: &VisitorKeys, kind: HandlerKind) -> Vec<TraceEvent> {
    let mut events = Vec::new();
    let Ok(()) = traverse(ast, keys, kind.handlers(record), &mut events);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn summary(events: &[TraceEvent]) -> Vec<String> {
        events
            .iter()
            .map(|e| format!("{} {} [{}]", e.event, e.node_type, e.path))
            .collect()
    }

    fn return_this() -> Value {
        json!({
            "type": "ReturnStatement",
            "argument": { "type": "ThisExpression" }
        })
    }

    #[test]
    fn test_collect_trace_both() {
        let events = collect_trace(&return_this(), VisitorKeys::babel(), HandlerKind::Both);

        assert_eq!(
            summary(&events),
            vec![
                "enter ReturnStatement []",
                "enter ThisExpression [ReturnStatement.argument]",
                "exit ThisExpression [ReturnStatement.argument]",
                "exit ReturnStatement []",
            ]
        );
        assert_eq!(events[1].depth, 1);
    }

    #[test]
    fn test_collect_trace_exit_only() {
        let events = collect_trace(&return_this(), VisitorKeys::babel(), HandlerKind::Exit);

        assert_eq!(
            summary(&events),
            vec![
                "exit ThisExpression [ReturnStatement.argument]",
                "exit ReturnStatement []",
            ]
        );
    }

    #[test]
    fn test_trace_event_json_shape() {
        let event = TraceEvent {
            event: Phase::Enter,
            node_type: "Identifier".to_string(),
            path: "Program.body[0]".to_string(),
            depth: 1,
        };

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "event": "enter",
                "type": "Identifier",
                "path": "Program.body[0]",
                "depth": 1
            })
        );
    }
}
