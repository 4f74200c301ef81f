//! Output formatting module

mod json;
mod text;

use miette::Result;

use crate::cli::OutputFormat;
use crate::commands::{Stats, TraceEvent};

pub fn output_trace(events: &[TraceEvent], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(events)?,
        OutputFormat::Text => text::output_trace_text(events),
    }
    Ok(())
}

pub fn output_stats(stats: &Stats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(stats)?,
        OutputFormat::Text => text::output_stats_text(stats),
    }
    Ok(())
}
