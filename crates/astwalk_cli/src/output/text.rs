//! Text output formatter

use crate::commands::{Stats, TraceEvent};

pub fn output_trace_text(events: &[TraceEvent]) {
    for event in events {
        println!("{}", format_event(event));
    }
}

pub fn output_stats_text(stats: &Stats) {
    let mut types: Vec<_> = stats.types.iter().collect();
    types.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (node_type, count) in types {
        println!("{:<30} {:>6}", node_type, count);
    }

    println!();
    println!(
        "Visited {} nodes of {} types, max depth {}",
        stats.total,
        stats.types.len(),
        stats.max_depth
    );
}

/// Renders `enter Type @ Parent.key[i] > ...`; root events have no path.
fn format_event(event: &TraceEvent) -> String {
    if event.path.is_empty() {
        format!("{} {}", event.event, event.node_type)
    } else {
        format!("{} {} @ {}", event.event, event.node_type, event.path)
    }
}
