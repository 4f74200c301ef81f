mod keys;
mod stats;
mod trace;

pub use keys::run_keys;
pub use stats::{run_stats, Stats};
pub use trace::{run_trace, TraceEvent};
