//! Run-outcome reporting seam.
//!
//! Every plugin outcome and the directory-conflict decision go through this
//! trait rather than the global tracing dispatcher, so the orchestrator can
//! be observed in tests. The production sink forwards to `tracing`.

pub trait RunLog {
    fn info(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Production sink: forwards to the `tracing` subscriber installed in main.
pub struct TracingLog;

impl RunLog for TracingLog {
    fn info(&mut self, message: &str) {
        tracing::info!("{message}");
    }

    fn warning(&mut self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&mut self, message: &str) {
        tracing::error!("{message}");
    }
}
