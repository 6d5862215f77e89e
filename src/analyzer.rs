//! Extraction orchestrator.
//!
//! Runs an ordered plugin registry against one target. Every plugin is
//! attempted exactly once and every per-plugin failure is absorbed into the
//! run log: a capability that does not apply to this subject is a warning,
//! anything else is an error with the full diagnostic chain. Nothing a
//! plugin does can stop the batch.

use crate::plugins::PluginSpec;
use crate::runlog::RunLog;
use crate::sink;
use crate::target::{ExtractError, Target};
use std::path::PathBuf;

pub struct HostAnalyzer<'t> {
    target: &'t dyn Target,
    dst_dir: PathBuf,
}

impl<'t> HostAnalyzer<'t> {
    pub fn new(target: &'t dyn Target, dst_dir: PathBuf) -> Self {
        Self { target, dst_dir }
    }

    /// Run every plugin, strictly in registry order.
    pub fn invoke_plugins(&self, specs: &[PluginSpec], log: &mut dyn RunLog) {
        for spec in specs {
            self.invoke_plugin(spec, log);
        }
    }

    /// Run one plugin and report its outcome. Never propagates.
    pub fn invoke_plugin(&self, spec: &PluginSpec, log: &mut dyn RunLog) {
        let resolved = spec.resolve(self.target);
        let name = resolved.name.clone();

        let outcome = resolved
            .invoke()
            .and_then(|records| sink::write_records(&self.dst_dir, &name, records));

        match outcome {
            Ok(rows) => {
                log.info(&format!("run of {name} was successful ({rows} records)"));
            }
            Err(ExtractError::Unsupported { capability, reason }) => {
                log.warning(&format!("{capability}: {reason}"));
            }
            Err(ExtractError::Other(err)) => {
                log.error(&format!("{name}: an unexpected error occurred:\n{err:?}"));
            }
        }
    }
}
