//! Capability interface to an opened, read-only evidence source.
//!
//! The orchestrator never sees an engine directly; it works against this
//! trait only. A target resolves accessor names to sub-targets, invokes
//! named capabilities into lazy record streams, and answers a fixed set of
//! host attributes. Whatever parses the actual artifacts lives behind an
//! implementation of it.

use crate::record::Record;
use serde::Deserialize;
use thiserror::Error;

pub mod json;

/// Lazily-produced records from one capability invocation. Failures may
/// surface mid-iteration, not just at invocation time.
pub type RecordStream<'t> = Box<dyn Iterator<Item = Result<Record, ExtractError>> + 't>;

/// Why one extraction routine failed. The orchestrator matches on the kind
/// to decide between "expected, warn" and "unexpected, report in full";
/// neither stops the batch.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The capability is registered but does not apply to this subject
    /// (artifact not present). Expected and recoverable.
    #[error("{capability}: {reason}")]
    Unsupported { capability: String, reason: String },

    /// Anything else that went wrong while invoking a capability or
    /// draining its stream.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExtractError {
    pub fn unsupported(capability: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
            reason: reason.into(),
        }
    }
}

/// A user account known to the subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserAccount {
    pub name: String,
    /// Account domain; workgroup accounts have none.
    #[serde(default)]
    pub domain: Option<String>,
}

/// An opened evidence source, or a sub-target of one reached through an
/// accessor name.
///
/// The host attribute getters are only meaningful on the root target of a
/// run and always succeed once the source is open.
pub trait Target {
    fn hostname(&self) -> &str;
    fn domain(&self) -> &str;
    fn version(&self) -> &str;
    fn install_date(&self) -> &str;
    fn language(&self) -> &str;
    fn timezone(&self) -> &str;
    fn ips(&self) -> &[String];
    fn users(&self) -> &[UserAccount];

    /// Sub-target behind an accessor name, for chained plugin specs.
    fn sub_target(&self, accessor: &str) -> Option<&dyn Target>;

    /// Invoke a named capability, producing a lazy record stream.
    fn invoke(&self, capability: &str) -> Result<RecordStream<'_>, ExtractError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_display_carries_root_cause() {
        let err = ExtractError::unsupported("history", "no browser profile on this target");
        assert_eq!(
            err.to_string(),
            "history: no browser profile on this target"
        );
    }

    #[test]
    fn other_display_is_transparent() {
        let err = ExtractError::from(anyhow::anyhow!("registry hive truncated"));
        assert_eq!(err.to_string(), "registry hive truncated");
    }
}
