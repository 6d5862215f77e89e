//! Plugin registry and identifier resolution.
//!
//! A plugin names one extraction capability: either directly (`prefetch`) or
//! through a chain of accessors ending in a capability (`edge` -> `history`).
//! The registry is a fixed, ordered list; order only affects log readability
//! and file-write order, never correctness.

use crate::target::{ExtractError, RecordStream, Target};

/// Declarative identifier for one extraction routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginSpec {
    /// A capability looked up directly on the root target.
    Capability(&'static str),

    /// Accessor names followed by a terminal capability, walked from the
    /// root target. Always at least two elements; only the last one is a
    /// capability.
    Chain(&'static [&'static str]),
}

impl PluginSpec {
    /// Stable output name: chain elements joined with `_`.
    pub fn output_name(&self) -> String {
        match *self {
            PluginSpec::Capability(name) => name.to_string(),
            PluginSpec::Chain(chain) => chain.join("_"),
        }
    }

    /// Non-terminal accessor names, in walk order.
    fn accessors(&self) -> &'static [&'static str] {
        match *self {
            PluginSpec::Capability(_) => &[],
            PluginSpec::Chain(chain) => &chain[..chain.len() - 1],
        }
    }

    /// The terminal capability name.
    pub fn capability(&self) -> &'static str {
        match *self {
            PluginSpec::Capability(name) => name,
            PluginSpec::Chain(chain) => chain[chain.len() - 1],
        }
    }

    /// Bind this spec against a target.
    ///
    /// Accessors are walked eagerly; the registry naming an accessor the
    /// engine does not expose is a wiring bug, so that panics. Whether the
    /// terminal capability applies to this subject is only known once the
    /// returned binding is invoked.
    pub fn resolve<'t>(&self, target: &'t dyn Target) -> Resolved<'t> {
        let mut current = target;
        for accessor in self.accessors() {
            current = current
                .sub_target(accessor)
                .unwrap_or_else(|| panic!("registry names unknown accessor {accessor:?}"));
        }
        Resolved {
            name: self.output_name(),
            target: current,
            capability: self.capability(),
        }
    }
}

/// A plugin bound to its final target: the output name derived from the
/// spec plus a zero-argument invocation.
pub struct Resolved<'t> {
    pub name: String,
    target: &'t dyn Target,
    capability: &'static str,
}

impl<'t> Resolved<'t> {
    pub fn invoke(&self) -> Result<RecordStream<'t>, ExtractError> {
        self.target.invoke(self.capability)
    }
}

/// Extraction routines, run strictly in this order.
///
/// evtx and mft are deliberately absent: their raw dumps read far better
/// through bodyfile/mactime tooling than as flat CSV. usnjrnl is absent
/// because it dominates the whole run's wall-clock time.
pub const REGISTRY: &[PluginSpec] = &[
    PluginSpec::Capability("amcache_install"),
    PluginSpec::Capability("adpolicy"),
    PluginSpec::Capability("sophos"),
    PluginSpec::Capability("mcafee"),
    PluginSpec::Capability("trendmicro"),
    PluginSpec::Chain(&["anydesk", "logs"]),
    PluginSpec::Chain(&["teamviewer", "logs"]),
    PluginSpec::Capability("powershell_history"),
    PluginSpec::Capability("prefetch"),
    PluginSpec::Capability("runkeys"),
    PluginSpec::Capability("usb"),
    PluginSpec::Capability("userassist"),
    PluginSpec::Capability("firewall"),
    PluginSpec::Capability("shimcache"),
    PluginSpec::Capability("muicache"),
    PluginSpec::Capability("activitiescache"),
    PluginSpec::Capability("bam"),
    PluginSpec::Capability("services"),
    PluginSpec::Capability("shellbags"),
    PluginSpec::Capability("startupinfo"),
    PluginSpec::Capability("tasks"),
    PluginSpec::Capability("trusteddocs"),
    PluginSpec::Chain(&["edge", "history"]),
    PluginSpec::Chain(&["chrome", "history"]),
    PluginSpec::Chain(&["firefox", "history"]),
    PluginSpec::Chain(&["iexplore", "history"]),
];
