//! JSON evidence-bundle target.
//!
//! A bundle is a pre-extracted dump of one host: its fixed attributes, a
//! capability-name -> record-list table, and named child targets for
//! accessor chains. Parsing artifact formats is someone else's job; this
//! backend only deserializes their output.
//!
//! Bundle shape:
//! {
//!   "hostname": "DESKTOP-01",
//!   "domain": "corp.local",
//!   "version": "Windows 10 Pro",
//!   "users": [{"name": "alice", "domain": "CORP"}],
//!   "capabilities": { "prefetch": [ { ...record... }, ... ] },
//!   "children": { "edge": { "capabilities": { "history": [...] } } }
//! }

use crate::record::Record;
use crate::target::{ExtractError, RecordStream, Target, UserAccount};
use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct JsonTarget {
    #[serde(default)]
    hostname: String,

    #[serde(default)]
    domain: String,

    #[serde(default)]
    version: String,

    #[serde(default)]
    install_date: String,

    #[serde(default)]
    language: String,

    #[serde(default)]
    timezone: String,

    #[serde(default)]
    ips: Vec<String>,

    #[serde(default)]
    users: Vec<UserAccount>,

    /// Capability name -> records it yields, in bundle order.
    #[serde(default)]
    capabilities: BTreeMap<String, Vec<Map<String, Value>>>,

    /// Accessor name -> sub-target.
    #[serde(default)]
    children: BTreeMap<String, JsonTarget>,
}

impl JsonTarget {
    /// Open an evidence bundle. The path is consumed once; the returned
    /// target is read-only for the rest of the run.
    pub fn open(path: &str) -> crate::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read evidence bundle {}", path))?;
        let target = serde_json::from_str(&text)
            .with_context(|| format!("parse evidence bundle {}", path))?;
        Ok(target)
    }
}

impl Target for JsonTarget {
    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn domain(&self) -> &str {
        &self.domain
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn install_date(&self) -> &str {
        &self.install_date
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn timezone(&self) -> &str {
        &self.timezone
    }

    fn ips(&self) -> &[String] {
        &self.ips
    }

    fn users(&self) -> &[UserAccount] {
        &self.users
    }

    fn sub_target(&self, accessor: &str) -> Option<&dyn Target> {
        self.children.get(accessor).map(|t| t as &dyn Target)
    }

    fn invoke(&self, capability: &str) -> Result<RecordStream<'_>, ExtractError> {
        match self.capabilities.get(capability) {
            Some(rows) => Ok(Box::new(
                rows.iter().map(|row| Ok(Record::from(row.clone()))),
            )),
            None => Err(ExtractError::unsupported(
                capability,
                "capability not present in evidence bundle",
            )),
        }
    }
}
