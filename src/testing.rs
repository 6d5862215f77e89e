//! Test doubles shared by the module tests.

use crate::record::Record;
use crate::runlog::RunLog;
use crate::target::{ExtractError, RecordStream, Target, UserAccount};
use anyhow::anyhow;
use serde_json::Value;
use std::collections::BTreeMap;

/// Build a record from literal field/value pairs.
pub fn record(fields: &[(&str, Value)]) -> Record {
    fields
        .iter()
        .map(|(n, v)| ((*n).to_string(), v.clone()))
        .collect()
}

/// What a test capability does when invoked.
pub enum CapOutcome {
    /// Yield these records and finish.
    Records(Vec<Record>),
    /// Yield `ok`, then fail mid-stream.
    FailsAfter {
        ok: Vec<Record>,
        message: &'static str,
    },
    /// Refuse with an unsupported-capability error.
    Unsupported(&'static str),
    /// Fail the invocation itself.
    Broken(&'static str),
}

/// In-memory capability target with scripted outcomes.
pub struct TestTarget {
    pub hostname: String,
    pub domain: String,
    pub version: String,
    pub install_date: String,
    pub language: String,
    pub timezone: String,
    pub ips: Vec<String>,
    pub users: Vec<UserAccount>,
    pub capabilities: BTreeMap<&'static str, CapOutcome>,
    pub children: BTreeMap<&'static str, TestTarget>,
}

impl TestTarget {
    pub fn named(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            domain: String::new(),
            version: String::new(),
            install_date: String::new(),
            language: String::new(),
            timezone: String::new(),
            ips: Vec::new(),
            users: Vec::new(),
            capabilities: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn with_capability(mut self, name: &'static str, outcome: CapOutcome) -> Self {
        self.capabilities.insert(name, outcome);
        self
    }

    pub fn with_child(mut self, name: &'static str, child: TestTarget) -> Self {
        self.children.insert(name, child);
        self
    }
}

impl Target for TestTarget {
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
            Some(CapOutcome::Records(records)) => {
                Ok(Box::new(records.clone().into_iter().map(Ok)))
            }
            Some(CapOutcome::FailsAfter { ok, message }) => Ok(Box::new(
                ok.clone()
                    .into_iter()
                    .map(Ok)
                    .chain(std::iter::once(Err(ExtractError::from(anyhow!(*message))))),
            )),
            Some(CapOutcome::Unsupported(reason)) => {
                Err(ExtractError::unsupported(capability, *reason))
            }
            Some(CapOutcome::Broken(message)) => Err(ExtractError::from(anyhow!(*message))),
            None => Err(ExtractError::unsupported(
                capability,
                "capability not present on this target",
            )),
        }
    }
}

/// Severity recorded by [`MemoryLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// RunLog that records everything for assertions.
#[derive(Default)]
pub struct MemoryLog {
    pub lines: Vec<(Level, String)>,
}

impl MemoryLog {
    pub fn lines_at(&self, level: Level) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl RunLog for MemoryLog {
    fn info(&mut self, message: &str) {
        self.lines.push((Level::Info, message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.lines.push((Level::Warning, message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.lines.push((Level::Error, message.to_string()));
    }
}
