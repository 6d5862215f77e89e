//! Host metadata summary, written once per run.

use crate::Result;
use crate::target::Target;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const HOSTINFO_FILENAME: &str = "hostinfo.txt";

/// Write the fixed host attribute summary, one `key = value` line per
/// attribute, in a fixed order. Usernames are rendered as
/// `domain\name`, falling back to the hostname for accounts without a
/// domain.
pub fn write_hostinfo(target: &dyn Target, dir: &Path) -> Result<()> {
    let usernames: Vec<String> = target
        .users()
        .iter()
        .map(|u| {
            let domain = u
                .domain
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| target.hostname());
            format!("{}\\{}", domain, u.name)
        })
        .collect();

    let path = dir.join(HOSTINFO_FILENAME);
    let file =
        File::create(&path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{:<12} = {}", "hostname", target.hostname())?;
    writeln!(out, "{:<12} = {}", "domain", target.domain())?;
    writeln!(out, "{:<12} = {}", "version", target.version())?;
    writeln!(out, "{:<12} = {}", "install_date", target.install_date())?;
    writeln!(out, "{:<12} = {}", "language", target.language())?;
    writeln!(out, "{:<12} = {}", "timezone", target.timezone())?;
    writeln!(out, "{:<12} = {:?}", "ips", target.ips())?;
    writeln!(out, "{:<12} = {:?}", "users", usernames)?;
    out.flush()?;
    Ok(())
}
