// MininetLab: Orchestration of routing daemons in emulated network testbeds
// Copyright (C) 2022-2023 Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Discovery of the processes that represent emulated nodes.
//!
//! Every emulated node is a shell process whose command line contains `mininet:<NAME>`. The
//! process table is filtered line by line, exactly like piping `ps ax` through a chain of `grep`s.

use itertools::Itertools;
use tokio::process::Command;

use crate::{config::LabConfig, namespace::NamespaceError};

/// Filter on the lines of `ps ax`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessFilter {
    /// Name of the node, used for logging.
    name: String,
    /// Substrings that must all be present.
    include: Vec<String>,
    /// Substrings that must all be absent.
    exclude: Vec<String>,
}

impl ProcessFilter {
    /// Create a filter that matches the shell of the node `name`, and that ignores processes
    /// spawned by the namespace-entry tool.
    pub fn new(config: &LabConfig, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            include: vec![
                format!("{}{}", config.process_prefix, name),
                config.shell.clone(),
            ],
            exclude: vec![config.exec_tool.clone()],
            name,
        }
    }

    /// Additionally drop all lines that contain `s`.
    pub fn exclude(mut self, s: impl Into<String>) -> Self {
        self.exclude.push(s.into());
        self
    }

    /// Name of the node that is searched for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if a line of the process table matches.
    pub fn matches(&self, line: &str) -> bool {
        self.include.iter().all(|s| line.contains(s.as_str()))
            && !self.exclude.iter().any(|s| line.contains(s.as_str()))
    }

    /// Generate the shell expression that stores the PID in the variable `pid`:
    ///
    /// ```text
    /// pid=`eval ps ax | grep "mininet:SEAT" | grep bash | grep -v mxexec | awk '{print $1};'`
    /// ```
    pub fn shell_expr(&self) -> String {
        let mut include = self.include.iter();
        let first = include
            .next()
            .map(|s| format!(" | grep \"{s}\""))
            .unwrap_or_default();
        format!(
            "pid=`eval ps ax{first}{}{} | awk '{{print $1}};'`",
            include.map(|s| format!(" | grep {s}")).join(""),
            self.exclude
                .iter()
                .map(|s| format!(" | grep -v {s}"))
                .join(""),
        )
    }
}

/// Extract the PIDs of all lines in the output of `ps ax` that match the filter. The PID is the
/// first column. Lines whose first column is not a number (like the header) are ignored.
pub fn parse_process_table(table: &str, filter: &ProcessFilter) -> Vec<u32> {
    table
        .lines()
        .filter(|l| filter.matches(l))
        .filter_map(|l| l.split_whitespace().next())
        .filter_map(|pid| pid.parse().ok())
        .collect()
}

/// Run `ps ax` and search for the process of a node. If multiple processes match, the first one
/// is chosen. Returns `None` if no process matches.
pub async fn find_process(filter: &ProcessFilter) -> Result<Option<u32>, NamespaceError> {
    log::trace!("[{}] `ps ax`", filter.name());
    let output = Command::new("ps")
        .arg("ax")
        .kill_on_drop(true)
        .output()
        .await?;
    let table = String::from_utf8(output.stdout)?;
    let pids = parse_process_table(&table, filter);
    if pids.len() > 1 {
        log::warn!(
            "[{}] {} processes match, choosing {}",
            filter.name(),
            pids.len(),
            pids[0]
        );
    }
    Ok(pids.first().copied())
}
