// LabLoader: Replay saved routing-daemon configurations into an emulated testbed
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

//! Dispatch commands to the emulated nodes, one after the other.

use std::fmt;

use itertools::Itertools;
use mininet_lab::{Executor, LabConfig, Outcome, ProcessFilter};

/// Substring that only appears in the process name of hosts.
const HOST_MARKER: &str = "host";

/// Kind of an emulated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// An end-host.
    Host,
    /// A router running the routing daemons.
    Router,
}

/// A named node of the emulated network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Name of the node as it appears in the process table.
    pub name: String,
    /// Kind of the node.
    pub kind: EntityKind,
}

impl Entity {
    /// Create a new host.
    pub fn host(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Host,
        }
    }

    /// Create a new router.
    pub fn router(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Router,
        }
    }

    /// The filter on the process table to find the node. Since the name of a router is a prefix
    /// of the name of its attached host (`SEAT` and `SEAT-host`), routers ignore all processes
    /// containing `host`.
    pub fn filter(&self, config: &LabConfig) -> ProcessFilter {
        let filter = ProcessFilter::new(config, &self.name);
        match self.kind {
            EntityKind::Host => filter,
            EntityKind::Router => filter.exclude(HOST_MARKER),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Statistics about all dispatched commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of commands that were executed.
    pub executed: usize,
    /// Number of commands whose exit code was non-zero.
    pub unsuccessful: usize,
    /// Names of nodes for which no process was found.
    pub missing: Vec<String>,
    /// Number of commands that could not be run due to an error.
    pub failed: usize,
    /// Number of commands only printed.
    pub printed: usize,
    /// Exit code of the last executed command.
    pub last_status: Option<i32>,
}

impl RunSummary {
    /// Exit code of the whole run: the exit code of the last command that was executed, or `0`
    /// if nothing was executed.
    pub fn exit_code(&self) -> i32 {
        self.last_status.unwrap_or(0)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} executed ({} unsuccessful), {} printed, {} failed, {} missing",
            self.executed,
            self.unsuccessful,
            self.printed,
            self.failed,
            self.missing.len()
        )?;
        if !self.missing.is_empty() {
            write!(f, " ({})", self.missing.iter().unique().join(", "))?;
        }
        Ok(())
    }
}

/// Runs commands on nodes using an [`Executor`], strictly one after the other. Errors are never
/// propagated: they are logged and counted in the [`RunSummary`].
#[derive(Debug)]
pub struct Dispatcher<E> {
    executor: E,
    config: LabConfig,
    summary: RunSummary,
}

impl<E: Executor> Dispatcher<E> {
    /// Create a new dispatcher.
    pub fn new(executor: E, config: LabConfig) -> Self {
        Self {
            executor,
            config,
            summary: Default::default(),
        }
    }

    /// The lab configuration.
    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Get a reference to the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Get the summary of all dispatched commands.
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Consume the dispatcher, returning the summary.
    pub fn into_summary(self) -> RunSummary {
        self.summary
    }

    /// Find the process of `entity` and run `args` in its namespaces. The call blocks until the
    /// command has finished. Returns `None` if the command could not be run due to an error.
    pub async fn dispatch(&mut self, entity: &Entity, args: &[String]) -> Option<Outcome> {
        let program = args.first().map(String::as_str).unwrap_or_default();
        log::trace!("[{entity}] {}", args.iter().join(" "));
        let outcome = match self.executor.run(&entity.filter(&self.config), args).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("[{entity}] Cannot run `{program}`: {e}");
                self.summary.failed += 1;
                return None;
            }
        };
        match outcome {
            Outcome::Executed { pid, status } => {
                self.summary.executed += 1;
                self.summary.last_status = Some(status);
                if status == 0 {
                    log::debug!("[{entity}] `{program}` done (pid {pid})");
                } else {
                    self.summary.unsuccessful += 1;
                    log::warn!("[{entity}] `{program}` exited with {status} (pid {pid})");
                }
            }
            Outcome::Missing => {
                log::warn!("[{entity}] No process found! Skipping `{program}`");
                self.summary.missing.push(entity.name.clone());
            }
            Outcome::DryRun => self.summary.printed += 1,
        }
        Some(outcome)
    }
}
