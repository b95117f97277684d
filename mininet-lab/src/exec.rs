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

//! Executors run a command inside the namespaces of an emulated node.

use async_trait::async_trait;
use itertools::Itertools;

use crate::{
    config::LabConfig,
    namespace::NamespaceSession,
    process::{find_process, ProcessFilter},
    MininetLabError,
};

/// Result of running a command on an emulated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command was executed in the namespaces of process `pid`, and exited with `status`.
    Executed {
        /// The process whose namespaces were entered.
        pid: u32,
        /// The exit code (`-1` if the command was terminated by a signal).
        status: i32,
    },
    /// No process of that node is running.
    Missing,
    /// The command was only printed.
    DryRun,
}

/// Something that can run commands on emulated nodes.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Find the process of the node described by `target`, and run `args` in its namespaces. The
    /// call blocks until the command has finished.
    async fn run(
        &self,
        target: &ProcessFilter,
        args: &[String],
    ) -> Result<Outcome, MininetLabError>;
}

/// Executor that runs the commands on the local machine.
#[derive(Debug, Clone)]
pub struct MininetLab {
    config: LabConfig,
}

impl MininetLab {
    /// Create a new executor using the given lab configuration.
    pub fn new(config: LabConfig) -> Self {
        Self { config }
    }

    /// Search for the process of a node, and create a session to enter its namespaces.
    pub async fn session(
        &self,
        target: &ProcessFilter,
    ) -> Result<Option<NamespaceSession>, MininetLabError> {
        Ok(find_process(target)
            .await?
            .map(|pid| NamespaceSession::new(&self.config, target.name(), pid)))
    }
}

#[async_trait]
impl Executor for MininetLab {
    async fn run(
        &self,
        target: &ProcessFilter,
        args: &[String],
    ) -> Result<Outcome, MininetLabError> {
        let Some(session) = self.session(target).await? else {
            return Ok(Outcome::Missing);
        };
        let status = session.execute_cmd_status(args).await?;
        Ok(Outcome::Executed {
            pid: session.pid(),
            status: status.code().unwrap_or(-1),
        })
    }
}

/// Executor that does not touch the lab, but prints the shell pipeline that performs the same
/// action:
///
/// ```text
/// pid=`eval ps ax | grep "mininet:SEAT" | grep bash | grep -v mxexec | grep -v host | awk '{print $1};'` && sudo mxexec -a $pid -b $pid -k $pid vtysh -c 'conf ter' ...
/// ```
#[derive(Debug, Clone)]
pub struct DryRun {
    config: LabConfig,
}

impl DryRun {
    /// Create a new dry-run executor.
    pub fn new(config: LabConfig) -> Self {
        Self { config }
    }

    /// Generate the shell pipeline.
    pub fn pipeline(&self, target: &ProcessFilter, args: &[String]) -> String {
        format!(
            "{} && {}{} -a $pid -b $pid -k $pid {}",
            target.shell_expr(),
            if self.config.sudo { "sudo " } else { "" },
            self.config.exec_tool,
            args.iter().map(|a| shell_quote(a)).join(" ")
        )
    }
}

#[async_trait]
impl Executor for DryRun {
    async fn run(
        &self,
        target: &ProcessFilter,
        args: &[String],
    ) -> Result<Outcome, MininetLabError> {
        println!("{}", self.pipeline(target, args));
        Ok(Outcome::DryRun)
    }
}

/// Quote an argument with single quotes if it contains anything other than characters that are
/// safe in a shell word.
fn shell_quote(arg: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c);
    if !arg.is_empty() && arg.chars().all(safe) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
