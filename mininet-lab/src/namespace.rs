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

//! Module for executing commands inside the namespaces of an emulated node.

use std::{
    ffi::OsStr,
    process::{Command as StdCommand, ExitStatus, Output},
    string::FromUtf8Error,
};

use itertools::Itertools;
use thiserror::Error;
use tokio::process::Command;

use crate::config::LabConfig;

/// A handle to execute commands in the network, mount and PID namespace of a running process.
///
/// Every command is wrapped as follows:
///
/// ```text
/// sudo mxexec -a PID -b PID -k PID <command...>
/// ```
#[derive(Debug, Clone)]
pub struct NamespaceSession {
    /// Name of the node, used for logging.
    name: String,
    /// Process whose namespaces are entered.
    pid: u32,
    /// Prefix the command with `sudo`.
    sudo: bool,
    /// Tool to enter the namespaces.
    exec_tool: String,
}

impl NamespaceSession {
    /// Create a new session for the process `pid`. This does not check that the process exists.
    pub fn new(config: &LabConfig, name: impl Into<String>, pid: u32) -> Self {
        Self {
            name: name.into(),
            pid,
            sudo: config.sudo,
            exec_tool: config.exec_tool.clone(),
        }
    }

    /// Get the name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the PID whose namespaces are entered.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// The arguments that enter the namespaces, including the program (`sudo` or the tool).
    pub fn entry_args(&self) -> Vec<String> {
        let pid = self.pid.to_string();
        let mut args = Vec::with_capacity(8);
        if self.sudo {
            args.push(String::from("sudo"));
        }
        args.push(self.exec_tool.clone());
        for flag in ["-a", "-b", "-k"] {
            args.push(flag.to_string());
            args.push(pid.clone());
        }
        args
    }

    /// Create a raw command that enters the namespaces and executes `args` in there.
    pub fn std_command(&self, args: &[impl AsRef<OsStr>]) -> StdCommand {
        let entry = self.entry_args();
        let mut cmd = StdCommand::new(&entry[0]);
        cmd.args(&entry[1..]).args(args);
        cmd
    }

    /// Same as [`NamespaceSession::std_command`], but turned into a tokio command, which will be
    /// killed once it is dropped.
    pub(crate) fn raw_command(&self, args: &[impl AsRef<OsStr>]) -> Command {
        let mut cmd = Command::from(self.std_command(args));
        log::trace!("[tokio::process::Command] {:?}", cmd);
        cmd.kill_on_drop(true);
        cmd
    }

    /// Spawn the command, wait for it to finish, and collect its output.
    async fn output(&self, args: &[&str]) -> Result<Output, NamespaceError> {
        let cmd_str = || args.iter().join(" ");
        log::trace!("[{}] `{}`", self.name(), cmd_str());
        match self.raw_command(args).output().await {
            Ok(out) => Ok(out),
            Err(e) => {
                log::error!("[{}] {} failed: {}", self.name(), cmd_str(), e);
                Err(e.into())
            }
        }
    }

    /// Execute a command and return the status. This function will **not** check for the exit
    /// code, but simply return it. Non-empty output is logged.
    pub async fn execute_cmd_status(
        &self,
        args: &[impl AsRef<str> + Sync],
    ) -> Result<ExitStatus, NamespaceError> {
        let args = args.iter().map(|a| a.as_ref()).collect::<Vec<&str>>();
        let output = self.output(&args).await?;
        if !output.stdout.is_empty() || !output.stderr.is_empty() {
            log::debug!(
                "[{}] {} returned {}{}{}",
                self.name(),
                args.iter().join(" "),
                output.status,
                fmt_stream("STDOUT", &output.stdout),
                fmt_stream("STDERR", &output.stderr),
            );
        }
        Ok(output.status)
    }
}

fn fmt_stream(name: &str, content: &[u8]) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("\n{name}:\n{}", String::from_utf8_lossy(content))
    }
}

/// Error kind returned by [`NamespaceSession`].
#[derive(Debug, Error)]
pub enum NamespaceError {
    /// Error while spawning or waiting for the process.
    #[error("Process error: {0}")]
    Client(#[from] std::io::Error),
    /// Cannot parse output as utf8
    #[error("Cannot parse output as UTF-8: {0}")]
    FromUtf8(#[from] FromUtf8Error),
}
