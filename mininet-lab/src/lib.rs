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

//! This library contains methods to access the nodes of an emulated network (Mininet).
//!
//! # Emulated nodes
//!
//! Every host and every router of the emulated network is a `bash` process running in its own
//! network namespace. Its command line contains `mininet:<NAME>`, which is used to find its PID in
//! the process table (see [`process`]). Commands are then executed inside the namespaces of that
//! process using `mxexec` (see [`namespace`]):
//!
//! ```text
//! sudo mxexec -a PID -b PID -k PID <command...>
//! ```
//!
//! Routers run the routing daemons (zebra, ospfd, bgpd), which are configured through their shell
//! `vtysh` (see [`vtysh`]).
//!
//! # Configuration
//!
//! The names of all nodes, and the addresses of all hosts, are described by a [`config::Topology`].
//! Two topologies are built-in ([`config::ABILENE`] and [`config::MULTI_AS`]); see the `config`
//! folder for their TOML description. Custom topologies can be read using
//! [`config::Topology::from_file`].
//!
//! # Executors
//!
//! The trait [`exec::Executor`] runs a command on a node. [`exec::MininetLab`] executes it on the
//! local machine, while [`exec::DryRun`] only prints the equivalent shell pipeline.

use thiserror::Error;

pub mod config;
pub mod exec;
pub mod namespace;
pub mod process;
pub mod vtysh;

#[cfg(test)]
mod test;

pub use config::{ConfigError, HostProperties, LabConfig, Topology};
pub use exec::{DryRun, Executor, MininetLab, Outcome};
pub use namespace::{NamespaceError, NamespaceSession};
pub use process::ProcessFilter;
pub use vtysh::{Directive, VtyshCommand};

/// Error type thrown while interacting with the emulated network.
#[derive(Debug, Error)]
pub enum MininetLabError {
    /// Error while executing a command in a namespace
    #[error("Namespace error: {0}")]
    Namespace(#[from] NamespaceError),
}
