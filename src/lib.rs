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

//! # LabLoader: Replay saved routing-daemon configurations into an emulated testbed
//!
//! This crate configures an emulated network (see [`mininet_lab`]) in two steps:
//!
//! 1. Every host gets an address on its interface and a default route towards its router
//!    ([`addressing`]).
//! 2. The saved configuration of every router (`zebra.conf.sav`, `ospfd.conf.sav` and
//!    `bgpd.conf.sav`) is parsed, and replayed into the routing daemons using a single call to
//!    `vtysh` per router ([`loader`]).
//!
//! ## Structure
//! - The module [`sections`] contains the scanner that extracts configuration sections
//!   (interfaces, static routes, OSPF and BGP) from a saved configuration file.
//! - The module [`assembler`] collects the directives of a router, and assembles the `vtysh`
//!   command.
//! - The module [`dispatch`] finds the process of a node and runs a command in its namespaces,
//!   one node after the other.
//! - The module [`loader`] defines which files and which sections are replayed, and in which
//!   order.
//!
//! ## Binaries
//! - `config-hosts`: configure the hosts of the Abilene topology.
//! - `load-configs <FOLDER>`: replay interfaces and OSPF of the Abilene topology.
//! - `load-configs-multi-as <FOLDER>`: configure the hosts of the multi-AS topology, and replay
//!   interfaces, static routes, OSPF and BGP.
//!
//! All binaries accept `--topology <FILE>` to use a different topology, and `--dry-run` to print
//! the shell commands instead of executing them. Logging is controlled by `RUST_LOG`.

#![deny(missing_docs, missing_debug_implementations, rust_2018_idioms)]

use std::path::PathBuf;

use mininet_lab::ConfigError;
use thiserror::Error;

pub mod addressing;
pub mod assembler;
pub mod dispatch;
pub mod loader;
pub mod sections;

#[cfg(test)]
mod test;

pub use addressing::configure_hosts;
pub use dispatch::{Dispatcher, Entity, RunSummary};
pub use loader::{load_router_configs, Variant};

/// Error thrown while loading the configuration into the lab.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A saved configuration file cannot be read.
    #[error("Cannot read {}: {source}", path.display())]
    ConfigFile {
        /// Path to the file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// Error while reading the topology.
    #[error("{0}")]
    Config(#[from] ConfigError),
}
