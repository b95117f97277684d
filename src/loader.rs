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

//! Load the saved configuration of every router and replay it into its routing daemons.
//!
//! The configuration of a router `NAME` is stored in `<folder>/NAME/`, with one file per routing
//! daemon. The files are processed in a fixed order, and all extracted directives are replayed
//! using a single `vtysh` call.

use std::path::{Path, PathBuf};

use mininet_lab::{Executor, Topology};

use crate::{
    assembler::DirectiveBuffer,
    dispatch::{Dispatcher, Entity},
    sections::{extract, SectionKind},
    LoaderError,
};

/// A routing daemon whose configuration is replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Daemon {
    /// The zebra daemon (interfaces and static routes).
    Zebra,
    /// The OSPF daemon.
    Ospfd,
    /// The BGP daemon.
    Bgpd,
}

impl Daemon {
    /// Name of the file containing the saved configuration.
    pub fn file_name(&self) -> &'static str {
        match self {
            Daemon::Zebra => "zebra.conf.sav",
            Daemon::Ospfd => "ospfd.conf.sav",
            Daemon::Bgpd => "bgpd.conf.sav",
        }
    }
}

/// Which sections are replayed from which daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// A single autonomous system: interfaces and OSPF.
    SingleAs,
    /// Multiple autonomous systems: interfaces, static routes, OSPF and BGP.
    MultiAs,
}

/// Interface sections only.
const INTERFACES: &[SectionKind] = &[SectionKind::Interface];
/// Interface sections and static routes.
const INTERFACES_STATIC: &[SectionKind] = &[SectionKind::Interface, SectionKind::StaticRoute];
/// Interface sections with OSPF parameters, and the OSPF process.
const OSPF: &[SectionKind] = &[SectionKind::Interface, SectionKind::Ospf];
/// The BGP process.
const BGP: &[SectionKind] = &[SectionKind::Bgp];

const SINGLE_AS_DAEMONS: &[(Daemon, &[SectionKind])] =
    &[(Daemon::Zebra, INTERFACES), (Daemon::Ospfd, OSPF)];
const MULTI_AS_DAEMONS: &[(Daemon, &[SectionKind])] = &[
    (Daemon::Zebra, INTERFACES_STATIC),
    (Daemon::Ospfd, OSPF),
    (Daemon::Bgpd, BGP),
];

impl Variant {
    /// All daemons in the order in which they are replayed, together with the sections that are
    /// extracted from their configuration.
    pub fn daemons(&self) -> &'static [(Daemon, &'static [SectionKind])] {
        match self {
            Variant::SingleAs => SINGLE_AS_DAEMONS,
            Variant::MultiAs => MULTI_AS_DAEMONS,
        }
    }
}

/// Path of the configuration file of `daemon` on `router`.
pub fn config_path(folder: impl AsRef<Path>, router: &str, daemon: Daemon) -> PathBuf {
    folder.as_ref().join(router).join(daemon.file_name())
}

/// Read all configuration files of `router`, and extract the directives. All files must exist.
pub fn read_router_config(
    folder: impl AsRef<Path>,
    router: &str,
    variant: Variant,
) -> Result<DirectiveBuffer, LoaderError> {
    let mut buffer = DirectiveBuffer::new();
    for (daemon, kinds) in variant.daemons() {
        let path = config_path(folder.as_ref(), router, *daemon);
        log::trace!("[{router}] Read {}", path.display());
        let config = std::fs::read_to_string(&path)
            .map_err(|source| LoaderError::ConfigFile { path, source })?;
        let directives = extract(router, &config, kinds);
        log::trace!(
            "[{router}] {} directives from {}",
            directives.len(),
            daemon.file_name()
        );
        buffer.extend(directives);
    }
    Ok(buffer)
}

/// Replay the saved configuration of all routers in the topology, one router after the other.
///
/// The configuration of each router is read completely before anything is executed on it. A
/// missing configuration file aborts the run. Routers without any configuration are skipped.
pub async fn load_router_configs<E: Executor>(
    dispatcher: &mut Dispatcher<E>,
    topo: &Topology,
    folder: impl AsRef<Path>,
    variant: Variant,
) -> Result<(), LoaderError> {
    for router in topo.routers.iter() {
        let buffer = read_router_config(folder.as_ref(), router, variant)?;
        log::debug!("[{router}] {} directives", buffer.len());
        let Some(cmd) = buffer.assemble(&dispatcher.config().vtysh) else {
            log::info!("[{router}] No configuration found. Skipping.");
            continue;
        };
        log::trace!("[{router}] {cmd}");
        dispatcher
            .dispatch(&Entity::router(router), &cmd.args())
            .await;
    }
    Ok(())
}
