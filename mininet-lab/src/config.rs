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

//! This module contains the code for reading the configuration of the lab and its topology.

use std::{net::Ipv4Addr, path::Path};

use ipnet::Ipv4Net;
use lazy_static::lazy_static;
use serde::{de::Error as _, Deserialize, Deserializer};
use thiserror::Error;

macro_rules! expect {
    ($result:expr, $($rest:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!("Error: {}: {}\n", format!($($rest)*), e);
            panic!()
        })
    };
}

lazy_static! {
    /// The Abilene testbed: every router has a single host attached, named `<ROUTER>-host`.
    pub static ref ABILENE: Topology = expect!(
        Topology::from_toml(include_str!("../config/abilene.toml")),
        "Cannot parse the built-in topology 'config/abilene.toml'"
    );
    /// The Abilene testbed extended with two additional autonomous systems (`east` and `west`),
    /// a client and two servers.
    pub static ref MULTI_AS: Topology = expect!(
        Topology::from_toml(include_str!("../config/multi_as.toml")),
        "Cannot parse the built-in topology 'config/multi_as.toml'"
    );
}

/// How to reach the emulated processes of the lab.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Prefix each namespace-entry with `sudo`.
    pub sudo: bool,
    /// Tool used to enter the namespaces of a process (called as `<tool> -a PID -b PID -k PID`).
    pub exec_tool: String,
    /// Prefix of the command line of every emulated node, followed by its name.
    pub process_prefix: String,
    /// Program that must appear on the command line of an emulated node.
    pub shell: String,
    /// The routing daemon shell.
    pub vtysh: String,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            sudo: true,
            exec_tool: String::from("mxexec"),
            process_prefix: String::from("mininet:"),
            shell: String::from("bash"),
            vtysh: String::from("vtysh"),
        }
    }
}

/// The topology of the emulated network, i.e., the list of routers for which configuration is
/// replayed, and the list of hosts that receive an address and a default route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Topology {
    /// How to access the lab.
    #[serde(default)]
    pub lab: LabConfig,
    /// Last octet of the gateway address of each host. The gateway shares the first three octets
    /// with the address of the host.
    #[serde(deserialize_with = "deserialize_octet")]
    pub gateway_octet: u8,
    /// Names of all routers, in the order in which they are configured.
    #[serde(default)]
    pub routers: Vec<String>,
    /// All hosts, in the order in which they are configured.
    #[serde(default)]
    pub hosts: Vec<HostProperties>,
}

/// Properties of an emulated host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostProperties {
    /// Name of the host, as it appears in the process table.
    pub name: String,
    /// Interface on which the address is configured.
    pub iface: String,
    /// Address and prefix length of the interface.
    pub addr: Ipv4Net,
}

impl Topology {
    /// Parse a topology from a TOML string and check that it is consistent.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let topo: Self = toml::from_str(s)?;
        topo.validate()?;
        Ok(topo)
    }

    /// Read a topology from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Read topology from {}", path.display());
        let s = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e))?;
        Self::from_toml(&s)
    }

    /// Make sure that the gateway of each host differs from its own address.
    fn validate(&self) -> Result<(), ConfigError> {
        for host in self.hosts.iter() {
            if host.addr.addr().octets()[3] == self.gateway_octet {
                return Err(ConfigError::GatewayCollision(
                    host.name.clone(),
                    host.addr.addr(),
                ));
            }
        }
        Ok(())
    }
}

fn deserialize_octet<'de, D>(de: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let x = u8::deserialize(de)?;
    if (1..=254).contains(&x) {
        Ok(x)
    } else {
        Err(D::Error::custom(format!(
            "Gateway octet must be between 1 and 254, but was {x}"
        )))
    }
}

/// Error while reading the lab configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Cannot read the file.
    #[error("Cannot read '{0}': {1}")]
    Io(String, std::io::Error),
    /// Cannot parse the TOML file.
    #[error("Cannot parse topology: {0}")]
    Toml(#[from] toml::de::Error),
    /// A host already uses the address of its gateway.
    #[error("Host {0} has address {1}, which collides with its gateway")]
    GatewayCollision(String, Ipv4Addr),
}
