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

//! Assign interface addresses and default routes to emulated hosts.

use std::net::Ipv4Addr;

use ipnet::Ipv4Net;
use mininet_lab::{Executor, HostProperties, Topology};

use crate::dispatch::{Dispatcher, Entity};

/// Replace the last octet of `addr` with `octet`.
pub fn peer_address(addr: Ipv4Addr, octet: u8) -> Ipv4Addr {
    let [a, b, c, _] = addr.octets();
    Ipv4Addr::new(a, b, c, octet)
}

/// The address of a host, together with its default gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressAssignment {
    /// Name of the host.
    pub host: String,
    /// Interface that gets the address.
    pub iface: String,
    /// Address of the interface.
    pub addr: Ipv4Net,
    /// Default gateway, reachable over `iface`.
    pub gateway: Ipv4Addr,
}

impl AddressAssignment {
    /// Compute the assignment of a host. The gateway is the address of the host with the last
    /// octet replaced by `gateway_octet`.
    pub fn new(host: &HostProperties, gateway_octet: u8) -> Self {
        Self {
            host: host.name.clone(),
            iface: host.iface.clone(),
            addr: host.addr,
            gateway: peer_address(host.addr.addr(), gateway_octet),
        }
    }

    /// `ifconfig <iface> <addr>/<len> up`
    pub fn address_cmd(&self) -> Vec<String> {
        vec![
            String::from("ifconfig"),
            self.iface.clone(),
            self.addr.to_string(),
            String::from("up"),
        ]
    }

    /// `route add default gw <gateway> <iface>`
    pub fn default_route_cmd(&self) -> Vec<String> {
        vec![
            String::from("route"),
            String::from("add"),
            String::from("default"),
            String::from("gw"),
            self.gateway.to_string(),
            self.iface.clone(),
        ]
    }
}

/// Compute the assignments of all hosts in the topology.
pub fn assignments(topo: &Topology) -> Vec<AddressAssignment> {
    topo.hosts
        .iter()
        .map(|h| AddressAssignment::new(h, topo.gateway_octet))
        .collect()
}

/// Configure the address and the default route of every host in the topology, one after the
/// other. A host whose process cannot be found is skipped.
pub async fn configure_hosts<E: Executor>(dispatcher: &mut Dispatcher<E>, topo: &Topology) {
    for a in assignments(topo) {
        log::debug!("[{}] {} via {} on {}", a.host, a.addr, a.gateway, a.iface);
        let host = Entity::host(&a.host);
        dispatcher.dispatch(&host, &a.address_cmd()).await;
        dispatcher.dispatch(&host, &a.default_route_cmd()).await;
    }
}
