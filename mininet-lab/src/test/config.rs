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

use pretty_assertions::assert_eq;

use crate::{
    config::{ConfigError, LabConfig, Topology, ABILENE, MULTI_AS},
    HostProperties,
};

#[test]
fn builtin_abilene() {
    assert_eq!(ABILENE.routers.len(), 9);
    assert_eq!(ABILENE.hosts.len(), 9);
    assert_eq!(ABILENE.gateway_octet, 2);
    assert_eq!(ABILENE.lab, LabConfig::default());
    assert_eq!(
        ABILENE.hosts[0],
        HostProperties {
            name: String::from("SEAT-host"),
            iface: String::from("seat"),
            addr: "4.109.0.1/24".parse().unwrap(),
        }
    );
    // every host is attached to the router with the same name
    for (router, host) in ABILENE.routers.iter().zip(ABILENE.hosts.iter()) {
        assert_eq!(host.name, format!("{router}-host"));
        assert_eq!(host.iface, router.to_lowercase());
    }
}

#[test]
fn builtin_multi_as() {
    assert_eq!(MULTI_AS.routers.len(), 11);
    assert_eq!(&MULTI_AS.routers[9..], &["east", "west"]);
    assert_eq!(
        MULTI_AS
            .hosts
            .iter()
            .map(|h| h.name.as_str())
            .collect::<Vec<_>>(),
        vec!["client", "server1", "server2"]
    );
    assert_eq!(MULTI_AS.gateway_octet, 1);
}

#[test]
fn custom_lab_config() {
    let topo = Topology::from_toml(
        r#"
gateway_octet = 254
routers = ["r1"]

[lab]
sudo = false
exec_tool = "/opt/mininet/bin/mxexec"
"#,
    )
    .unwrap();
    assert_eq!(topo.routers, vec![String::from("r1")]);
    assert!(topo.hosts.is_empty());
    assert!(!topo.lab.sudo);
    assert_eq!(topo.lab.exec_tool, "/opt/mininet/bin/mxexec");
    // unspecified values fall back to the defaults
    assert_eq!(topo.lab.process_prefix, "mininet:");
    assert_eq!(topo.lab.vtysh, "vtysh");
}

#[test]
fn gateway_collision() {
    let result = Topology::from_toml(
        r#"
gateway_octet = 1
hosts = [{ name = "h1", iface = "h1-eth0", addr = "10.0.0.1/24" }]
"#,
    );
    match result {
        Err(ConfigError::GatewayCollision(name, addr)) => {
            assert_eq!(name, "h1");
            assert_eq!(addr.to_string(), "10.0.0.1");
        }
        x => panic!("Unexpected result: {x:?}"),
    }
}

#[test]
fn invalid_gateway_octet() {
    assert!(matches!(
        Topology::from_toml("gateway_octet = 0"),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        Topology::from_toml("gateway_octet = 255"),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn missing_file() {
    assert!(matches!(
        Topology::from_file("/this/file/does/not/exist.toml"),
        Err(ConfigError::Io(_, _))
    ));
}
