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

use crate::vtysh::{Directive, VtyshCommand};

fn directives() -> Vec<Directive> {
    vec![
        Directive::from("interface seat-eth0"),
        Directive::from(" ip address 4.109.0.1/24"),
        Directive::Exit,
    ]
}

#[test]
fn fragments() {
    assert_eq!(Directive::Exit.fragment(), "-c 'exit' ");
    assert_eq!(
        Directive::from("router ospf").to_string(),
        "-c 'router ospf' "
    );
    let cmd = VtyshCommand::configure("vtysh", directives()).unwrap();
    assert_eq!(
        cmd.fragments(),
        vec![
            "-c 'interface seat-eth0' ",
            "-c ' ip address 4.109.0.1/24' ",
            "-c 'exit' ",
        ]
    );
}

#[test]
fn nothing_to_configure() {
    assert_eq!(VtyshCommand::configure("vtysh", Vec::new()), None);
}

#[test]
fn args() {
    let cmd = VtyshCommand::configure("vtysh", directives()).unwrap();
    assert_eq!(
        cmd.args(),
        vec![
            "vtysh",
            "-c",
            "conf ter",
            "-c",
            "interface seat-eth0",
            "-c",
            " ip address 4.109.0.1/24",
            "-c",
            "exit",
        ]
    );
}

#[test]
fn shell_string() {
    let cmd = VtyshCommand::configure("vtysh", directives()).unwrap();
    assert_eq!(
        cmd.shell_string(),
        "vtysh -c 'conf ter' -c 'interface seat-eth0' -c ' ip address 4.109.0.1/24' -c 'exit' "
    );
}
