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
    config::LabConfig,
    exec::{DryRun, Executor, Outcome},
    namespace::NamespaceSession,
    process::ProcessFilter,
};

fn args(a: &[&str]) -> Vec<String> {
    a.iter().map(|s| s.to_string()).collect()
}

#[test]
fn dry_run_pipeline() {
    let config = LabConfig::default();
    let dry = DryRun::new(config.clone());
    let target = ProcessFilter::new(&config, "SEAT").exclude("host");
    assert_eq!(
        dry.pipeline(
            &target,
            &args(&["vtysh", "-c", "conf ter", "-c", "router ospf", "-c", "exit"])
        ),
        "pid=`eval ps ax | grep \"mininet:SEAT\" | grep bash | grep -v mxexec | grep -v host | awk '{print $1};'` \
         && sudo mxexec -a $pid -b $pid -k $pid vtysh -c 'conf ter' -c 'router ospf' -c exit"
    );
}

#[test]
fn dry_run_quotes() {
    let config = LabConfig {
        sudo: false,
        ..Default::default()
    };
    let dry = DryRun::new(config.clone());
    let target = ProcessFilter::new(&config, "client");
    assert_eq!(
        dry.pipeline(&target, &args(&["echo", "it's", ""])),
        "pid=`eval ps ax | grep \"mininet:client\" | grep bash | grep -v mxexec | awk '{print $1};'` \
         && mxexec -a $pid -b $pid -k $pid echo 'it'\\''s' ''"
    );
}

#[tokio::test]
async fn dry_run_does_not_execute() {
    let config = LabConfig::default();
    let dry = DryRun::new(config.clone());
    let target = ProcessFilter::new(&config, "SEAT");
    let outcome = dry.run(&target, &args(&["true"])).await.unwrap();
    assert_eq!(outcome, Outcome::DryRun);
}

#[test]
fn namespace_entry() {
    let session = NamespaceSession::new(&LabConfig::default(), "SEAT", 4242);
    assert_eq!(
        session.entry_args(),
        args(&["sudo", "mxexec", "-a", "4242", "-b", "4242", "-k", "4242"])
    );
    let cmd = session.std_command(&["ifconfig", "seat"]);
    assert_eq!(cmd.get_program(), "sudo");
    assert_eq!(
        cmd.get_args().collect::<Vec<_>>(),
        vec!["mxexec", "-a", "4242", "-b", "4242", "-k", "4242", "ifconfig", "seat"]
    );

    let config = LabConfig {
        sudo: false,
        ..Default::default()
    };
    let session = NamespaceSession::new(&config, "SEAT", 7);
    assert_eq!(session.entry_args()[0], "mxexec");
    assert_eq!(session.pid(), 7);
    assert_eq!(session.name(), "SEAT");
}
