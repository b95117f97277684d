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

//! Assign the address and the default route of every host in the Abilene topology.

use std::path::PathBuf;

use clap::Parser;
use mininet_lab::{config::ABILENE, DryRun, Executor, MininetLab, Topology};

use lab_loader::{configure_hosts, Dispatcher, RunSummary};

/// Configure the interface address and the default gateway of all hosts.
#[derive(Debug, Parser)]
struct Cli {
    /// Use the topology described in this TOML file instead of the Abilene topology.
    #[clap(long = "topology", short = 't')]
    topology: Option<PathBuf>,
    /// Only print the commands instead of executing them.
    #[clap(long = "dry-run", short = 'n')]
    dry_run: bool,
}

async fn run<E: Executor>(executor: E, topo: &Topology) -> RunSummary {
    let mut dispatcher = Dispatcher::new(executor, topo.lab.clone());
    configure_hosts(&mut dispatcher, topo).await;
    dispatcher.into_summary()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_timed();

    let args = Cli::parse();

    let topo = match args.topology {
        Some(path) => Topology::from_file(path)?,
        None => ABILENE.clone(),
    };

    let summary = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            if args.dry_run {
                run(DryRun::new(topo.lab.clone()), &topo).await
            } else {
                run(MininetLab::new(topo.lab.clone()), &topo).await
            }
        });

    log::info!("Done: {summary}");
    std::process::exit(summary.exit_code())
}
