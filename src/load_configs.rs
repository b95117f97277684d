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

//! Replay the saved interface and OSPF configuration of all routers of the Abilene topology.

use std::path::{Path, PathBuf};

use clap::Parser;
use mininet_lab::{config::ABILENE, DryRun, Executor, MininetLab, Topology};

use lab_loader::{load_router_configs, Dispatcher, LoaderError, RunSummary, Variant};

/// Load the saved configuration of all routers into their routing daemons.
#[derive(Debug, Parser)]
struct Cli {
    /// Folder containing one sub-folder per router, with `zebra.conf.sav` and `ospfd.conf.sav`.
    folder: PathBuf,
    /// Use the topology described in this TOML file instead of the Abilene topology.
    #[clap(long = "topology", short = 't')]
    topology: Option<PathBuf>,
    /// Only print the commands instead of executing them.
    #[clap(long = "dry-run", short = 'n')]
    dry_run: bool,
}

async fn run<E: Executor>(
    executor: E,
    topo: &Topology,
    folder: &Path,
) -> Result<RunSummary, LoaderError> {
    let mut dispatcher = Dispatcher::new(executor, topo.lab.clone());
    load_router_configs(&mut dispatcher, topo, folder, Variant::SingleAs).await?;
    Ok(dispatcher.into_summary())
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
                run(DryRun::new(topo.lab.clone()), &topo, &args.folder).await
            } else {
                run(MininetLab::new(topo.lab.clone()), &topo, &args.folder).await
            }
        })?;

    log::info!("Done: {summary}");
    std::process::exit(summary.exit_code())
}
