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


use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use mininet_lab::{Executor, MininetLabError, NamespaceError, Outcome, ProcessFilter};

/// Executor that records all commands instead of running them. Nodes with a known pid return
/// `status`, nodes listed in `failing` return an error, and all others are missing.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub pids: HashMap<String, u32>,
    pub failing: Vec<String>,
    pub status: i32,
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl Recorder {
    pub fn with_nodes<'a>(nodes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            pids: nodes
                .into_iter()
                .enumerate()
                .map(|(i, n)| (n.to_string(), 1000 + i as u32))
                .collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.calls().into_iter().map(|(n, _)| n).collect()
    }
}

#[async_trait]
impl Executor for Recorder {
    async fn run(
        &self,
        target: &ProcessFilter,
        args: &[String],
    ) -> Result<Outcome, MininetLabError> {
        self.calls
            .lock()
            .unwrap()
            .push((target.name().to_string(), args.to_vec()));
        if self.failing.iter().any(|n| n == target.name()) {
            return Err(NamespaceError::Client(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ))
            .into());
        }
        Ok(match self.pids.get(target.name()) {
            Some(pid) => Outcome::Executed {
                pid: *pid,
                status: self.status,
            },
            None => Outcome::Missing,
        })
    }
}
