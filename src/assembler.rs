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

//! Accumulate the directives of a router and assemble them into a single `vtysh` command.

use mininet_lab::{Directive, VtyshCommand};

/// Ordered directives of a single router, collected from all of its configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveBuffer {
    directives: Vec<Directive>,
}

impl DirectiveBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append directives at the end.
    pub fn extend(&mut self, directives: impl IntoIterator<Item = Directive>) {
        self.directives.extend(directives)
    }

    /// Number of directives.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Returns `true` if no configuration was found.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// All directives in order.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// The shell fragments (`-c '<line>' `) of all directives in order.
    pub fn fragments(&self) -> Vec<String> {
        self.directives.iter().map(Directive::fragment).collect()
    }

    /// Assemble the `vtysh` command that enters configuration mode and replays all
    /// directives. Returns `None` if the buffer is empty, in which case nothing must be executed.
    pub fn assemble(self, vtysh: impl Into<String>) -> Option<VtyshCommand> {
        VtyshCommand::configure(vtysh, self.directives)
    }
}
