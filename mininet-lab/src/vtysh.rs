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

//! Abstraction of the routing daemon shell (`vtysh`).

use std::fmt;

use itertools::Itertools;

/// Command that enters configuration mode.
pub const CONFIGURE_TERMINAL: &str = "conf ter";

/// A single command passed to `vtysh` using `-c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Directive {
    /// A line copied from a configuration file.
    Line(String),
    /// Leave the current configuration block.
    Exit,
}

impl Directive {
    /// The command that is sent to the shell.
    pub fn text(&self) -> &str {
        match self {
            Directive::Line(l) => l,
            Directive::Exit => "exit",
        }
    }

    /// The command as a shell fragment: `-c '<text>' `, including the trailing space.
    pub fn fragment(&self) -> String {
        format!("-c '{}' ", self.text())
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}

impl From<&str> for Directive {
    fn from(line: &str) -> Self {
        Directive::Line(line.to_string())
    }
}

impl From<String> for Directive {
    fn from(line: String) -> Self {
        Directive::Line(line)
    }
}

/// A single invocation of `vtysh` that enters configuration mode and then executes all directives
/// in order:
///
/// ```text
/// vtysh -c 'conf ter' -c 'interface seat-eth0' -c ' ip address 4.109.0.1/24' -c 'exit'
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VtyshCommand {
    program: String,
    directives: Vec<Directive>,
}

impl VtyshCommand {
    /// Create a command that writes the configuration `directives`. Returns `None` if there is
    /// nothing to configure.
    pub fn configure(program: impl Into<String>, directives: Vec<Directive>) -> Option<Self> {
        if directives.is_empty() {
            None
        } else {
            Some(Self {
                program: program.into(),
                directives,
            })
        }
    }

    /// All directives, without the one entering configuration mode.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// The shell fragments of all directives, without the one entering configuration mode.
    pub fn fragments(&self) -> Vec<String> {
        self.directives.iter().map(Directive::fragment).collect()
    }

    /// Arguments to execute the command directly (without a shell in between).
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(3 + 2 * self.directives.len());
        args.push(self.program.clone());
        args.push(String::from("-c"));
        args.push(String::from(CONFIGURE_TERMINAL));
        for d in self.directives.iter() {
            args.push(String::from("-c"));
            args.push(d.text().to_string());
        }
        args
    }

    /// The command as it would be typed into a shell.
    pub fn shell_string(&self) -> String {
        format!(
            "{} -c '{}' {}",
            self.program,
            CONFIGURE_TERMINAL,
            self.directives.iter().join("")
        )
    }
}

impl fmt::Display for VtyshCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shell_string())
    }
}
