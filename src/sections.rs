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

//! This module extracts configuration sections from saved routing-daemon configuration files.
//!
//! A section starts with a line matching one of the start markers below, and ends with a line
//! containing only the terminator `!`. The scanner has two states: it is either searching for the
//! next start marker, or capturing all lines of a section until the terminator. Lines outside of
//! sections are ignored.

use lazy_static::lazy_static;
use mininet_lab::Directive;
use regex::Regex;

/// Line that terminates a section.
pub const TERMINATOR: &str = "!";

/// Kind of a configuration section.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SectionKind {
    /// `interface <name>` block.
    Interface,
    /// A run of `ip route ...` lines.
    StaticRoute,
    /// `router ospf` block.
    Ospf,
    /// `router bgp <as>` block.
    Bgp,
}

impl SectionKind {
    /// Whether the section is a configuration block that must be left with `exit`. Static routes
    /// are single-line commands at the top level, so there is nothing to leave.
    pub fn closes_with_exit(&self) -> bool {
        !matches!(self, SectionKind::StaticRoute)
    }
}

use SectionKind::*;

macro_rules! start_markers {
    ($(($name:ident, $kind:expr, $rex:literal),)*) => {
        /// Check if `line` starts a section of one of the `kinds`. The markers are checked in
        /// the order of the table. Each marker is a regular expression compiled once in a
        /// `lazy_static` environment.
        pub fn section_start(line: &str, kinds: &[SectionKind]) -> Option<SectionKind> {
            lazy_static! {
                $(static ref $name: Regex = Regex::new($rex).unwrap();)*
            }

            $(
                if kinds.contains(&$kind) && $name.is_match(line) {
                    return Some($kind);
                }
            )*
            None
        }
    }
}

start_markers! {
 // Label,         Kind,        Regex on the line
    (INTERFACE,    Interface,   r"^interface\b"),
    (STATIC_ROUTE, StaticRoute, r"^ip route\b"),
    (OSPF,         Ospf,        r"^router ospf\b"),
    (BGP,          Bgp,         r"^router bgp\b"),
}

/// Check if a line terminates a section.
pub fn is_terminator(line: &str) -> bool {
    line.trim() == TERMINATOR
}

/// A section captured from a configuration file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<'a> {
    /// The kind of section, determined by its first line.
    pub kind: SectionKind,
    /// All lines of the section, starting with the line that matched the marker. The terminator
    /// is not included.
    pub lines: Vec<&'a str>,
    /// Whether the section was closed by a terminator. This is `false` if the file ended first.
    pub terminated: bool,
}

impl<'a> Section<'a> {
    /// Generate the directives to replay the section: one per line, followed by `exit` if the
    /// section was terminated and is a configuration block.
    ///
    /// An unterminated section does not produce an `exit`.
    pub fn directives(&self) -> Vec<Directive> {
        let mut directives: Vec<Directive> =
            self.lines.iter().map(|l| Directive::from(*l)).collect();
        if self.terminated && self.kind.closes_with_exit() {
            directives.push(Directive::Exit);
        }
        directives
    }
}

/// Scan `lines` starting from `cursor` for the next section of one of the `kinds`. Returns the
/// section (if any) and the position right after it, i.e., after its terminator. If no section is
/// found, the returned position is `lines.len()`.
pub fn next_section<'a>(
    lines: &[&'a str],
    cursor: usize,
    kinds: &[SectionKind],
) -> (Option<Section<'a>>, usize) {
    // searching
    let Some((start, kind)) = lines
        .iter()
        .enumerate()
        .skip(cursor)
        .find_map(|(i, l)| section_start(l, kinds).map(|k| (i, k)))
    else {
        return (None, lines.len());
    };

    // capturing
    let mut section = Section {
        kind,
        lines: vec![lines[start]],
        terminated: false,
    };
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        if is_terminator(line) {
            section.terminated = true;
            return (Some(section), i + 1);
        }
        section.lines.push(*line);
    }
    (Some(section), lines.len())
}

/// Iterator over all sections of a configuration.
#[derive(Clone, Debug)]
pub struct Sections<'a, 'k> {
    lines: Vec<&'a str>,
    cursor: usize,
    kinds: &'k [SectionKind],
}

impl<'a, 'k> Sections<'a, 'k> {
    /// Iterate over all sections of `kinds` in `config`, in the order in which they appear.
    pub fn new(config: &'a str, kinds: &'k [SectionKind]) -> Self {
        Self {
            lines: config.lines().collect(),
            cursor: 0,
            kinds,
        }
    }
}

impl<'a, 'k> Iterator for Sections<'a, 'k> {
    type Item = Section<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (section, cursor) = next_section(&self.lines, self.cursor, self.kinds);
        self.cursor = cursor;
        section
    }
}

/// Extract the directives of all sections of `kinds` from `config`. `name` is only used for
/// logging.
pub fn extract(name: &str, config: &str, kinds: &[SectionKind]) -> Vec<Directive> {
    let mut directives = Vec::new();
    for section in Sections::new(config, kinds) {
        log::trace!(
            "[{name}] {:?} section `{}` with {} lines",
            section.kind,
            section.lines[0],
            section.lines.len()
        );
        if !section.terminated {
            log::warn!(
                "[{name}] {:?} section `{}` is not terminated by `{TERMINATOR}`",
                section.kind,
                section.lines[0],
            );
        }
        directives.extend(section.directives());
    }
    directives
}
