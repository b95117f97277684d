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

mod config;
mod exec;
mod vtysh;

/// Output of `ps ax` on a machine running a small emulated network.
pub(crate) const PS_AX: &str = "\
    PID TTY      STAT   TIME COMMAND
      1 ?        Ss     0:03 /sbin/init splash
    812 ?        Ssl    0:12 /usr/lib/frr/zebra -d
   4242 pts/3    Ss+    0:00 bash --norc --noediting -is mininet:SEAT
   4243 pts/4    Ss+    0:00 bash --norc --noediting -is mininet:SEAT-host
   4250 pts/5    Ss+    0:00 bash --norc --noediting -is mininet:LOSA
   4300 pts/6    S+     0:00 mxexec -a 4242 -b 4242 -k 4242 bash mininet:SEAT
   4301 pts/7    S+     0:00 python3 topo.py mininet:SEAT
";
