// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::ansi;
use crate::sink::Stream;

/// The kind of an emitted line.
///
/// Kinds differ only in their display color and the stream they route to;
/// there is no level thresholding. Whether an operation stamps a wall-clock
/// timestamp on the line is decided at the call site, not by the kind:
/// `log` stamps its lines, but a group header or a `table` grid emitted
/// under the same kind does not.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Ordinary output.
    Log,
    /// Informational output, cyan.
    Info,
    /// Suspicious condition, yellow.
    Warn,
    /// Runtime error, red. The only kind routed to stderr.
    Error,
    /// Completed happily, green.
    Success,
    /// Attention-grabbing output, bright.
    Announce,
    /// Print-style debugging.
    Debug,
    /// Output with an attached call stack.
    Trace,
    /// Result of an assertion check.
    Assert,
    /// A named counter tick.
    Count,
    /// Raw output: `print`, `println`, `dir`, `dirxml`.
    Print,
    /// A running timer's intermediate reading.
    TimeLog,
    /// A timer reading, styled like a warning.
    TimeStamp,
}

impl Kind {
    /// The ANSI color code for this kind, if it has one.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Kind::Announce => Some(ansi::BRIGHT),
            Kind::Info => Some(ansi::CYAN),
            Kind::Warn | Kind::TimeStamp => Some(ansi::YELLOW),
            Kind::Error => Some(ansi::RED),
            Kind::Success => Some(ansi::GREEN),
            Kind::Log
            | Kind::Debug
            | Kind::Trace
            | Kind::Assert
            | Kind::Count
            | Kind::Print
            | Kind::TimeLog => None,
        }
    }

    /// The stream this kind routes to.
    pub fn stream(self) -> Stream {
        match self {
            Kind::Error => Stream::Err,
            _ => Stream::Out,
        }
    }
}

/*
Boilerplate notes.

Copy/Clone/PartialEq/Eq/Hash: derived, it's a plain fieldless enum.
Ord: no. Kinds are not levels; ordering them would imply thresholding,
which this crate deliberately does not do.
Display: not implemented, the kind never appears in rendered output.
non_exhaustive: more kinds may be added.
*/
