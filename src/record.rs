// SPDX-License-Identifier: MIT OR Apache-2.0

//! The record type: one emitted, fully rendered log line.
//!
//! A record carries its finished display text plus the three facts the
//! buffer needs to place and later remove it: who emitted it, at what
//! priority, and in which emission order. Text is rendered once, at
//! emission; a repaint replays records verbatim.

use crate::kind::Kind;
use crate::registry::OwnerId;
use crate::sink::Stream;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    owner: OwnerId,
    priority: i32,
    sequence: u64,
    kind: Kind,
    stream: Stream,
    text: String,
    debug_pinned: bool,
}

impl Record {
    pub(crate) fn new(
        owner: OwnerId,
        priority: i32,
        sequence: u64,
        kind: Kind,
        stream: Stream,
        text: String,
        debug_pinned: bool,
    ) -> Self {
        Self {
            owner,
            priority,
            sequence,
            kind,
            stream,
            text,
            debug_pinned,
        }
    }

    /// The emitting instance.
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// The owner's ordering priority, copied at emission time.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Process-wide monotonic emission counter. Never reused.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The stream the line routes to.
    pub fn stream(&self) -> Stream {
        self.stream
    }

    /// The finished display line, colorized and indented.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// True when emitted in debug mode: append-only, never repainted,
    /// never removed by a clear.
    pub fn debug_pinned(&self) -> bool {
        self.debug_pinned
    }
}

/*
Boilerplate notes for Record.

Clone: derived; snapshots hand out copies.
PartialEq/Eq/Hash: derived; sequence gives records a natural identity and
equality falls out of the fields.
Ord: not implemented. The buffer's order is (priority, sequence), but a
record alone doesn't know whether the comparison should be buffer order or
emission order, so we keep the comparison where the policy lives.
Default: no. A record without an owner or sequence is meaningless.
Send/Sync: automatic; text is finished String, values never ride along.
*/
