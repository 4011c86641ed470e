// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
The process-scoped context: shared buffer, registry, and repaint engine.

Everything the interleaving guarantees depend on lives here, behind one
mutex: the ordered buffer, the id registry, the debug-pinned log, and every
physical write or clear of the shared sink. Holding the lock across a
mutation *and* the terminal I/O it implies is the whole concurrency
discipline: an insert and its repaint are one atomic unit, so two threads
can never interleave half-painted terminal states.

Most programs use the lazily-initialized [`Context::global`] and never name
a context at all. Tests and embedders build their own with [`Context::new`],
which keeps every test's buffer and capture independent and resettable.

# Repaint

The fast path is the pure append: a record that sorts at the end of the
buffer is written directly after existing output, costing one write and no
clear. Only two things invalidate the terminal: a record that lands before
existing output, and an owner clearing its lines while others remain. Both
clear the viewport and replay the buffer, which is cheap because records
carry finished text.

Non-interactive sinks can't be repainted; there the buffer degrades to an
append-only log kept solely so `clear` can do its bookkeeping. Debug-pinned
records bypass the ordered buffer entirely and are never rewritten.
*/

use crate::buffer::{Insertion, OrderedBuffer};
use crate::errors::ConfigurationError;
use crate::record::Record;
use crate::registry::{OwnerId, Registration, Registry, next_owner_id};
use crate::sink::{Sink, TerminalSink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// The one priority allowed below zero, reserved for the context's system
/// console so its lines sort above all user output.
pub(crate) const SYSTEM_PRIORITY: i32 = -1337;

static GLOBAL: OnceLock<Context> = OnceLock::new();

/// Handle to a process-scoped logging context.
///
/// Cheap to clone; all clones share one buffer, one registry, and one sink.
#[derive(Debug, Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

#[derive(Debug)]
struct ContextInner {
    sink: Arc<dyn Sink>,
    sequence: AtomicU64,
    system_owner: OwnerId,
    /// Physical writes for ordinary instances are suppressed when set;
    /// records are still buffered. The system console and debug-pinned
    /// output are exempt.
    silent: bool,
    state: Mutex<SharedState>,
}

#[derive(Debug, Default)]
struct SharedState {
    registry: Registry,
    buffer: OrderedBuffer,
    debug_log: Vec<Record>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Arc::new(TerminalSink::new()))
    }
}

impl Context {
    /// Builds an independent context writing through the given sink.
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                sink,
                sequence: AtomicU64::new(1),
                system_owner: next_owner_id(),
                silent: crate::console::env_flag("INTERLOG_SILENT"),
                state: Mutex::new(SharedState::default()),
            }),
        }
    }

    /// The process-wide default context, initialized on first use with a
    /// [`TerminalSink`].
    pub fn global() -> Context {
        GLOBAL.get_or_init(Context::default).clone()
    }

    /// The sink this context writes through.
    pub(crate) fn sink(&self) -> &Arc<dyn Sink> {
        &self.inner.sink
    }

    /// Strictly increasing across the context's lifetime; never reused.
    pub(crate) fn next_sequence(&self) -> u64 {
        self.inner.sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Identity of the context's system console. Every handle built by
    /// [`Context::system`] shares it, so they are one logical instance.
    pub(crate) fn system_owner(&self) -> OwnerId {
        self.inner.system_owner
    }

    pub(crate) fn register(
        &self,
        priority: i32,
        id: Option<&str>,
    ) -> Result<Option<Arc<Registration>>, ConfigurationError> {
        self.inner.state.lock().registry.register(priority, id)
    }

    /// Accepts a finished record: places it, writes it, repaints when the
    /// placement demands it. Never fails; sink errors are best-effort.
    pub(crate) fn emit(&self, record: Record) {
        let mut state = self.inner.state.lock();
        if record.debug_pinned() {
            // Append-only and permanent; exempt from ordering, repaint,
            // clears, and suppression alike.
            let _ = self
                .inner
                .sink
                .write(record.stream(), &terminated(record.text()));
            state.debug_log.push(record);
            return;
        }
        if !self.inner.sink.is_interactive() {
            // Flushed output can't be rewritten; buffer only for clear's
            // bookkeeping.
            self.write_record(&record);
            state.buffer.append_unordered(record);
            return;
        }
        match state.buffer.insert(record) {
            Insertion::Append => {
                if let Some(appended) = state.buffer.iter().last() {
                    self.write_record(appended);
                }
            }
            Insertion::Reordered => self.repaint_locked(&state),
        }
    }

    /// Deletes an owner's live records and restores the terminal.
    pub(crate) fn clear_owner(&self, owner: OwnerId) {
        let mut state = self.inner.state.lock();
        state.buffer.remove_owner(owner);
        if !self.inner.sink.is_interactive() {
            return;
        }
        let _ = self.inner.sink.clear();
        if !state.buffer.is_empty() {
            self.rewrite_locked(&state);
        }
    }

    fn repaint_locked(&self, state: &SharedState) {
        let _ = self.inner.sink.clear();
        self.rewrite_locked(state);
    }

    fn rewrite_locked(&self, state: &SharedState) {
        for record in state.buffer.iter() {
            self.write_record(record);
        }
    }

    fn write_record(&self, record: &Record) {
        if self.inner.silent && record.priority() >= 0 {
            return;
        }
        let _ = self
            .inner
            .sink
            .write(record.stream(), &terminated(record.text()));
    }

    /// Snapshot of the live ordered buffer, in display order.
    pub fn live_records(&self) -> Vec<Record> {
        self.inner.state.lock().buffer.to_vec()
    }

    /// Snapshot of the append-only debug-pinned log, in emission order.
    pub fn debug_records(&self) -> Vec<Record> {
        self.inner.state.lock().debug_log.clone()
    }
}

fn terminated(text: &str) -> String {
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push('\n');
    line
}

/*
Boilerplate notes for Context.

Clone: a handle type; clones share state by design.
Default: the terminal-backed configuration, same as global() builds.
PartialEq: identity comparison of contexts could use Arc::ptr_eq, but
nothing needs it; omitted.
Send/Sync: automatic through Arc + Mutex. Emitters hold the lock across
mutation plus terminal I/O as one unit.
*/
