// SPDX-License-Identifier: MIT OR Apache-2.0

//! The output seam: where rendered lines leave the crate.
//!
//! A [`Sink`] is the whole terminal from this crate's point of view: an
//! append primitive, a best-effort clear primitive, and the question of
//! whether anyone is looking. Interactive sinks get the ordered repaint
//! treatment;
//! non-interactive sinks receive a plain append stream, because flushed
//! output cannot be rewritten.
//!
//! [`TerminalSink`] is the default, writing to the process stdout/stderr.
//! [`InMemorySink`] captures everything for tests and for environments
//! where the real streams are unavailable.

use parking_lot::Mutex;
use std::fmt::Debug;
use std::io;
use std::io::Write as _;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Which output stream a line routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Out,
    Err,
}

/// An output destination for rendered lines.
///
/// All three operations are best-effort from the engine's point of view: a
/// sink that fails to write or clear must not take the logging facility
/// down with it, so the engine discards sink errors after the call.
pub trait Sink: Debug + Send + Sync {
    /// Appends text to the stream. The engine includes line terminators.
    fn write(&self, stream: Stream, text: &str) -> io::Result<()>;

    /// Best-effort clear of the viewport. A sink with nothing clearable
    /// may do nothing and report success.
    fn clear(&self) -> io::Result<()>;

    /// Whether output lands somewhere that can be repainted. Gates the
    /// entire ordered-repaint machinery.
    fn is_interactive(&self) -> bool;
}

/// The reference sink: process stdout/stderr, cleared through the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TerminalSink {}

impl TerminalSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for TerminalSink {
    fn write(&self, stream: Stream, text: &str) -> io::Result<()> {
        match stream {
            Stream::Out => {
                let mut lock = io::stdout().lock();
                lock.write_all(text.as_bytes())?;
                lock.flush()
            }
            Stream::Err => {
                let mut lock = io::stderr().lock();
                lock.write_all(text.as_bytes())?;
                lock.flush()
            }
        }
    }

    fn clear(&self) -> io::Result<()> {
        use crossterm::ExecutableCommand;
        use crossterm::cursor::MoveTo;
        use crossterm::terminal::{Clear, ClearType};
        let mut stdout = io::stdout();
        stdout.execute(Clear(ClearType::All))?.execute(MoveTo(0, 0))?;
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        use crossterm::tty::IsTty;
        io::stdout().is_tty()
    }
}

/// A sink that stores lines in memory.
///
/// Useful for unit-testing code that logs, and for examining output
/// programmatically. By default it reports itself interactive so the
/// ordered-repaint machinery is exercised; [`InMemorySink::non_interactive`]
/// builds one that behaves like a redirected stream instead.
///
/// `clear` wipes the captured lines, so the capture always mirrors what a
/// terminal viewport would show.
///
/// # Example
///
/// ```rust
/// use interlog::{Console, Context, InMemorySink, values};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let context = Context::new(sink.clone());
/// let console = Console::builder()
///     .context(context)
///     .colors(false)
///     .date(false)
///     .build()
///     .unwrap();
///
/// console.log(&values!["hello", 42]);
/// assert_eq!(sink.lines(), vec!["hello 42"]);
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    lines: Mutex<Vec<(Stream, String)>>,
    clears: AtomicUsize,
    interactive: bool,
}

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    /// An interactive capture: repaints apply, `clear` wipes it.
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            clears: AtomicUsize::new(0),
            interactive: true,
        }
    }

    /// A capture that behaves like a redirected stream: never repainted,
    /// never cleared.
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            ..Self::new()
        }
    }

    /// The currently visible lines, in order, trailing terminators trimmed.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .map(|(_, text)| text.trim_end_matches('\n').to_string())
            .collect()
    }

    /// Visible lines routed to the given stream only.
    pub fn lines_on(&self, stream: Stream) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, text)| text.trim_end_matches('\n').to_string())
            .collect()
    }

    /// Drains the raw captured bytes into one string, clearing the capture.
    pub fn drain(&self) -> String {
        let mut lines = self.lines.lock();
        let result = lines.iter().map(|(_, text)| text.as_str()).collect();
        lines.clear();
        result
    }

    /// How many times the viewport was cleared. A pure-append workload
    /// leaves this at zero.
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::Relaxed)
    }
}

impl Sink for InMemorySink {
    fn write(&self, stream: Stream, text: &str) -> io::Result<()> {
        self.lines.lock().push((stream, text.to_string()));
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        self.clears.fetch_add(1, Ordering::Relaxed);
        self.lines.lock().clear();
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/*
Boilerplate notes.

Sink is Debug + Send + Sync like any type that crosses the shared context.
Clone on Sink makes no sense; sinks typically hold unique resources.
TerminalSink is zero-sized, so Copy/PartialEq/Eq/Hash/Default all come for
free and are harmless.
InMemorySink: Clone not implemented (the capture is the resource);
Default delegates to new() for the obvious zero value.
*/
