// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
The console instance: the public face of the crate.

A [`Console`] is one independently configured logger. It owns its mode
flags, group depth, timers, and counters. Everything shared (the ordered
buffer, the registry, the terminal) lives in the [`Context`] it was built
against. Emitters render their line once, wrap it in a record, and hand it
to the context, which decides between the append fast path and a repaint.

```rust
use interlog::{Console, values};

let console = Console::new();
console.log(&values!["starting", 3, "workers"]);
console.success(&values!["ready"]);
```

Multiple consoles interleave by priority, not emission time:

```rust
use interlog::{Console, Context, InMemorySink, values};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let context = Context::new(sink.clone());
let progress = Console::builder()
    .context(context.clone())
    .colors(false).date(false)
    .build().unwrap();
let status = Console::builder()
    .context(context.clone())
    .priority(5)
    .colors(false).date(false)
    .build().unwrap();

progress.log(&values!["step 1"]);
status.log(&values!["RUNNING"]);
progress.log(&values!["step 2"]);
// The status banner stays last: priority 5 sorts after priority 0.
assert_eq!(sink.lines(), vec!["step 1", "step 2", "RUNNING"]);
```
*/

use crate::ansi;
use crate::context::{Context, SYSTEM_PRIORITY};
use crate::errors::ConfigurationError;
use crate::formatter::{LinePlan, format_line};
use crate::kind::Kind;
use crate::record::Record;
use crate::registry::{OwnerId, Registration, next_owner_id};
use crate::sink::Sink;
use crate::timers::{CounterStore, TimerStart, TimerStore};
use crate::value::Value;
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads a boolean-ish environment flag the way a shell user would set it:
/// any non-empty value other than "0" or "false" counts as on.
pub(crate) fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => !value.is_empty() && value != "0" && value != "false",
        Err(_) => false,
    }
}

/// One independently configured logger instance.
///
/// Construction is the only fallible moment (see [`ConsoleBuilder::build`]);
/// every emitter afterwards is infallible and non-panicking by design.
#[derive(Debug)]
pub struct Console {
    context: Context,
    owner: OwnerId,
    priority: i32,
    /// Keeps our explicit id claimed in the registry for as long as we live.
    _registration: Option<Arc<Registration>>,
    /// When set, output bypasses the shared ordered buffer entirely and
    /// appends through this sink alone.
    sink_override: Option<Arc<dyn Sink>>,
    date: bool,
    debug: bool,
    trace: bool,
    colors: bool,
    groups: usize,
    timers: TimerStore,
    counts: CounterStore,
}

/// Options for building a [`Console`]. Unset flags resolve from the
/// environment at [`build`](ConsoleBuilder::build) time.
#[derive(Debug, Default)]
pub struct ConsoleBuilder {
    context: Option<Context>,
    priority: i32,
    id: Option<String>,
    date: Option<bool>,
    debug: Option<bool>,
    trace: Option<bool>,
    colors: Option<bool>,
    sink: Option<Arc<dyn Sink>>,
}

impl ConsoleBuilder {
    /// The context to share output with. Defaults to [`Context::global`].
    pub fn context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Vertical position among interleaved output; higher sorts later.
    /// Must be zero or positive. Defaults to 0.
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// A human-readable id, unique among live consoles in the context.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether lines carry a wall-clock timestamp bracket. Defaults on.
    pub fn date(mut self, date: bool) -> Self {
        self.date = Some(date);
        self
    }

    /// Debug mode: output is append-only and permanent, never repainted or
    /// removed. Defaults to the `INTERLOG_DEBUG` environment flag.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Trace mode: every line carries a call stack. Defaults to the
    /// `INTERLOG_TRACE` environment flag.
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Whether ANSI codes are emitted. Defaults to colors-on when the sink
    /// is interactive and `NO_COLOR` is unset.
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    /// A private sink for this console alone. Output through it is
    /// append-only and does not participate in shared interleaving.
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validates identity and priority against the context and builds the
    /// console.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NegativePriority`] for a priority below zero,
    /// [`ConfigurationError::DuplicateId`] when the id is already held by a
    /// live console.
    pub fn build(self) -> Result<Console, ConfigurationError> {
        let context = self.context.unwrap_or_else(Context::global);
        let registration = context.register(self.priority, self.id.as_deref())?;
        let interactive = self
            .sink
            .as_ref()
            .map(|sink| sink.is_interactive())
            .unwrap_or_else(|| context.sink().is_interactive());
        Ok(Console {
            owner: next_owner_id(),
            priority: self.priority,
            _registration: registration,
            sink_override: self.sink,
            date: self.date.unwrap_or(true),
            debug: self.debug.unwrap_or_else(|| env_flag("INTERLOG_DEBUG")),
            trace: self.trace.unwrap_or_else(|| env_flag("INTERLOG_TRACE")),
            colors: self
                .colors
                .unwrap_or_else(|| interactive && !env_flag("NO_COLOR")),
            groups: 0,
            timers: TimerStore::default(),
            counts: CounterStore::default(),
            context,
        })
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// A default console on the global context: priority 0, no id.
    ///
    /// This configuration cannot violate any registration rule, so unlike
    /// [`ConsoleBuilder::build`] it is infallible.
    pub fn new() -> Self {
        let context = Context::global();
        let interactive = context.sink().is_interactive();
        Self {
            owner: next_owner_id(),
            priority: 0,
            _registration: None,
            sink_override: None,
            date: true,
            debug: env_flag("INTERLOG_DEBUG"),
            trace: env_flag("INTERLOG_TRACE"),
            colors: interactive && !env_flag("NO_COLOR"),
            groups: 0,
            timers: TimerStore::default(),
            counts: CounterStore::default(),
            context,
        }
    }

    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    pub(crate) fn system(context: Context) -> Self {
        let interactive = context.sink().is_interactive();
        Self {
            owner: context.system_owner(),
            priority: SYSTEM_PRIORITY,
            _registration: None,
            sink_override: None,
            date: false,
            debug: env_flag("INTERLOG_DEBUG"),
            trace: env_flag("INTERLOG_TRACE"),
            colors: interactive && !env_flag("NO_COLOR"),
            groups: 0,
            timers: TimerStore::default(),
            counts: CounterStore::default(),
            context,
        }
    }

    /// This console's ordering priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The context this console shares output with.
    pub fn context(&self) -> &Context {
        &self.context
    }

    // Emitters. Each renders once, then hands the record off; none of them
    // can fail or panic.

    /// Ordinary timestamped output.
    pub fn log(&self, values: &[Value]) {
        self.apply(Kind::Log, values, true, false);
    }

    /// Informational output, cyan.
    pub fn info(&self, values: &[Value]) {
        self.apply(Kind::Info, values, true, false);
    }

    /// A suspicious condition, yellow.
    pub fn warn(&self, values: &[Value]) {
        self.apply(Kind::Warn, values, true, false);
    }

    /// A runtime error, red, routed to stderr.
    pub fn error(&self, values: &[Value]) {
        self.apply(Kind::Error, values, true, false);
    }

    /// Something completed happily, green.
    pub fn success(&self, values: &[Value]) {
        self.apply(Kind::Success, values, true, false);
    }

    /// Attention-grabbing output, bright, no timestamp.
    pub fn announce(&self, values: &[Value]) {
        self.apply(Kind::Announce, values, false, false);
    }

    /// Print-style debugging output.
    pub fn debug(&self, values: &[Value]) {
        self.apply(Kind::Debug, values, true, false);
    }

    /// Output with an attached call stack, captured here and filtered of
    /// this crate's own frames.
    pub fn trace(&self, values: &[Value]) {
        self.apply(Kind::Trace, values, true, true);
    }

    /// Checks a condition and always emits, prefixing "Assertion passed"
    /// (green) or "Assertion failed" (red).
    pub fn assert(&self, condition: bool, values: &[Value]) {
        let verdict = if condition {
            self.styled("Assertion passed", ansi::GREEN)
        } else {
            self.styled("Assertion failed", ansi::RED)
        };
        let mut line = Vec::with_capacity(values.len() + 1);
        line.push(Value::Str(verdict));
        line.extend_from_slice(values);
        self.apply(Kind::Assert, &line, false, false);
    }

    /// Raw output: no timestamp, no color.
    pub fn print(&self, values: &[Value]) {
        self.apply(Kind::Print, values, false, false);
    }

    /// Emits one empty line.
    pub fn println(&self) {
        self.apply(Kind::Print, &[Value::Str(String::new())], false, false);
    }

    /// Renders one structured value.
    pub fn dir(&self, value: Value) {
        self.apply(Kind::Print, &[value], false, false);
    }

    /// Renders one structured value. Alias of [`dir`](Console::dir) for
    /// drop-in compatibility.
    pub fn dirxml(&self, value: Value) {
        self.apply(Kind::Print, &[value], false, false);
    }

    // Grouping.

    /// Opens a group: emits the header (if any values) and indents
    /// subsequent lines one tab deeper.
    pub fn group(&mut self, values: &[Value]) {
        if !values.is_empty() {
            self.apply(Kind::Log, values, false, false);
        }
        self.groups += 1;
    }

    /// Identical to [`group`](Console::group); terminals have no collapsed
    /// rendering.
    pub fn group_collapsed(&mut self, values: &[Value]) {
        self.group(values);
    }

    /// Closes the innermost group. Silent no-op at depth 0.
    pub fn group_end(&mut self) {
        self.groups = self.groups.saturating_sub(1);
    }

    // Counters.

    /// Emits `key: <n>`, counting from 0. The empty key is a valid counter.
    pub fn count(&mut self, key: &str) {
        let count = self.counts.next(key);
        let line = [Value::Str(format!("{}: {}", key, count))];
        self.apply(Kind::Count, &line, true, false);
    }

    /// Resets the counter to 0 without emitting.
    pub fn count_reset(&mut self, key: &str) {
        self.counts.reset(key);
    }

    // Timers.

    /// Starts a named timer. Starting a key that is already running warns
    /// and leaves the original untouched unless `force` is set, which
    /// resets silently.
    pub fn time(&mut self, key: &str, force: bool) {
        if self.timers.start(key, force) == TimerStart::AlreadyRunning {
            let warning = [Value::Str(format!("{} already exists.", key))];
            self.apply(Kind::Warn, &warning, true, false);
        }
    }

    /// Stops a timer, emitting its final reading unless `print` is false.
    /// Silent no-op for a key that isn't running.
    pub fn time_end(&mut self, key: &str, print: bool) {
        if self.timers.elapsed(key).is_none() {
            return;
        }
        if print {
            self.time_stamp(key);
        }
        self.timers.stop(key);
    }

    /// Emits the values plus the timer's current reading, leaving the timer
    /// running. Silent no-op for a key that isn't running.
    pub fn time_log(&mut self, key: &str, values: &[Value]) {
        let Some(elapsed) = self.timers.elapsed(key) else {
            return;
        };
        let mut line = Vec::with_capacity(values.len() + 1);
        line.extend_from_slice(values);
        line.push(Value::Str(self.elapsed_suffix(elapsed)));
        self.apply(Kind::TimeLog, &line, true, false);
    }

    /// Emits `key (<elapsed>s)` styled like a warning, leaving the timer
    /// running. Silent no-op for a key that isn't running.
    pub fn time_stamp(&self, key: &str) {
        let Some(elapsed) = self.timers.elapsed(key) else {
            return;
        };
        let line = [Value::Str(format!(
            "{} {}",
            key,
            self.elapsed_suffix(elapsed)
        ))];
        self.apply(Kind::TimeStamp, &line, true, false);
    }

    /// Starts a profile measurement. Same store and rules as
    /// [`time`](Console::time).
    pub fn profile(&mut self, key: &str, force: bool) {
        self.time(key, force);
    }

    /// Ends a profile measurement, emitting its reading.
    pub fn profile_end(&mut self, key: &str) {
        self.time_end(key, true);
    }

    // The terminal.

    /// Deletes this console's live lines and restores everyone else's.
    ///
    /// Clearing twice in a row is idempotent. In debug mode this is a
    /// no-op: pinned output is permanent.
    pub fn clear(&self) {
        if self.debug {
            return;
        }
        if let Some(sink) = &self.sink_override {
            let _ = sink.clear();
            return;
        }
        self.context.clear_owner(self.owner);
    }

    /// Renders rows as a tab-separated grid with a synthesized `(index)`
    /// column. Record rows take their columns from the first row's fields
    /// (or from `columns` when given); scalar rows render under a single
    /// `Values` column. Missing fields render empty. Empty input emits
    /// nothing.
    pub fn table(&self, rows: &[Value], columns: Option<&[&str]>) {
        if rows.is_empty() {
            return;
        }
        let headers: Vec<String> = match columns {
            Some(columns) => columns.iter().map(|c| c.to_string()).collect(),
            None => match &rows[0] {
                Value::Record(fields) => {
                    fields.borrow().iter().map(|(name, _)| name.clone()).collect()
                }
                _ => vec!["Values".to_string()],
            },
        };
        let mut grid = String::from("(index)");
        for header in &headers {
            grid.push('\t');
            grid.push_str(header);
        }
        for (index, row) in rows.iter().enumerate() {
            grid.push('\n');
            grid.push_str(&index.to_string());
            match row {
                Value::Record(fields) => {
                    let fields = fields.borrow();
                    for header in &headers {
                        grid.push('\t');
                        if let Some((_, value)) =
                            fields.iter().find(|(name, _)| name == header)
                        {
                            grid.push_str(&value.to_string());
                        }
                    }
                }
                scalar => {
                    grid.push('\t');
                    grid.push_str(&scalar.to_string());
                }
            }
        }
        self.apply(Kind::Log, &[Value::Str(grid)], false, false);
    }

    // Internals.

    fn apply(&self, kind: Kind, values: &[Value], timestamped: bool, trace: bool) {
        if values.is_empty() {
            return;
        }
        let timestamp = (self.date && timestamped)
            .then(|| chrono::Local::now().format(TIMESTAMP_FORMAT).to_string());
        let text = format_line(&LinePlan {
            values,
            group_depth: self.groups,
            color: kind.color(),
            colors: self.colors,
            timestamp,
            trace: trace || self.trace,
        });
        let record = Record::new(
            self.owner,
            self.priority,
            self.context.next_sequence(),
            kind,
            kind.stream(),
            text,
            self.debug,
        );
        match &self.sink_override {
            Some(sink) => {
                // Private sinks are append-only streams outside the shared
                // ordering; the record never enters the buffer.
                let mut line = String::with_capacity(record.text().len() + 1);
                line.push_str(record.text());
                line.push('\n');
                let _ = sink.write(record.stream(), &line);
            }
            None => self.context.emit(record),
        }
    }

    fn styled(&self, text: &str, color: &'static str) -> String {
        if self.colors {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn elapsed_suffix(&self, elapsed: f64) -> String {
        if self.colors {
            format!("{}{}({:.3}s)", ansi::RESET, ansi::DIM, elapsed)
        } else {
            format!("({:.3}s)", elapsed)
        }
    }
}

impl Context {
    /// A handle to this context's system console: sentinel priority below
    /// every user instance, timestamps off, exempt from output suppression.
    /// All handles share one identity, so clearing any of them clears the
    /// system lines.
    pub fn system(&self) -> Console {
        Console::system(self.clone())
    }
}
