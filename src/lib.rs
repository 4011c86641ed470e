//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# interlog

interlog is an interleaved console logging library for Rust.

# Development status

interlog is experimental and the API may change.

# The problem

A terminal is a shared, append-only surface, and the standard logging story
assumes exactly one author. The moment two independent parts of a program
each want their own region of output (say, a progress reporter that should
stay above a pinned status banner), append-only breaks down: whoever writes
last wins, and clearing one component's output takes everyone else's with
it.

interlog gives each component its own [`Console`] with a fixed integer
priority. Every emitted line is buffered with its owner and priority, and
the library guarantees the terminal always shows all live lines sorted by
priority first and emission order second:

* sequential logging from one console is a **pure append**: a single write
  with no clearing, exactly what a plain `println!` would have cost;
* a line that belongs *above* already-painted output triggers a **repaint**:
  clear the terminal once, replay every live line in order;
* a console's [`clear`](Console::clear) removes exactly its own lines and
  repaints the rest, untouched and in order.

Lines are rendered once, at emission time. A repaint replays finished text,
so redrawing is cheap and deterministic.

# The API

```rust
use interlog::{Console, values};

let console = Console::new();
console.info(&values!["starting", 3, "workers"]);
console.warn(&values!["low disk space"]);
console.success(&values!["done"]);
```

The usual console surface is all here: `log`/`info`/`warn`/`error`/
`success`/`announce`/`debug`/`trace`/`assert`/`print`/`println`/`dir`/
`dirxml`, groups with tab indentation, named counters, named timers and
profiles, and `table`. Structured arguments go through [`Value`], a tagged
model whose compound nodes are shared and may legally form cycles: rendering
is cycle-safe and omits repeated references rather than erroring.

# Interleaving

```rust
use interlog::{Console, Context, InMemorySink, values};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let context = Context::new(sink.clone());

let worker = Console::builder()
    .context(context.clone())
    .colors(false).date(false)
    .build().unwrap();
let banner = Console::builder()
    .context(context.clone())
    .priority(10)
    .colors(false).date(false)
    .build().unwrap();

worker.log(&values!["step 1"]);
banner.log(&values!["== RUNNING =="]);
worker.log(&values!["step 2"]);

// The banner keeps its place below the worker's lines, no matter when it
// was emitted.
assert_eq!(sink.lines(), vec!["step 1", "step 2", "== RUNNING =="]);
```

# Modes

A console in **debug mode** writes immediately and permanently. Its lines
never enter the ordered buffer, so no repaint or clear can touch them.
That is the right behavior for CI logs and anywhere else rewriting output
would be garbage. The same append-only degradation applies automatically
whenever the sink is not an interactive terminal.

**Trace mode** attaches a call stack, with this crate's own frames filtered
out, to every line.

# Sinks and testing

Output goes through the [`Sink`] seam. The default is the process terminal;
[`InMemorySink`] captures output for tests, and a fresh [`Context`] per test
keeps buffers independent:

```rust
use interlog::{Console, Context, InMemorySink, values};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let context = Context::new(sink.clone());
let console = Console::builder()
    .context(context)
    .colors(false).date(false)
    .build().unwrap();

console.log(&values!["captured"]);
assert_eq!(sink.lines(), vec!["captured"]);
```

Runtime emission never fails and never panics: sink errors are best-effort
and a failed terminal clear leaves the engine running append-only. The
single fallible moment is construction, which rejects negative priorities
and duplicate ids with [`ConfigurationError`].
*/

pub mod ansi;
mod buffer;
mod console;
mod context;
mod errors;
mod formatter;
mod kind;
mod record;
mod registry;
mod sink;
mod timers;
mod value;

pub use console::{Console, ConsoleBuilder};
pub use context::Context;
pub use errors::ConfigurationError;
pub use kind::Kind;
pub use record::Record;
pub use registry::OwnerId;
pub use sink::{InMemorySink, Sink, Stream, TerminalSink};
pub use value::Value;
