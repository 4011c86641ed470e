// SPDX-License-Identifier: MIT OR Apache-2.0

//! ANSI style code table.
//!
//! These are the raw escape sequences the formatter splices into rendered
//! lines. They are exposed so callers can build their own styled values
//! (for example, a custom prefix inside [`Console::assert`](crate::Console::assert)-style
//! output) without depending on a styling crate.
//!
//! Whether codes are emitted at all is a per-instance decision; see the
//! `colors` option on [`ConsoleBuilder`](crate::ConsoleBuilder).

/// Resets all styling.
pub const RESET: &str = "\x1b[0m";
/// Bright / bold text.
pub const BRIGHT: &str = "\x1b[1m";
/// Dim text. Used for timestamp brackets and elapsed-time suffixes.
pub const DIM: &str = "\x1b[2m";
/// Underlined text.
pub const UNDERSCORE: &str = "\x1b[4m";
/// Blinking text.
pub const BLINK: &str = "\x1b[5m";
/// Reversed foreground/background.
pub const REVERSE: &str = "\x1b[7m";

pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
