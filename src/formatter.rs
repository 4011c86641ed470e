// SPDX-License-Identifier: MIT OR Apache-2.0

//! The pure line renderer.
//!
//! Rendering happens exactly once, at emission time. A repaint replays
//! finished text; it never re-enters this module. That is what keeps repaint
//! cheap and what guarantees a line looks the same no matter how many times
//! the terminal is redrawn.
//!
//! Line shape, in order: one tab per open group, the dim `[timestamp]`
//! bracket (bracket always, codes only when colors are on), the kind's color
//! code, the values joined by single spaces, the filtered call stack when
//! trace applies, and a trailing reset.

use crate::ansi;
use crate::value::Value;
use std::backtrace::Backtrace;
use std::fmt::Write as _;

pub(crate) struct LinePlan<'a> {
    pub values: &'a [Value],
    pub group_depth: usize,
    pub color: Option<&'static str>,
    pub colors: bool,
    /// Preformatted wall-clock text, when the operation carries one.
    pub timestamp: Option<String>,
    pub trace: bool,
}

pub(crate) fn format_line(plan: &LinePlan) -> String {
    let mut line = String::new();
    for _ in 0..plan.group_depth {
        line.push('\t');
    }
    if let Some(timestamp) = &plan.timestamp {
        if plan.colors {
            line.push_str(ansi::DIM);
        }
        line.push('[');
        line.push_str(timestamp);
        line.push(']');
        if plan.colors {
            // Close the dim bracket by switching straight into the kind's
            // color, or back to neutral when the kind has none.
            line.push_str(plan.color.unwrap_or(ansi::RESET));
        }
        line.push(' ');
    } else if plan.colors {
        if let Some(color) = plan.color {
            line.push_str(color);
        }
    }
    for (i, value) in plan.values.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{}", value);
    }
    if plan.trace {
        append_call_stack(&mut line);
    }
    if plan.colors {
        line.push_str(ansi::RESET);
    }
    line
}

/// Appends the captured call stack, dropping this crate's own frames.
///
/// A frame renders as a symbol line plus an indented location line, so
/// skipping a frame means skipping its location too.
fn append_call_stack(line: &mut String) {
    let captured = Backtrace::force_capture().to_string();
    let mut skipping = false;
    for frame_line in captured.lines() {
        let is_location = frame_line.trim_start().starts_with("at ");
        if is_location {
            if skipping {
                continue;
            }
        } else {
            skipping = frame_line.contains("interlog");
            if skipping {
                continue;
            }
        }
        line.push('\n');
        line.push_str(frame_line);
    }
}
