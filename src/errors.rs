// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Invalid instance identity or priority at construction time.
///
/// This is the only error surface in the crate. Construction is the one
/// moment a caller can hand us something unusable; every runtime emission
/// operation afterwards is defined to never fail (a logging facility that
/// can crash the host program on a bad log call is a design failure).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Non-system consoles must sort at or after the zero priority.
    #[error("console priority must be zero or positive, got {0}")]
    NegativePriority(i32),
    /// An explicit id was supplied that a live console already holds.
    #[error("a console with id {0:?} is already registered")]
    DuplicateId(String),
}

/*
Boilerplate notes.

Clone/PartialEq: not implemented. Errors here are reported once and
destructured or displayed; nothing compares them.
non_exhaustive: construction may grow new ways to fail.
*/
