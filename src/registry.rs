// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instance identity and registration rules.
//!
//! The registry validates priorities and enforces id uniqueness, and that is
//! all: ordering between instances is decided entirely by record priorities
//! in the buffer, never by registration order. There is no deregistration.
//! A console that exposes an id holds a liveness token; the registry keeps
//! only a weak reference to it and prunes dead entries lazily on the next
//! registration, so the registry never keeps an instance alive and a dropped
//! console's id becomes reusable on its own.

use crate::errors::ConfigurationError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one console instance.
///
/// Used only for ownership comparisons (whose records does a clear delete),
/// never for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(u64);

pub(crate) fn next_owner_id() -> OwnerId {
    OwnerId(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
}

/// Liveness token held by a console that registered an explicit id.
///
/// The registry watches it through a [`Weak`]; when the console drops, the
/// token drops, and the id frees up.
#[derive(Debug)]
pub(crate) struct Registration {
    _id: String,
}

#[derive(Debug, Default)]
pub(crate) struct Registry {
    entries: Vec<(String, Weak<Registration>)>,
}

impl Registry {
    /// Validates a non-system console's identity and claims its id, if any.
    ///
    /// Returns the liveness token to hand to the console when an id was
    /// claimed.
    pub fn register(
        &mut self,
        priority: i32,
        id: Option<&str>,
    ) -> Result<Option<Arc<Registration>>, ConfigurationError> {
        if priority < 0 {
            return Err(ConfigurationError::NegativePriority(priority));
        }
        let Some(id) = id else {
            return Ok(None);
        };
        self.entries.retain(|(_, alive)| alive.strong_count() > 0);
        if self.entries.iter().any(|(taken, _)| taken == id) {
            return Err(ConfigurationError::DuplicateId(id.to_string()));
        }
        let token = Arc::new(Registration {
            _id: id.to_string(),
        });
        self.entries.push((id.to_string(), Arc::downgrade(&token)));
        Ok(Some(token))
    }
}
