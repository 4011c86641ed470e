// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-instance named timers and counters.
//!
//! Both stores are plain maps owned by their console; nothing here touches
//! the shared context. Elapsed time is a floating-point difference in
//! seconds against a monotonic start instant; turning that into display
//! text is the formatter's concern.

use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerStart {
    Started,
    /// The key already had a running timer and `force` was not set; the
    /// original timer is untouched.
    AlreadyRunning,
}

#[derive(Debug, Default)]
pub(crate) struct TimerStore {
    timers: HashMap<String, Instant>,
}

impl TimerStore {
    pub fn start(&mut self, key: &str, force: bool) -> TimerStart {
        if !force && self.timers.contains_key(key) {
            return TimerStart::AlreadyRunning;
        }
        self.timers.insert(key.to_string(), Instant::now());
        TimerStart::Started
    }

    /// Seconds since the timer started, or `None` when it isn't running.
    pub fn elapsed(&self, key: &str) -> Option<f64> {
        self.timers.get(key).map(|start| start.elapsed().as_secs_f64())
    }

    /// Deletes the timer, returning its final reading.
    pub fn stop(&mut self, key: &str) -> Option<f64> {
        self.timers
            .remove(key)
            .map(|start| start.elapsed().as_secs_f64())
    }
}

#[derive(Debug, Default)]
pub(crate) struct CounterStore {
    counts: HashMap<String, u64>,
}

impl CounterStore {
    /// The value to display for this tick; starts at 0 and increments after
    /// each read.
    pub fn next(&mut self, key: &str) -> u64 {
        let count = self.counts.entry(key.to_string()).or_insert(0);
        let current = *count;
        *count += 1;
        current
    }

    /// Back to 0 without emitting. An unknown key is simply initialized.
    pub fn reset(&mut self, key: &str) {
        self.counts.insert(key.to_string(), 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_increments() {
        let mut counts = CounterStore::default();
        assert_eq!(counts.next("hits"), 0);
        assert_eq!(counts.next("hits"), 1);
        assert_eq!(counts.next("hits"), 2);
    }

    #[test]
    fn counter_reset_restarts_from_zero() {
        let mut counts = CounterStore::default();
        counts.next("hits");
        counts.next("hits");
        counts.reset("hits");
        assert_eq!(counts.next("hits"), 0);
    }

    #[test]
    fn reset_of_unknown_counter_initializes_it() {
        let mut counts = CounterStore::default();
        counts.reset("fresh");
        assert_eq!(counts.next("fresh"), 0);
    }

    #[test]
    fn timer_round_trip_is_nonnegative_and_small() {
        let mut timers = TimerStore::default();
        assert_eq!(timers.start("x", false), TimerStart::Started);
        let elapsed = timers.stop("x").unwrap();
        assert!(elapsed >= 0.0);
        assert!(elapsed < 1.0);
    }

    #[test]
    fn second_stop_is_a_no_op() {
        let mut timers = TimerStore::default();
        timers.start("x", false);
        assert!(timers.stop("x").is_some());
        assert!(timers.stop("x").is_none());
    }

    #[test]
    fn duplicate_start_without_force_keeps_the_original() {
        let mut timers = TimerStore::default();
        timers.start("x", false);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let before = timers.elapsed("x").unwrap();
        assert_eq!(timers.start("x", false), TimerStart::AlreadyRunning);
        let after = timers.elapsed("x").unwrap();
        assert!(after >= before);
    }

    #[test]
    fn forced_start_resets_silently() {
        let mut timers = TimerStore::default();
        timers.start("x", false);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(timers.start("x", true), TimerStart::Started);
        let elapsed = timers.elapsed("x").unwrap();
        assert!(elapsed < 0.005);
    }

    #[test]
    fn elapsed_on_unknown_key_is_none() {
        let timers = TimerStore::default();
        assert!(timers.elapsed("missing").is_none());
    }
}
