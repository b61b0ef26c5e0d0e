// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corbel_timing --heading-base-level=0

//! Corbel Timing: a host-agnostic, cancellable timer queue.
//!
//! UI interactions such as debounced hides need "run this a little later,
//! unless something cancels it first". This crate provides that as a plain
//! data structure with no clock of its own: the host feeds in monotonic
//! milliseconds (from its event loop, frame callback, or a mock in tests)
//! and drains expired entries when it pleases.
//!
//! - [`TimerQueue::schedule`] registers a deadline and returns a [`Ticket`].
//!   Tickets are unique and never reused, so a stale ticket held after a
//!   cancel-and-reschedule can never match a newer entry.
//! - [`TimerQueue::cancel`] removes a pending entry by ticket.
//! - [`TimerQueue::pop_expired`] yields due entries in deadline order
//!   (insertion order within equal deadlines).
//!
//! There is no threading and no suspension: every operation is synchronous
//! and runs to completion inside the caller's event dispatch.
//!
//! ## Minimal example
//!
//! ```rust
//! use corbel_timing::TimerQueue;
//!
//! let mut queue: TimerQueue<&str> = TimerQueue::new();
//!
//! // Schedule a debounced hide 150ms out, then a later cleanup.
//! let hide = queue.schedule(150, "hide");
//! let _sweep = queue.schedule(1000, "sweep");
//! assert_eq!(queue.next_deadline(), Some(150));
//!
//! // The pointer came back: cancel the hide before it fires.
//! assert!(queue.cancel(hide));
//!
//! // Time passes; only the cleanup fires.
//! assert_eq!(queue.pop_expired(100), None);
//! let (_, key) = queue.pop_expired(1000).unwrap();
//! assert_eq!(key, "sweep");
//! assert!(queue.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Handle to one scheduled entry in a [`TimerQueue`].
///
/// Tickets are handed out in strictly increasing order and are never reused,
/// even after the entry fires or is cancelled. Holding a stale ticket is
/// harmless: [`TimerQueue::cancel`] simply returns `false` for it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
struct Entry<K> {
    deadline: u64,
    ticket: Ticket,
    key: K,
}

/// A deadline-ordered queue of cancellable timers.
///
/// `K` is an application key carried alongside each entry, typically the
/// identifier of the component that scheduled it, so that a host draining
/// the queue can route the firing back to its owner.
///
/// Deadlines are caller-supplied monotonic milliseconds. The queue never
/// reads a clock; determinism in tests falls out of that for free.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    // Sorted by (deadline, ticket); ticket order doubles as insertion order.
    entries: Vec<Entry<K>>,
    next_ticket: u64,
}

impl<K> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_ticket: 0,
        }
    }

    /// Schedules `key` to fire at `deadline`, returning its [`Ticket`].
    ///
    /// Multiple entries may share a deadline; they fire in scheduling order.
    pub fn schedule(&mut self, deadline: u64, key: K) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        let at = self
            .entries
            .partition_point(|e| (e.deadline, e.ticket) < (deadline, ticket));
        self.entries.insert(
            at,
            Entry {
                deadline,
                ticket,
                key,
            },
        );
        ticket
    }

    /// Cancels the entry identified by `ticket`.
    ///
    /// Returns `true` if a pending entry was removed, `false` if the ticket
    /// was stale (already fired or cancelled).
    pub fn cancel(&mut self, ticket: Ticket) -> bool {
        match self.entries.iter().position(|e| e.ticket == ticket) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// Returns the earliest pending deadline, if any.
    ///
    /// Hosts use this to program their real timer source for the next wakeup.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|e| e.deadline)
    }

    /// Pops the next entry whose deadline is at or before `now`.
    ///
    /// Call in a loop to drain everything due at this instant. Entries come
    /// out in deadline order; entries sharing a deadline come out in the
    /// order they were scheduled.
    pub fn pop_expired(&mut self, now: u64) -> Option<(Ticket, K)> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.ticket, entry.key))
    }

    /// Number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all pending entries without firing them.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
