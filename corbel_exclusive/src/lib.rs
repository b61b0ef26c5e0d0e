// Copyright 2026 the Corbel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corbel_exclusive --heading-base-level=0

//! Corbel Exclusive: a shared active-owner register.
//!
//! Some floating elements are mutually exclusive: a menu bar wants at most
//! one dropdown open at a time, a toolbar at most one flyout. This crate
//! provides the coordination point as a plain value — a register mapping
//! each scope to its single current owner. Any component claiming a scope
//! evicts the previous owner; the caller closes the evicted panel.
//!
//! The register is passed around as an explicit dependency. There is no
//! global instance and no interior mutability; hosts own it wherever they
//! own the rest of their UI state.
//!
//! ## Minimal example
//!
//! ```rust
//! use corbel_exclusive::OwnerRegister;
//!
//! // One scope per menu bar, one owner per open dropdown.
//! let mut register: OwnerRegister<&str, u32> = OwnerRegister::new();
//!
//! assert_eq!(register.claim("menubar", 1), None);
//! assert_eq!(register.owner_of(&"menubar"), Some(&1));
//!
//! // Opening another dropdown evicts the first; close it in response.
//! assert_eq!(register.claim("menubar", 2), Some(1));
//!
//! // Only the current owner can release the scope.
//! assert!(!register.release(&"menubar", &1));
//! assert!(register.release(&"menubar", &2));
//! assert_eq!(register.owner_of(&"menubar"), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

use core::hash::Hash;

use hashbrown::HashMap;

/// Maps each scope to the single component currently owning it.
///
/// `S` identifies a group of mutually exclusive elements (a menu bar, a
/// toolbar); `K` identifies one element within it. Both are application
/// types; the register imposes nothing beyond `Eq + Hash`.
#[derive(Clone, Debug)]
pub struct OwnerRegister<S, K> {
    owners: HashMap<S, K>,
}

impl<S, K> Default for OwnerRegister<S, K> {
    fn default() -> Self {
        Self {
            owners: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash, K: Eq> OwnerRegister<S, K> {
    /// Creates an empty register.
    #[must_use]
    pub fn new() -> Self {
        Self {
            owners: HashMap::new(),
        }
    }

    /// Claims `scope` for `owner`, returning the evicted previous owner.
    ///
    /// Re-claiming a scope already owned by `owner` is a no-op returning
    /// `None`; the caller only ever has to close what actually got evicted.
    pub fn claim(&mut self, scope: S, owner: K) -> Option<K> {
        if self.owners.get(&scope).is_some_and(|current| *current == owner) {
            return None;
        }
        self.owners.insert(scope, owner)
    }

    /// Releases `scope`, but only if `owner` still holds it.
    ///
    /// Returns `true` when the scope was released. A release from an evicted
    /// owner is stale and leaves the current owner in place.
    pub fn release(&mut self, scope: &S, owner: &K) -> bool {
        if self.owners.get(scope) == Some(owner) {
            self.owners.remove(scope);
            true
        } else {
            false
        }
    }

    /// Returns the current owner of `scope`, if any.
    #[must_use]
    pub fn owner_of(&self, scope: &S) -> Option<&K> {
        self.owners.get(scope)
    }

    /// Returns `true` if `owner` currently holds `scope`.
    #[must_use]
    pub fn is_owner(&self, scope: &S, owner: &K) -> bool {
        self.owners.get(scope) == Some(owner)
    }

    /// Number of scopes with a current owner.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns `true` if no scope is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Drops all ownerships.
    pub fn clear(&mut self) {
        self.owners.clear();
    }
}
