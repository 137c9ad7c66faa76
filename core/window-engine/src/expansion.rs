//! FILENAME: core/window-engine/src/expansion.rs
//! PURPOSE: Which groups are currently expanded.
//! CONTEXT: Owned by the view session, passed by reference to row-plan
//! builds. Every effective mutation bumps `version`, which is what the
//! row-plan cache keys on instead of comparing sets. Versions come from one
//! process-wide counter, so two states (clones included) that have diverged
//! never report the same version.

use std::sync::atomic::{AtomicU64, Ordering};

use dataset::GroupKey;
use rustc_hash::FxHashSet;

/// Source of expansion versions shared by every state in the process.
/// Zero is reserved for a state that has never been mutated.
static EXPANSION_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_version() -> u64 {
    EXPANSION_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Set of expanded group keys. Absent keys are collapsed.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: FxHashSet<GroupKey>,
    version: u64,
}

impl ExpansionState {
    /// All groups collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flips membership of `key`. Unknown keys are accepted; they simply
    /// never show up as a header in the row plan.
    pub fn toggle(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_string());
        }
        self.bump_version();
    }

    /// Returns true if the key was not already expanded.
    pub fn expand(&mut self, key: &str) -> bool {
        if self.expanded.contains(key) {
            return false;
        }
        self.expanded.insert(key.to_string());
        self.bump_version();
        true
    }

    /// Returns true if the key was expanded.
    pub fn collapse(&mut self, key: &str) -> bool {
        let removed = self.expanded.remove(key);
        if removed {
            self.bump_version();
        }
        removed
    }

    pub fn expand_all<'a, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut changed = false;
        for key in keys {
            if !self.expanded.contains(key) {
                self.expanded.insert(key.to_string());
                changed = true;
            }
        }
        if changed {
            self.bump_version();
        }
    }

    pub fn collapse_all(&mut self) {
        if !self.expanded.is_empty() {
            self.expanded.clear();
            self.bump_version();
        }
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Change stamp, unique across every state in the process. Zero means
    /// never mutated (and therefore nothing expanded).
    pub fn version(&self) -> u64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version = next_version();
    }
}
