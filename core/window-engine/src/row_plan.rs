//! FILENAME: core/window-engine/src/row_plan.rs
//! Row Plan - Flattens the grouped, collapsible dataset into addressable rows.
//!
//! Algorithm:
//! 1. Walk groups in the index's first-seen order
//! 2. Emit one header row per group, snapshotting its expanded flag
//! 3. If expanded, emit the group's item rows right after the header
//!
//! Headers are always followed by their own items only, so a row's vertical
//! offset is pure index arithmetic. A plan is never patched in place: it is
//! rebuilt from (index, expansion) and memoized on their versions.

use std::sync::Arc;

use dataset::{GroupKey, RecordIndex};
use serde::Serialize;

use crate::expansion::ExpansionState;
use crate::group_index::GroupIndex;

// ============================================================================
// DISPLAY ROWS
// ============================================================================

/// One displayable row of the flattened table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DisplayRow {
    /// Group header. `expanded` is a snapshot taken at build time.
    #[serde(rename_all = "camelCase")]
    Group {
        key: GroupKey,
        expanded: bool,
        member_count: usize,
    },
    /// Member record of the preceding expanded group.
    #[serde(rename_all = "camelCase")]
    Item { record: RecordIndex },
}

impl DisplayRow {
    pub fn is_group(&self) -> bool {
        matches!(self, DisplayRow::Group { .. })
    }

    pub fn group_key(&self) -> Option<&str> {
        match self {
            DisplayRow::Group { key, .. } => Some(key),
            DisplayRow::Item { .. } => None,
        }
    }
}

// ============================================================================
// ROW PLAN
// ============================================================================

/// Ordered sequence of display rows derived from a group index and an
/// expansion snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowPlan {
    rows: Vec<DisplayRow>,
    expansion_version: u64,
    index_generation: u64,
}

impl RowPlan {
    /// Builds the plan. Cost is proportional to headers plus visible items.
    pub fn build(index: &GroupIndex, expansion: &ExpansionState) -> Self {
        let visible_items: usize = index
            .groups()
            .iter()
            .filter(|g| expansion.is_expanded(&g.key))
            .map(|g| g.len())
            .sum();

        let mut rows = Vec::with_capacity(index.group_count() + visible_items);

        for group in index.groups() {
            let expanded = expansion.is_expanded(&group.key);
            rows.push(DisplayRow::Group {
                key: group.key.clone(),
                expanded,
                member_count: group.len(),
            });

            if expanded {
                rows.extend(
                    group
                        .members
                        .iter()
                        .map(|&record| DisplayRow::Item { record }),
                );
            }
        }

        RowPlan {
            rows,
            expansion_version: expansion.version(),
            index_generation: 0,
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&DisplayRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DisplayRow> {
        self.rows.iter()
    }

    /// Position of the header row for `key`, if that group exists.
    pub fn header_position(&self, key: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.group_key() == Some(key))
    }

    /// Expansion version this plan was built from.
    pub fn expansion_version(&self) -> u64 {
        self.expansion_version
    }

    /// Generation of the group index this plan was built from. Plans built
    /// outside a `RowPlanCache` report 0.
    pub fn index_generation(&self) -> u64 {
        self.index_generation
    }
}

impl<'a> IntoIterator for &'a RowPlan {
    type Item = &'a DisplayRow;
    type IntoIter = std::slice::Iter<'a, DisplayRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

// ============================================================================
// MEMOIZATION
// ============================================================================

/// Memoizes the last built plan, keyed by index generation and expansion
/// version rather than by structural comparison.
#[derive(Debug, Default)]
pub struct RowPlanCache {
    cached: Option<CachedPlan>,
    builds: u64,
}

#[derive(Debug)]
struct CachedPlan {
    index_generation: u64,
    expansion_version: u64,
    plan: Arc<RowPlan>,
}

impl RowPlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached plan when neither input changed, else rebuilds.
    pub fn get_or_build(
        &mut self,
        index: &GroupIndex,
        index_generation: u64,
        expansion: &ExpansionState,
    ) -> Arc<RowPlan> {
        if let Some(cached) = &self.cached {
            if cached.index_generation == index_generation
                && cached.expansion_version == expansion.version()
            {
                crate::log_trace!(
                    "PLAN",
                    "cache hit gen={} ver={}",
                    index_generation,
                    expansion.version()
                );
                return Arc::clone(&cached.plan);
            }
        }

        let mut plan = RowPlan::build(index, expansion);
        plan.index_generation = index_generation;
        let plan = Arc::new(plan);
        self.builds += 1;
        crate::log_debug!(
            "PLAN",
            "rebuilt rows={} groups={} expanded={} gen={} ver={}",
            plan.len(),
            index.group_count(),
            expansion.expanded_count(),
            index_generation,
            expansion.version()
        );

        self.cached = Some(CachedPlan {
            index_generation,
            expansion_version: expansion.version(),
            plan: Arc::clone(&plan),
        });
        plan
    }

    /// Number of actual rebuilds performed so far.
    pub fn build_count(&self) -> u64 {
        self.builds
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
