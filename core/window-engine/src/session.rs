//! FILENAME: core/window-engine/src/session.rs
//! PURPOSE: Single-threaded event loop tying the engine together.
//! CONTEXT: A `ViewSession` lives as long as the view. Every event is
//! applied to completion, including row-plan rebuild and window
//! recomputation, before the next one is looked at, so the window is never
//! computed against a stale plan. Other threads hand events over through a
//! channel and the owner drains it; the session itself is never shared.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use dataset::{GroupKey, Record};

use crate::definition::{check_scroll_offset, check_viewport_height, WindowConfig};
use crate::error::WindowError;
use crate::expansion::ExpansionState;
use crate::group_index::GroupIndex;
use crate::row_plan::{RowPlan, RowPlanCache};
use crate::view::WindowedView;
use crate::windower::{max_scroll_offset, scroll_offset_for_row, visible_range, Align, VisibleWindow};

// ============================================================================
// EVENTS
// ============================================================================

/// A discrete input from the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Toggle(GroupKey),
    Scroll(f64),
    Resize(f64),
    ExpandAll,
    CollapseAll,
}

/// What the renderer needs for one render cycle.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub plan: Arc<RowPlan>,
    pub window: VisibleWindow,
    pub scroll_offset: f64,
    pub viewport_height: f64,
}

// ============================================================================
// SESSION
// ============================================================================

#[derive(Debug)]
pub struct ViewSession {
    config: WindowConfig,
    index: GroupIndex,
    /// Bumped whenever the index is rebuilt from new records.
    index_generation: u64,
    expansion: ExpansionState,
    plan_cache: RowPlanCache,
    plan: Arc<RowPlan>,
    scroll_offset: f64,
    window: VisibleWindow,
}

impl ViewSession {
    /// Creates a session with every group collapsed and the view at the top.
    pub fn new(records: Vec<Record>, config: WindowConfig) -> Result<Self, WindowError> {
        config.validate()?;

        let index = GroupIndex::build_by(records, config.group_field);
        let expansion = ExpansionState::new();
        let mut plan_cache = RowPlanCache::new();
        let plan = plan_cache.get_or_build(&index, 0, &expansion);

        crate::log_info!(
            "SESSION",
            "created records={} groups={} rowHeight={} viewport={} overscan={}",
            index.record_count(),
            index.group_count(),
            config.row_height,
            config.viewport_height,
            config.overscan
        );

        let mut session = ViewSession {
            config,
            index,
            index_generation: 0,
            expansion,
            plan_cache,
            plan,
            scroll_offset: 0.0,
            window: VisibleWindow::default(),
        };
        session.recompute_window()?;
        Ok(session)
    }

    /// Loads records from a JSON array, then creates the session.
    pub fn from_json(records_json: &str, config: WindowConfig) -> Result<Self, WindowError> {
        let records = dataset::load_records_json(records_json)?;
        Self::new(records, config)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn index(&self) -> &GroupIndex {
        &self.index
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expansion.is_expanded(key)
    }

    pub fn plan(&self) -> &Arc<RowPlan> {
        &self.plan
    }

    pub fn window(&self) -> &VisibleWindow {
        &self.window
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.config.viewport_height
    }

    /// Number of row-plan rebuilds performed (cache misses).
    pub fn plan_builds(&self) -> u64 {
        self.plan_cache.build_count()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            plan: Arc::clone(&self.plan),
            window: self.window.clone(),
            scroll_offset: self.scroll_offset,
            viewport_height: self.config.viewport_height,
        }
    }

    pub fn view(&self) -> WindowedView {
        WindowedView::build(&self.index, &self.plan, &self.window, self.scroll_offset)
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Flips a group's expansion. Unknown keys are accepted and change nothing
    /// visible.
    pub fn toggle(&mut self, key: &str) -> Result<(), WindowError> {
        self.expansion.toggle(key);
        crate::log_debug!(
            "SESSION",
            "toggle key={} expanded={} known={}",
            key,
            self.expansion.is_expanded(key),
            self.index.contains(key)
        );
        self.refresh_plan()
    }

    pub fn expand_all(&mut self) -> Result<(), WindowError> {
        let keys: Vec<&str> = self.index.groups().iter().map(|g| g.key.as_str()).collect();
        self.expansion.expand_all(keys);
        self.refresh_plan()
    }

    pub fn collapse_all(&mut self) -> Result<(), WindowError> {
        self.expansion.collapse_all();
        self.refresh_plan()
    }

    /// Offsets past the end of the content are clamped to the last
    /// reachable position.
    pub fn scroll_to(&mut self, offset: f64) -> Result<(), WindowError> {
        check_scroll_offset(offset)?;
        self.scroll_offset = offset;
        self.clamp_scroll();
        self.recompute_window()
    }

    pub fn resize(&mut self, viewport_height: f64) -> Result<(), WindowError> {
        check_viewport_height(viewport_height)?;
        self.config.viewport_height = viewport_height;
        self.clamp_scroll();
        self.recompute_window()
    }

    /// Scrolls so the header of `key` is placed per `align`. Returns false
    /// if the group does not exist.
    pub fn scroll_to_group(&mut self, key: &str, align: Align) -> Result<bool, WindowError> {
        let position = match self.plan.header_position(key) {
            Some(position) => position,
            None => return Ok(false),
        };
        let offset = scroll_offset_for_row(
            position,
            align,
            self.plan.len(),
            self.config.row_height,
            self.config.viewport_height,
            self.scroll_offset,
        )?;
        self.scroll_to(offset)?;
        Ok(true)
    }

    /// Replaces the dataset. Expansion state is kept; keys missing from the
    /// new data simply have no header to show.
    pub fn reload(&mut self, records: Vec<Record>) -> Result<(), WindowError> {
        self.index = GroupIndex::build_by(records, self.config.group_field);
        self.index_generation = self.index_generation.wrapping_add(1);
        crate::log_info!(
            "SESSION",
            "reloaded records={} groups={} gen={}",
            self.index.record_count(),
            self.index.group_count(),
            self.index_generation
        );
        self.refresh_plan()
    }

    // ------------------------------------------------------------------------
    // Event loop
    // ------------------------------------------------------------------------

    pub fn dispatch(&mut self, event: ViewEvent) -> Result<(), WindowError> {
        match event {
            ViewEvent::Toggle(key) => self.toggle(&key),
            ViewEvent::Scroll(offset) => self.scroll_to(offset),
            ViewEvent::Resize(height) => self.resize(height),
            ViewEvent::ExpandAll => self.expand_all(),
            ViewEvent::CollapseAll => self.collapse_all(),
        }
    }

    /// Applies events strictly in order. A run of consecutive scroll events
    /// only applies the last offset of the run.
    pub fn process<I>(&mut self, events: I) -> Result<ViewSnapshot, WindowError>
    where
        I: IntoIterator<Item = ViewEvent>,
    {
        let mut pending_scroll: Option<f64> = None;
        let mut coalesced = 0usize;

        for event in events {
            if let ViewEvent::Scroll(offset) = event {
                if pending_scroll.replace(offset).is_some() {
                    coalesced += 1;
                }
                continue;
            }
            if let Some(offset) = pending_scroll.take() {
                self.scroll_to(offset)?;
            }
            self.dispatch(event)?;
        }
        if let Some(offset) = pending_scroll {
            self.scroll_to(offset)?;
        }

        if coalesced > 0 {
            crate::log_trace!("SESSION", "coalesced {} scroll events", coalesced);
        }
        Ok(self.snapshot())
    }

    /// Applies every event currently queued on `receiver` without blocking.
    pub fn drain(&mut self, receiver: &Receiver<ViewEvent>) -> Result<ViewSnapshot, WindowError> {
        let events: Vec<ViewEvent> = receiver.try_iter().collect();
        self.process(events)
    }

    // ------------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------------

    fn refresh_plan(&mut self) -> Result<(), WindowError> {
        self.plan = self
            .plan_cache
            .get_or_build(&self.index, self.index_generation, &self.expansion);
        self.clamp_scroll();
        self.recompute_window()
    }

    /// Keeps the offset reachable, as a native scroll container does when
    /// the content shrinks or the user overscrolls.
    fn clamp_scroll(&mut self) {
        let max = max_scroll_offset(
            self.plan.len(),
            self.config.row_height,
            self.config.viewport_height,
        );
        if self.scroll_offset > max {
            crate::log_debug!("SESSION", "clamp scroll {} -> {}", self.scroll_offset, max);
            self.scroll_offset = max;
        }
    }

    fn recompute_window(&mut self) -> Result<(), WindowError> {
        self.window = visible_range(
            self.plan.len(),
            self.config.row_height,
            self.config.viewport_height,
            self.scroll_offset,
            self.config.overscan,
        )?;
        crate::log_trace!(
            "WINDOW",
            "range=[{}, {}) total={} offset={}",
            self.window.start_index,
            self.window.end_index,
            self.plan.len(),
            self.scroll_offset
        );
        Ok(())
    }
}
