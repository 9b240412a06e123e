use alloc::vec::Vec;

use crate::filter::filter_indices;
use crate::summary::{CategoryCount, count_by};
use crate::{
    Developer, DeveloperId, FilterSpec, SourceSet, Viewport, ViewportOptions, ViewportState,
    VisibleRange, VisibleRow,
};

/// The visible part of the filtered sequence, ready to hand to a renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleSlice<'a> {
    pub start_index: usize,
    pub rows: Vec<&'a Developer>,
}

/// A filtered, virtualized view over a [`SourceSet`].
///
/// The filtered sequence and the visible slice are derived state: they are pure functions of
/// the source set, the applied [`FilterSpec`] and the scroll offset, recomputed synchronously on
/// every transition. The view never copies records; it keeps positions into the source set.
///
/// This type is UI-agnostic. Debouncing of filter input and tracking of pointer hover belong to
/// the host (see the `rosterview-adapter` crate).
#[derive(Clone, Debug)]
pub struct RosterView {
    source: SourceSet,
    spec: FilterSpec,
    filtered: Vec<usize>,
    viewport: Viewport,
}

impl Default for RosterView {
    fn default() -> Self {
        Self::new(ViewportOptions::default())
    }
}

impl RosterView {
    /// Creates an empty view with the unconstrained filter `(All, All, "")`.
    pub fn new(options: ViewportOptions) -> Self {
        Self {
            source: SourceSet::empty(),
            spec: FilterSpec::default(),
            filtered: Vec::new(),
            viewport: Viewport::new(options),
        }
    }

    pub fn with_source(options: ViewportOptions, source: SourceSet) -> Self {
        let mut view = Self::new(options);
        view.replace_source(source);
        view
    }

    pub fn source(&self) -> &SourceSet {
        &self.source
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn options(&self) -> &ViewportOptions {
        self.viewport.options()
    }

    pub fn set_options(&mut self, options: ViewportOptions) {
        self.viewport.set_options(options);
    }

    /// Replaces the whole roster, re-applies the current filter and scrolls back to the top.
    pub fn replace_source(&mut self, source: SourceSet) {
        rdebug!(records = source.len(), "replace_source");
        self.source = source;
        self.refilter();
    }

    /// Applies a new filter specification and scrolls back to the top.
    ///
    /// The viewport is reset even when the filtered sequence happens to be unchanged; a stale
    /// offset is never carried over to a new projection.
    pub fn apply_filter(&mut self, spec: FilterSpec) {
        self.spec = spec;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(self.source.records(), &self.spec);
        rdebug!(
            source = self.source.len(),
            filtered = self.filtered.len(),
            "refilter"
        );
        self.viewport.reset();
        self.viewport.set_count(self.filtered.len());
    }

    /// Applies a wheel delta. See [`Viewport::apply_scroll_delta`].
    pub fn scroll(&mut self, delta: i64, is_active: bool) -> bool {
        self.viewport.apply_scroll_delta(delta, is_active)
    }

    pub fn scroll_to_index(&mut self, index: usize) -> u64 {
        self.viewport.scroll_to_index(index)
    }

    pub fn scroll_offset(&self) -> u64 {
        self.viewport.scroll_offset()
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.viewport.viewport_state()
    }

    pub fn restore_viewport_state(&mut self, state: ViewportState) {
        self.viewport.restore_viewport_state(state);
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// `true` when the filter excludes every record (the "no match" state).
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn filtered_get(&self, index: usize) -> Option<&Developer> {
        self.filtered
            .get(index)
            .and_then(|&i| self.source.get(i))
    }

    /// Iterates over the filtered sequence in source order.
    pub fn filtered(&self) -> impl ExactSizeIterator<Item = &Developer> + '_ {
        let records = self.source.records();
        self.filtered.iter().map(move |&i| &records[i])
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.viewport.visible_range()
    }

    pub fn visible_slice(&self) -> VisibleSlice<'_> {
        let range = self.visible_range();
        let records = self.source.records();
        VisibleSlice {
            start_index: range.start_index,
            rows: self.filtered[range.start_index..range.end_index]
                .iter()
                .map(|&i| &records[i])
                .collect(),
        }
    }

    /// Iterates over the visible rows without allocating.
    pub fn for_each_visible_row<'a>(&'a self, mut f: impl FnMut(VisibleRow<'a>)) {
        let range = self.visible_range();
        let records = self.source.records();
        for (local_index, index) in (range.start_index..range.end_index).enumerate() {
            f(VisibleRow {
                index,
                local_index,
                y: self.viewport.row_y(local_index),
                developer: &records[self.filtered[index]],
            });
        }
    }

    /// Collects the visible rows into `out` (clears `out` first).
    pub fn collect_visible_rows<'a>(&'a self, out: &mut Vec<VisibleRow<'a>>) {
        out.clear();
        self.for_each_visible_row(|row| out.push(row));
    }

    /// Position of a record in the filtered sequence, if it passes the filter.
    pub fn filtered_index_of(&self, id: DeveloperId) -> Option<usize> {
        let records = self.source.records();
        self.filtered.iter().position(|&i| records[i].id == id)
    }

    /// Looks up a record by exact name in the whole roster, ignoring the filter.
    pub fn find_by_name(&self, name: &str) -> Option<&Developer> {
        self.source.iter().find(|d| d.name == name)
    }

    /// Records per domain across the filtered sequence, in first-seen order.
    pub fn domain_distribution(&self) -> Vec<CategoryCount> {
        count_by(self.filtered(), |d| Some(&d.domain))
    }

    /// Records per nationality across the filtered sequence, in first-seen order.
    pub fn nationality_distribution(&self) -> Vec<CategoryCount> {
        count_by(self.filtered(), |d| d.nationality.as_ref())
    }
}
