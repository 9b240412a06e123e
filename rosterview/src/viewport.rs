use core::cmp;

use crate::{ScrollDirection, ViewportOptions, ViewportState, VisibleRange};

/// Computes the slice of `filtered` to materialize for a given scroll offset.
///
/// `start_index = floor(scroll_offset / row_height)`, clamped to `[0, len - 1]` (or 0 when
/// `filtered` is empty), and the slice ends at `min(start_index + visible_rows, len)`. Any
/// scroll offset is accepted, so a sequence that shrank since the offset was computed is safe.
pub fn compute_visible_slice<T>(
    filtered: &[T],
    scroll_offset: u64,
    row_height: u32,
    visible_rows: usize,
) -> (usize, &[T]) {
    let range = visible_range_for(filtered.len(), scroll_offset, row_height, visible_rows);
    (range.start_index, &filtered[range.start_index..range.end_index])
}

fn visible_range_for(
    count: usize,
    scroll_offset: u64,
    row_height: u32,
    visible_rows: usize,
) -> VisibleRange {
    let row = scroll_offset / cmp::max(row_height, 1) as u64;
    let start_index = usize::try_from(row)
        .unwrap_or(usize::MAX)
        .min(count.saturating_sub(1));
    let end_index = cmp::min(start_index.saturating_add(visible_rows), count);
    VisibleRange {
        start_index,
        end_index,
    }
}

/// Scroll state of the virtualized table.
///
/// Holds the length of the filtered sequence (`count`) and a scroll offset that always
/// satisfies `0 <= scroll_offset <= max_scroll_offset()`.
#[derive(Clone, Debug)]
pub struct Viewport {
    options: ViewportOptions,
    count: usize,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportOptions::default())
    }
}

impl Viewport {
    pub fn new(options: ViewportOptions) -> Self {
        Self {
            options: options.normalized(),
            count: 0,
            scroll_offset: 0,
            scroll_direction: None,
        }
    }

    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    /// Replaces the geometry and re-clamps the scroll offset against it.
    pub fn set_options(&mut self, options: ViewportOptions) {
        self.options = options.normalized();
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Updates the length of the filtered sequence. The offset is re-clamped so the
    /// viewport never points past a shrunken sequence.
    pub fn set_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        self.count = count;
        self.scroll_offset = self.clamp_scroll_offset(self.scroll_offset);
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Returns to the top of the list.
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
        self.scroll_direction = None;
    }

    pub fn total_size(&self) -> u64 {
        (self.count as u64).saturating_mul(self.options.row_height as u64)
    }

    /// `max(0, (count - visible_rows) * row_height)`.
    pub fn max_scroll_offset(&self) -> u64 {
        let hidden = self.count.saturating_sub(self.options.visible_rows) as u64;
        hidden.saturating_mul(self.options.row_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Moves to an absolute offset (clamped). Returns the applied offset.
    pub fn scroll_to_offset(&mut self, offset: u64) -> u64 {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
        self.scroll_offset
    }

    /// Scrolls so that `index` is the top row, as far as the clamp allows.
    pub fn scroll_to_index(&mut self, index: usize) -> u64 {
        let offset = (index as u64).saturating_mul(self.options.row_height as u64);
        self.scroll_to_offset(offset)
    }

    /// Applies a raw wheel delta.
    ///
    /// Deltas are ignored while `is_active` is `false` (the pointer is outside the list).
    /// Returns `true` when the offset changed.
    pub fn apply_scroll_delta(&mut self, delta: i64, is_active: bool) -> bool {
        if !is_active || delta == 0 {
            return false;
        }
        let target = if delta > 0 {
            self.scroll_offset.saturating_add(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        };
        let prev = self.scroll_offset;
        self.scroll_to_offset(target);
        rtrace!(delta, prev, offset = self.scroll_offset, "apply_scroll_delta");
        self.scroll_offset != prev
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.visible_range_for(self.scroll_offset)
    }

    pub fn visible_range_for(&self, scroll_offset: u64) -> VisibleRange {
        visible_range_for(
            self.count,
            scroll_offset,
            self.options.row_height,
            self.options.visible_rows,
        )
    }

    /// Vertical position of the `local_index`-th visible row, below the header.
    pub fn row_y(&self, local_index: usize) -> u64 {
        (local_index as u64)
            .saturating_mul(self.options.row_height as u64)
            .saturating_add(self.options.header_height as u64)
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            scroll_offset: self.scroll_offset,
        }
    }

    /// Restores a previously captured snapshot. The offset is clamped against the current count.
    pub fn restore_viewport_state(&mut self, state: ViewportState) {
        self.scroll_to_offset(state.scroll_offset);
    }
}
