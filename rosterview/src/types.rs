use crate::Developer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A half-open range of row indexes into the filtered sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..self.end_index).contains(&index)
    }
}

/// A materialized row handed to a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    /// Position in the filtered sequence.
    pub index: usize,
    /// Position inside the visible slice (0 for the top row).
    pub local_index: usize,
    /// Top edge on screen: `local_index * row_height + header_height`.
    pub y: u64,
    pub developer: &'a Developer,
}
