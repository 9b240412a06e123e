/// Geometry of the virtualized table.
///
/// All sizes are in pixels. Rows have a fixed height; the viewport shows at most
/// `visible_rows` of them below a header of `header_height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportOptions {
    pub row_height: u32,
    pub header_height: u32,
    pub visible_rows: usize,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            row_height: 40,
            header_height: 50,
            visible_rows: 15,
        }
    }
}

impl ViewportOptions {
    pub fn new(row_height: u32, visible_rows: usize) -> Self {
        Self::default()
            .with_row_height(row_height)
            .with_visible_rows(visible_rows)
    }

    /// Sets the row height. Zero is treated as 1.
    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height.max(1);
        self
    }

    pub fn with_header_height(mut self, header_height: u32) -> Self {
        self.header_height = header_height;
        self
    }

    /// Sets the number of rows shown at once. Zero is treated as 1.
    pub fn with_visible_rows(mut self, visible_rows: usize) -> Self {
        self.visible_rows = visible_rows.max(1);
        self
    }

    /// Height of the drawable area, header included.
    pub fn table_height(&self) -> u64 {
        (self.visible_rows as u64)
            .saturating_mul(self.row_height as u64)
            .saturating_add(self.header_height as u64)
    }

    pub(crate) fn normalized(self) -> Self {
        Self {
            row_height: self.row_height.max(1),
            header_height: self.header_height,
            visible_rows: self.visible_rows.max(1),
        }
    }
}
