use alloc::string::String;

use rosterview::{Developer, RosterView};

/// A table column: header label and horizontal offset in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub x: u32,
}

/// The fixed roster table layout.
pub const COLUMNS: [Column; 5] = [
    Column { label: "ID", x: 10 },
    Column {
        label: "Name",
        x: 60,
    },
    Column {
        label: "Domain",
        x: 310,
    },
    Column {
        label: "Nationality",
        x: 560,
    },
    Column {
        label: "Rank",
        x: 810,
    },
];

/// Shown when the filter leaves nothing to draw.
pub const NO_MATCH: &str = "developer not found";

/// Where and what to draw for one visible row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowPlacement<'a> {
    /// Position in the filtered sequence.
    pub index: usize,
    /// Top edge, below the header.
    pub y: u64,
    pub height: u32,
    /// Alternate-row shading (odd filtered index).
    pub striped: bool,
    pub developer: &'a Developer,
}

/// Something that can draw the roster table (a canvas, a terminal buffer, a test recorder).
pub trait RenderSurface {
    /// Called once per frame before anything is drawn.
    fn clear(&mut self) {}

    fn draw_header(&mut self, columns: &[Column], header_height: u32);

    fn draw_row(&mut self, row: &RowPlacement<'_>);

    /// Called instead of `draw_row` when the filtered sequence is empty.
    fn draw_empty(&mut self, _message: &str) {}
}

/// Draws one frame of `view`: the header, then exactly the visible slice.
pub fn render_view(view: &RosterView, surface: &mut impl RenderSurface) {
    let options = view.options();
    surface.clear();
    surface.draw_header(&COLUMNS, options.header_height);
    if view.is_empty() {
        surface.draw_empty(NO_MATCH);
        return;
    }
    view.for_each_visible_row(|row| {
        surface.draw_row(&RowPlacement {
            index: row.index,
            y: row.y,
            height: options.row_height,
            striped: row.index % 2 == 1,
            developer: row.developer,
        });
    });
}

/// Renders the table as plain text, one line per row, for terminals and tests.
///
/// Pixel offsets are mapped to character columns at ten pixels per character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextSurface {
    out: String,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub fn lines(&self) -> core::str::Lines<'_> {
        self.out.lines()
    }

    fn put(line: &mut String, x: u32, text: &str) {
        let col = (x / 10) as usize;
        let width = line.chars().count();
        if width < col {
            line.extend(core::iter::repeat_n(' ', col - width));
        } else if width > 0 {
            line.push(' ');
        }
        line.push_str(text);
    }

    fn push_line(&mut self, line: &str) {
        self.out.push_str(line.trim_end());
        self.out.push('\n');
    }
}

impl RenderSurface for TextSurface {
    fn clear(&mut self) {
        self.out.clear();
    }

    fn draw_header(&mut self, columns: &[Column], _header_height: u32) {
        let mut line = String::new();
        for c in columns {
            Self::put(&mut line, c.x, c.label);
        }
        self.push_line(&line);
    }

    fn draw_row(&mut self, row: &RowPlacement<'_>) {
        let d = row.developer;
        let id = alloc::format!("{}", d.id);
        let rank = alloc::format!("{}", d.rank);
        let nationality = d.nationality.as_ref().map_or("-", |n| n.as_str());
        let mut line = String::new();
        for (c, text) in COLUMNS.iter().zip([
            id.as_str(),
            d.name.as_str(),
            d.domain.as_str(),
            nationality,
            rank.as_str(),
        ]) {
            Self::put(&mut line, c.x, text);
        }
        self.push_line(&line);
    }

    fn draw_empty(&mut self, message: &str) {
        self.push_line(message);
    }
}
