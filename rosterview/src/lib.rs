//! A headless filtered, virtualized view over a developer roster.
//!
//! For session plumbing (debounced filter input, loading, rendering), see the
//! `rosterview-adapter` crate.
//!
//! The crate covers the two stages between a roster and a table on screen:
//! - the filter stage, an order-preserving projection of the roster by domain, nationality and
//!   a case-insensitive name pattern
//! - the viewport stage, which turns a scroll offset into the contiguous slice of rows to draw
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the roster (a [`SourceSet`])
//! - filter input and wheel deltas
//! - a surface that draws the rows it is handed
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod filter;
mod options;
mod record;
mod state;
mod summary;
mod types;
mod view;
mod viewport;

#[cfg(test)]
mod tests;

pub use filter::{Choice, FilterSpec, Matcher, filter, filter_indices};
pub use options::ViewportOptions;
pub use record::{Category, Developer, DeveloperId, DuplicateId, SourceSet};
pub use state::ViewportState;
pub use summary::{CategoryCount, domain_distribution, nationality_distribution};
pub use types::{ScrollDirection, VisibleRange, VisibleRow};
pub use view::{RosterView, VisibleSlice};
pub use viewport::{Viewport, compute_visible_slice};
