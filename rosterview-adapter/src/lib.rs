//! Session utilities for the `rosterview` crate.
//!
//! The `rosterview` crate is UI-agnostic and focuses on filtering and viewport math. This crate
//! provides the framework-neutral pieces a dashboard needs around it:
//!
//! - A per-session context ([`Session`]) that routes input events, owns the filter being edited
//!   and tracks roster loading
//! - Trailing-edge debouncing of filter edits ([`Debouncer`])
//! - The roster source seam ([`RosterSource`]) and load failures ([`LoadError`])
//! - The render surface seam ([`RenderSurface`]) with a plain-text implementation
//! - Prediction/rating annotations keyed by developer id
//! - A deterministic mock roster for demos and tests
//!
//! Time is always supplied by the host as a millisecond timestamp; nothing here reads a clock.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod annotation;
mod debounce;
mod error;
mod mock;
mod render;
mod session;
mod source;


pub use annotation::{Annotations, Grade, Prediction, Rating};
pub use debounce::Debouncer;
pub use error::LoadError;
pub use mock::{MOCK_DOMAINS, MOCK_NATIONALITIES, MockRoster, sample_annotations, sample_roster};
pub use render::{COLUMNS, Column, NO_MATCH, RenderSurface, RowPlacement, TextSurface, render_view};
pub use session::{InputEvent, LoadState, LoadTicket, Session, SessionOptions};
pub use source::{LoadRequest, RosterSource};
