use alloc::vec::Vec;

use rosterview::{Developer, FilterSpec};

use crate::LoadError;

/// What a roster load asks for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadRequest {
    /// The full roster.
    #[default]
    All,
    /// A roster already filtered by the source (server-side filtering).
    Filtered(FilterSpec),
}

/// Supplies developer rosters.
///
/// The session treats every successful load as a full replacement of its roster. Sources that
/// complete asynchronously can skip this trait and report through
/// [`Session::begin_load`](crate::Session::begin_load) /
/// [`Session::finish_load`](crate::Session::finish_load) instead.
pub trait RosterSource {
    fn load(&mut self, request: &LoadRequest) -> Result<Vec<Developer>, LoadError>;
}

impl<F> RosterSource for F
where
    F: FnMut(&LoadRequest) -> Result<Vec<Developer>, LoadError>,
{
    fn load(&mut self, request: &LoadRequest) -> Result<Vec<Developer>, LoadError> {
        self(request)
    }
}
