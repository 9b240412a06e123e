use alloc::string::String;
use alloc::vec::Vec;

use crate::{Category, Developer};

/// A constraint on a categorical field. `All` places no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Choice {
    #[default]
    All,
    Only(Category),
}

impl Choice {
    pub fn only(category: impl Into<Category>) -> Self {
        Self::Only(category.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, value: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == value,
        }
    }

    /// Unknown values only satisfy `All`.
    pub fn matches_opt(&self, value: Option<&Category>) -> bool {
        match (self, value) {
            (Self::All, _) => true,
            (Self::Only(c), Some(v)) => c == v,
            (Self::Only(_), None) => false,
        }
    }
}

impl From<Option<Category>> for Choice {
    fn from(value: Option<Category>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// The current combination of domain/nationality/name constraints.
///
/// The default specification `(All, All, "")` matches every record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSpec {
    pub domain: Choice,
    pub nationality: Choice,
    /// Case-insensitive substring matched against `Developer::name`. Empty matches everything.
    pub name: String,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, domain: Choice) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_nationality(mut self, nationality: Choice) -> Self {
        self.nationality = nationality;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns `true` when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.domain.is_all() && self.nationality.is_all() && self.name.is_empty()
    }

    /// Prepares the specification for repeated matching (folds the name pattern once).
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher {
            spec: self,
            folded_name: (!self.name.is_empty()).then(|| self.name.to_lowercase()),
        }
    }

    pub fn matches(&self, developer: &Developer) -> bool {
        self.matcher().matches(developer)
    }
}

/// A [`FilterSpec`] with its name pattern case-folded ahead of time.
#[derive(Clone, Debug)]
pub struct Matcher<'a> {
    spec: &'a FilterSpec,
    folded_name: Option<String>,
}

impl Matcher<'_> {
    pub fn matches(&self, developer: &Developer) -> bool {
        if !self.spec.domain.matches(&developer.domain) {
            return false;
        }
        if !self
            .spec
            .nationality
            .matches_opt(developer.nationality.as_ref())
        {
            return false;
        }
        match &self.folded_name {
            None => true,
            Some(pattern) => contains_folded(&developer.name, pattern),
        }
    }
}

fn contains_folded(haystack: &str, folded_pattern: &str) -> bool {
    // ASCII fast path: no allocation.
    if haystack.is_ascii() && folded_pattern.is_ascii() {
        let (h, p) = (haystack.as_bytes(), folded_pattern.as_bytes());
        if p.len() > h.len() {
            return false;
        }
        return h
            .windows(p.len())
            .any(|w| w.iter().zip(p).all(|(a, b)| a.to_ascii_lowercase() == *b));
    }
    haystack.to_lowercase().contains(folded_pattern)
}

/// Returns the source positions of every record matching `spec`, in source order.
pub fn filter_indices(source: &[Developer], spec: &FilterSpec) -> Vec<usize> {
    if spec.is_unconstrained() {
        return (0..source.len()).collect();
    }
    let matcher = spec.matcher();
    source
        .iter()
        .enumerate()
        .filter(|(_, d)| matcher.matches(d))
        .map(|(i, _)| i)
        .collect()
}

/// Returns the records of `source` matching every constraint of `spec`, order-preserved.
///
/// An empty result is a valid outcome, not an error.
pub fn filter(source: &[Developer], spec: &FilterSpec) -> Vec<Developer> {
    let matcher = spec.matcher();
    source
        .iter()
        .filter(|d| matcher.matches(d))
        .cloned()
        .collect()
}
