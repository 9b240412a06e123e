use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use rosterview::{Category, DeveloperId};

/// A nationality guess for one developer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    pub nationality: Category,
    /// Percent, 0..=100.
    pub confidence: u8,
    /// Percent per candidate nationality.
    pub probabilities: Vec<(Category, u8)>,
}

impl Prediction {
    /// The candidate with the highest probability (first one wins ties).
    pub fn most_likely(&self) -> Option<&(Category, u8)> {
        self.probabilities
            .iter()
            .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
    }
}

/// A talent rating for one developer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rating {
    /// 0..=100.
    pub score: u8,
    pub projects: u32,
    pub contributions: u32,
}

impl Rating {
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }
}

/// Letter band of a rating score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// `A` at 100, `B` from 75, `C` from 50, `D` from 25, `F` below.
    pub fn from_score(score: u8) -> Self {
        match score {
            100.. => Self::A,
            75..=99 => Self::B,
            50..=74 => Self::C,
            25..=49 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// Prediction and rating data supplied from outside the roster, keyed by developer id.
///
/// Annotations survive roster replacement; entries for ids that are no longer present are
/// simply never looked up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotations {
    predictions: BTreeMap<DeveloperId, Prediction>,
    ratings: BTreeMap<DeveloperId, Rating>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_prediction(&mut self, id: DeveloperId, prediction: Prediction) {
        self.predictions.insert(id, prediction);
    }

    pub fn insert_rating(&mut self, id: DeveloperId, rating: Rating) {
        self.ratings.insert(id, rating);
    }

    pub fn prediction(&self, id: DeveloperId) -> Option<&Prediction> {
        self.predictions.get(&id)
    }

    pub fn rating(&self, id: DeveloperId) -> Option<&Rating> {
        self.ratings.get(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty() && self.ratings.is_empty()
    }

    pub fn clear(&mut self) {
        self.predictions.clear();
        self.ratings.clear();
    }

    /// Merges `other` into `self`; entries in `other` win.
    pub fn extend(&mut self, other: Annotations) {
        self.predictions.extend(other.predictions);
        self.ratings.extend(other.ratings);
    }
}
