use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

/// Stable identity of a developer record. Unique within a [`SourceSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DeveloperId(pub u64);

impl fmt::Display for DeveloperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An enum-like label (domain, nationality).
///
/// Cloning is a reference-count bump, so the same label can be shared by every record in a
/// roster and by any number of filter specifications. Comparison is exact and case-sensitive.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category(Arc<str>);

impl Category {
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Category {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self(Arc::from(label))
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(Arc::from(label))
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single roster entry. Records are never mutated in place; a changed record means a new
/// [`SourceSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Developer {
    pub id: DeveloperId,
    pub name: String,
    pub domain: Category,
    /// `None` when the nationality is unknown.
    pub nationality: Option<Category>,
    pub rank: u32,
}

impl Developer {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        domain: impl Into<Category>,
        nationality: Option<Category>,
        rank: u32,
    ) -> Self {
        Self {
            id: DeveloperId(id),
            name: name.into(),
            domain: domain.into(),
            nationality,
            rank,
        }
    }
}

/// Returned when a roster contains the same [`DeveloperId`] twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("duplicate developer id {id} at positions {first} and {second}")]
pub struct DuplicateId {
    pub id: DeveloperId,
    pub first: usize,
    pub second: usize,
}

/// The full, unfiltered roster for a session.
///
/// Immutable and cheap to clone. Replacing the roster means building a new `SourceSet`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceSet {
    records: Arc<[Developer]>,
}

impl SourceSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a roster, rejecting duplicate ids.
    pub fn new(records: Vec<Developer>) -> Result<Self, DuplicateId> {
        if let Some(dup) = find_duplicate(&records) {
            return Err(dup);
        }
        Ok(Self::new_unchecked(records))
    }

    /// Builds a roster without checking id uniqueness.
    ///
    /// The caller must guarantee ids are unique; lookups by id return the first match otherwise.
    pub fn new_unchecked(records: Vec<Developer>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Developer] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Developer> {
        self.records.get(index)
    }

    pub fn by_id(&self, id: DeveloperId) -> Option<&Developer> {
        self.records.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Developer> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a SourceSet {
    type Item = &'a Developer;
    type IntoIter = core::slice::Iter<'a, Developer>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn find_duplicate(records: &[Developer]) -> Option<DuplicateId> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by_key(|&i| (records[i].id, i));
    order.windows(2).find_map(|w| {
        let (a, b) = (w[0], w[1]);
        (records[a].id == records[b].id).then_some(DuplicateId {
            id: records[a].id,
            first: a,
            second: b,
        })
    })
}
