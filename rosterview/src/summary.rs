use alloc::vec::Vec;

use crate::{Category, Developer};

/// Number of records carrying a category. `category` is `None` for unknown values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryCount {
    pub category: Option<Category>,
    pub count: usize,
}

pub(crate) fn count_by<'a>(
    records: impl IntoIterator<Item = &'a Developer>,
    mut key: impl FnMut(&'a Developer) -> Option<&'a Category>,
) -> Vec<CategoryCount> {
    // Few distinct categories per roster; a linear scan keeps first-seen order for free.
    let mut out: Vec<CategoryCount> = Vec::new();
    for d in records {
        let k = key(d);
        match out.iter_mut().find(|c| c.category.as_ref() == k) {
            Some(c) => c.count += 1,
            None => out.push(CategoryCount {
                category: k.cloned(),
                count: 1,
            }),
        }
    }
    out
}

/// Records per domain, in first-seen order.
pub fn domain_distribution(records: &[Developer]) -> Vec<CategoryCount> {
    count_by(records, |d| Some(&d.domain))
}

/// Records per nationality, in first-seen order. Unknown nationalities are counted under `None`.
pub fn nationality_distribution(records: &[Developer]) -> Vec<CategoryCount> {
    count_by(records, |d| d.nationality.as_ref())
}
