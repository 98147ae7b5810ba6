//! Toggle-based multi-select set.

use serde::{Deserialize, Serialize};

/// A small set where selecting a present item removes it and selecting an
/// absent item appends it.
///
/// Order of insertion is kept for display but ignored by equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiSelect<T> {
    items: Vec<T>,
}

impl<T> Default for MultiSelect<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq + Copy> MultiSelect<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `item`. Returns `true` if it is now selected.
    pub fn toggle(&mut self, item: T) -> bool {
        if let Some(pos) = self.items.iter().position(|i| *i == item) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(item);
            true
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: PartialEq + Copy> PartialEq for MultiSelect<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items.iter().all(|i| other.contains(i))
    }
}

impl<T: PartialEq + Copy> FromIterator<T> for MultiSelect<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            if !set.contains(&item) {
                set.items.push(item);
            }
        }
        set
    }
}
