use crate::foundation::error::{SlideFxError, SlideFxResult};

/// Ordered, non-empty, immutable list of carousel items.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ItemSet<T> {
    items: Vec<T>,
}

impl<T> ItemSet<T> {
    /// Build an item set; at least one item is required.
    pub fn new(items: Vec<T>) -> SlideFxResult<Self> {
        if items.is_empty() {
            return Err(SlideFxError::validation("item set must contain at least one item"));
        }
        Ok(Self { items })
    }

    /// Number of items (always >= 1).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Index of the last item.
    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    /// Iterate items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// All items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a ItemSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
