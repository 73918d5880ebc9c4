//! Recently looked-up places.

use std::collections::VecDeque;

use nav_core::Place;

/// Default number of places kept.
pub const HISTORY_CAPACITY: usize = 10;

/// Newest-first list of resolved places.
///
/// Only valid places are recorded.  A place whose postal code is already
/// present is ignored, and so is a place without a postal code (GPS input,
/// free-text hits without one) whose coordinate is already present.
#[derive(Clone, Debug)]
pub struct SearchHistory {
    entries:  VecDeque<Place>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    /// Record `place`.  Returns `true` if it was added.
    pub fn record(&mut self, place: &Place) -> bool {
        if !place.valid || self.contains(place) {
            return false;
        }
        self.entries.push_front(place.clone());
        self.entries.truncate(self.capacity);
        true
    }

    fn contains(&self, place: &Place) -> bool {
        match (place.postal_code.as_deref(), place.coordinate) {
            (Some(code), _) => self.entries.iter().any(|e| e.postal_code.as_deref() == Some(code)),
            (None, Some(c)) => self
                .entries
                .iter()
                .any(|e| e.postal_code.is_none() && e.coordinate == Some(c)),
            (None, None) => false,
        }
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
