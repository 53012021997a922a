//! Bounded navigation history.

use std::collections::VecDeque;

use crate::models::Route;

/// Ordered stack of visited routes with a fixed capacity.
///
/// Pushing past capacity evicts the oldest entries first. The newest entry
/// is the top of the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryStack {
    entries: VecDeque<Route>,
    capacity: usize,
}

impl HistoryStack {
    /// Creates an empty stack.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "HistoryStack capacity must be greater than 0");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a stack holding a single route.
    pub fn seeded(route: Route, capacity: usize) -> Self {
        let mut stack = Self::new(capacity);
        stack.push(route);
        stack
    }

    /// Pushes a route on top, evicting from the bottom while over capacity.
    pub fn push(&mut self, route: Route) {
        self.entries.push_back(route);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Overwrites the top entry, or pushes when the stack is empty.
    pub fn replace_top(&mut self, route: Route) {
        match self.entries.back_mut() {
            Some(top) => *top = route,
            None => self.entries.push_back(route),
        }
    }

    /// Removes and returns the top entry.
    pub fn pop(&mut self) -> Option<Route> {
        self.entries.pop_back()
    }

    #[inline]
    pub fn top(&self) -> Option<Route> {
        self.entries.back().copied()
    }

    /// Index of the most recent occurrence of `route`.
    pub fn last_index_of(&self, route: Route) -> Option<usize> {
        self.entries.iter().rposition(|entry| *entry == route)
    }

    /// Drops every entry above `index`, keeping `index` as the new top.
    pub fn truncate_after(&mut self, index: usize) {
        self.entries.truncate(index + 1);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    #[cfg(test)]
    pub fn to_vec(&self) -> Vec<Route> {
        self.entries.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded() {
        let stack = HistoryStack::seeded(Route::Home, 3);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top(), Some(Route::Home));
        assert_eq!(stack.capacity(), 3);
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _ = HistoryStack::new(0);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut stack = HistoryStack::new(3);
        stack.push(Route::Home);
        stack.push(Route::Showcase);
        stack.push(Route::Wallet);
        stack.push(Route::Exchange);

        assert_eq!(stack.len(), 3);
        assert_eq!(
            stack.to_vec(),
            vec![Route::Showcase, Route::Wallet, Route::Exchange]
        );
    }

    #[test]
    fn test_replace_top() {
        let mut stack = HistoryStack::seeded(Route::Home, 3);
        stack.push(Route::Showcase);
        stack.replace_top(Route::Wallet);
        assert_eq!(stack.to_vec(), vec![Route::Home, Route::Wallet]);

        let mut empty = HistoryStack::new(3);
        empty.replace_top(Route::Settings);
        assert_eq!(empty.to_vec(), vec![Route::Settings]);
    }

    #[test]
    fn test_last_index_and_truncate() {
        let mut stack = HistoryStack::new(10);
        for route in [Route::Home, Route::Wallet, Route::Home, Route::Settings] {
            stack.push(route);
        }
        assert_eq!(stack.last_index_of(Route::Home), Some(2));
        assert_eq!(stack.last_index_of(Route::Textures), None);

        stack.truncate_after(1);
        assert_eq!(stack.to_vec(), vec![Route::Home, Route::Wallet]);
        assert_eq!(stack.top(), Some(Route::Wallet));
    }

    #[test]
    fn test_pop() {
        let mut stack = HistoryStack::seeded(Route::Home, 3);
        stack.push(Route::Textures);
        assert_eq!(stack.pop(), Some(Route::Textures));
        assert_eq!(stack.pop(), Some(Route::Home));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }
}
