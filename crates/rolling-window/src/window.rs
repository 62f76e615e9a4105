//! Bounded FIFO Window Implementation

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fixed-capacity FIFO window. Pushing beyond capacity evicts the oldest
/// entry. Queries are evaluated over the live contents at call time, never
/// pre-aggregated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundedWindow<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedWindow<T> {
    /// Create a window with the given capacity (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push an entry, evicting the oldest if the window is full
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the window capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate entries oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Most recent entry
    pub fn back(&self) -> Option<&T> {
        self.data.back()
    }

    /// Clear the window
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: PartialEq + Clone> BoundedWindow<T> {
    /// Most frequent entry. Ties are broken by the first value to reach the
    /// maximum count in insertion order, so the output is deterministic.
    pub fn mode(&self) -> Option<T> {
        let mut counts: Vec<(&T, usize)> = Vec::new();
        for item in &self.data {
            match counts.iter_mut().find(|(v, _)| *v == item) {
                Some((_, n)) => *n += 1,
                None => counts.push((item, 1)),
            }
        }

        let mut best: Option<(&T, usize)> = None;
        for (value, count) in counts {
            match best {
                Some((_, n)) if count <= n => {}
                _ => best = Some((value, count)),
            }
        }
        best.map(|(v, _)| v.clone())
    }
}

impl BoundedWindow<f64> {
    /// Arithmetic mean over the window, 0.0 when empty
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Count entries at or after `cutoff` (sliding time window over
    /// timestamp contents, independent of the capacity bound)
    pub fn count_since(&self, cutoff: f64) -> usize {
        self.data.iter().filter(|&&t| t >= cutoff).count()
    }
}
