//! Iterator adapters that advance a tracker once per item.
//!
//! The [`ProgressIteratorExt`] trait adds helper methods to any Rust
//! [`Iterator`]. Each item yielded counts as one completed unit.
//!
//! # Totals
//!
//! [`progress`](ProgressIteratorExt::progress) reads [`Iterator::size_hint`]:
//! an exact size becomes the tracker's total, anything else leaves it at zero
//! (inactive) until [`ProgressTracker::set_total`] is called on the handle.
//!
//! # Example
//!
//! ```no_run
//! use fast_progress::ProgressIteratorExt;
//!
//! for _item in vec![1, 2, 3].into_iter().progress() {
//!     // ...
//! }
//! eprintln!();
//! ```

use crate::progress::ProgressTracker;

/// Wraps an iterator and advances a [`ProgressTracker`] on every item.
pub struct ProgressIter<I> {
    iter: I,
    tracker: ProgressTracker,
}

impl<I> ProgressIter<I> {
    /// Creates a new `ProgressIter`.
    ///
    /// Usually constructed through [`ProgressIteratorExt`].
    pub const fn new(iter: I, tracker: ProgressTracker) -> Self {
        Self { iter, tracker }
    }

    /// The tracker driven by this iterator.
    pub const fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }
}

impl<I: Iterator> Iterator for ProgressIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next();
        if item.is_some() {
            self.tracker.advance();
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Extension trait to attach a progress bar to any iterator.
pub trait ProgressIteratorExt: Sized {
    /// Wraps the iterator in a new stderr tracker sized from `size_hint`.
    fn progress(self) -> ProgressIter<Self>;

    /// Wraps the iterator using an existing tracker.
    fn progress_with(self, tracker: ProgressTracker) -> ProgressIter<Self>;
}

impl<I: Iterator> ProgressIteratorExt for I {
    fn progress(self) -> ProgressIter<Self> {
        let total = match self.size_hint() {
            (lower, Some(upper)) if lower == upper => upper as u64,
            _ => 0,
        };
        ProgressIter::new(self, ProgressTracker::new(total))
    }

    fn progress_with(self, tracker: ProgressTracker) -> ProgressIter<Self> {
        ProgressIter::new(self, tracker)
    }
}
