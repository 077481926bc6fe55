//! # `fast_progress`
//!
//! A thread-safe, nearly lock-free console progress bar.
//!
//! Any number of threads share one [`ProgressTracker`] and call
//! [`advance`](ProgressTracker::advance) after each unit of work. The bar
//! repaints at 1% resolution:
//!
//! * **Cheap:** A call that does not cross into a new percentage is one
//!   atomic add and one atomic load. With a total of 1,000,000 only 100 calls
//!   ever go further.
//! * **Non-blocking:** The call that crosses a boundary claims it with a
//!   compare-and-swap and paints under `try_lock`; if another thread is
//!   painting, the frame is skipped.
//! * **Complete:** The 100% frame takes the lock with a blocking wait, so the
//!   finished state is always painted exactly once.
//!
//! Frames are `\r[====    ] 42%` (or just `\r42%` with the bar hidden) and
//! never end in a newline; print one yourself when the run is over.
//!
//! ## Modules
//!
//! * [`builder`]: Fluent construction of a [`ProgressTracker`].
//! * [`error`]: Error returned when parsing a [`BarStyle`].
//! * [`io`]: [`std::io::Read`]/[`std::io::Write`] wrappers that count bytes.
//! * [`iter`]: Extension trait that advances a tracker per iterator item.
//! * [`progress`]: The [`ProgressTracker`] and its update-and-render path.
//! * [`render`]: Frame formatting.
//! * [`style`]: Precomputed fill-glyph tables.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod builder;
pub mod error;
pub mod io;
pub mod iter;
pub mod progress;
pub mod render;
pub mod style;

#[cfg(test)]
pub(crate) mod testing;

pub use builder::ProgressBuilder;
pub use error::ParseStyleError;
pub use iter::{ProgressIter, ProgressIteratorExt};
pub use progress::ProgressTracker;
pub use style::BarStyle;
