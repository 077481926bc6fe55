//! The [`ProgressTracker`] and its update-and-render path.
//!
//! The tracker is split the same way on both sides of the render lock:
//!
//! * **Hot data:** total, completed count, last-shown percentage, style and
//!   visibility are atomics. [`ProgressTracker::advance`] touches only these
//!   unless it is the call that crosses into a new integer percentage.
//! * **Guarded data:** the output sink and the frame buffer live in a
//!   [`Mutex`]. Intermediate frames use `try_lock` and are skipped when
//!   another thread is painting; the 100% frame uses a blocking `lock` so it
//!   is never dropped.
//!
//! # Ordering
//!
//! The completed count and the last-shown percentage are independent
//! atomics with relaxed ordering. The painter keeps the highest percentage
//! it wrote, so the sequence of frames in the sink is non-decreasing and
//! ends with exactly one `100%` frame per run, though it may skip values.

use std::{
    io::{self, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering},
    },
};

use parking_lot::Mutex;

use crate::{
    builder::ProgressBuilder,
    render::{Painter, Sink},
    style::BarStyle,
};

/// A thread-safe, cloneable console progress bar.
///
/// Cloning is cheap (two `Arc` bumps) and every clone drives the same bar,
/// so each worker thread can hold its own handle.
///
/// ```
/// use fast_progress::ProgressTracker;
///
/// let bar = ProgressTracker::builder(3u64).with_output(std::io::sink()).build();
/// for _ in 0..3 {
///     bar.advance();
/// }
/// assert_eq!(bar.get_last_percent(), 100);
/// ```
#[derive(Clone)]
pub struct ProgressTracker {
    pub(crate) hot: Arc<Hot>,
    pub(crate) painter: Arc<Mutex<Painter>>,
}

/// Atomic state read and written on every [`ProgressTracker::advance`].
pub(crate) struct Hot {
    pub(crate) total: AtomicU64,
    pub(crate) completed: AtomicU64,
    pub(crate) last_percent: AtomicU8,
    pub(crate) style: AtomicU8,
    pub(crate) visible: AtomicBool,
}

impl Hot {
    pub(crate) fn new(total: u64, style: BarStyle, visible: bool) -> Self {
        Self {
            total: AtomicU64::new(total),
            completed: AtomicU64::new(0),
            last_percent: AtomicU8::new(0),
            style: AtomicU8::new(style as u8),
            visible: AtomicBool::new(visible),
        }
    }
}

/// `min(100, completed * 100 / total)`, rounded down.
///
/// `total` must be non-zero.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub(crate) fn percent_of(completed: u64, total: u64) -> u8 {
    let percent = u128::from(completed) * 100 / u128::from(total);
    percent.min(100) as u8
}

impl Default for ProgressTracker {
    /// An inactive tracker writing to stderr. Call
    /// [`set_total`](Self::set_total) before use.
    fn default() -> Self {
        ProgressBuilder::new(0u64).build()
    }
}

impl ProgressTracker {
    /// Creates a visible tracker over `total` units, writing to stderr.
    ///
    /// A `total` of zero makes the tracker inert until
    /// [`set_total`](Self::set_total) gives it a positive value.
    #[must_use]
    pub fn new(total: impl Into<u64>) -> Self {
        ProgressBuilder::new(total).build()
    }

    /// Starts a [`ProgressBuilder`] for `total` units.
    #[must_use]
    pub fn builder(total: impl Into<u64>) -> ProgressBuilder {
        ProgressBuilder::new(total)
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Sets the total, the visibility of the bar and the output sink.
    pub fn configure(&self, total: u64, visible: bool, sink: impl Write + Send + 'static) {
        self.set_total(total);
        self.set_visible(visible);
        self.set_output_sink(sink);
    }

    /// Sets the number of units that make up 100%. Zero deactivates the
    /// tracker.
    pub fn set_total(&self, total: u64) {
        log::trace!("progress total set to {total}");
        self.hot.total.store(total, Ordering::Relaxed);
    }

    /// Selects a style by index. Out-of-range indices are clamped into
    /// `0..BarStyle::COUNT`.
    pub fn set_style(&self, index: i64) {
        self.set_bar_style(BarStyle::from_index(index));
    }

    /// Selects a style.
    pub fn set_bar_style(&self, style: BarStyle) {
        self.hot.style.store(style as u8, Ordering::Relaxed);
    }

    /// Shows or hides the graphical bar. The percentage is always printed.
    pub fn set_visible(&self, visible: bool) {
        self.hot.visible.store(visible, Ordering::Relaxed);
    }

    /// Replaces the output sink.
    ///
    /// Waits for an in-flight frame to finish writing.
    pub fn set_output_sink(&self, sink: impl Write + Send + 'static) {
        self.painter.lock().set_sink(Box::new(sink) as Sink);
    }

    /// Zeroes the completed count and the last-shown percentage so the
    /// tracker can drive another run.
    ///
    /// Must not race with [`advance`](Self::advance) calls from other
    /// threads.
    pub fn reset(&self) {
        log::trace!("progress reset");
        self.hot.completed.store(0, Ordering::Relaxed);
        self.hot.last_percent.store(0, Ordering::Relaxed);
        self.painter.lock().rewind();
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Gets the total unit count.
    #[must_use]
    pub fn get_total(&self) -> u64 {
        self.hot.total.load(Ordering::Relaxed)
    }

    /// Gets the number of units completed so far.
    #[must_use]
    pub fn get_pos(&self) -> u64 {
        self.hot.completed.load(Ordering::Relaxed)
    }

    /// Gets the last percentage claimed for rendering.
    ///
    /// A claimed frame may have been skipped because the render lock was
    /// busy; this is still the value the display is converging on.
    #[must_use]
    pub fn get_last_percent(&self) -> u8 {
        self.hot.last_percent.load(Ordering::Relaxed)
    }

    /// Gets the current style.
    #[must_use]
    pub fn get_style(&self) -> BarStyle {
        BarStyle::from_repr(self.hot.style.load(Ordering::Relaxed))
    }

    /// Whether the graphical bar is rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.hot.visible.load(Ordering::Relaxed)
    }

    // ========================================================================
    // Hot Path
    // ========================================================================

    /// Records one completed unit of work, repainting if this unit moved the
    /// display to a new percentage.
    #[inline]
    pub fn advance(&self) {
        self.advance_by(1);
    }

    /// Records `units` completed units at once.
    pub fn advance_by(&self, units: u64) {
        let total = self.hot.total.load(Ordering::Relaxed);
        if total == 0 || units == 0 {
            return;
        }

        let old = self.hot.completed.fetch_add(units, Ordering::Relaxed);
        let percent = percent_of(old.saturating_add(units), total);

        let last = self.hot.last_percent.load(Ordering::Relaxed);
        if percent <= last {
            return;
        }

        if percent >= 100 {
            // Exactly one caller sees the previous value below 100.
            if self.hot.last_percent.fetch_max(100, Ordering::Relaxed) < 100 {
                let mut painter = self.painter.lock();
                self.paint(&mut painter, 100);
            }
            return;
        }

        // A lost (or spurious) CAS means someone else moved the marker; the
        // next boundary supersedes this one, so there is no retry.
        if self
            .hot
            .last_percent
            .compare_exchange_weak(last, percent, Ordering::Relaxed, Ordering::Relaxed)
            .is_err()
        {
            return;
        }

        if let Some(mut painter) = self.painter.try_lock() {
            self.paint(&mut painter, percent);
        }
    }

    fn paint(&self, painter: &mut Painter, percent: u8) {
        let bar = self.is_visible().then(|| self.get_style());
        if let Err(err) = painter.paint(percent, bar) {
            log_write_error(percent, &err);
        }
    }
}

fn log_write_error(percent: u8, err: &io::Error) {
    log::debug!("failed to paint progress frame at {percent}%: {err}");
}
