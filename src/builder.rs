//! Fluent interface for constructing [`ProgressTracker`] instances.
//!
//! [`ProgressTracker::new`] covers the common case (visible bar, `=` fill,
//! stderr). The [`ProgressBuilder`] sets the rest up front so a tracker is
//! fully configured before it is shared with worker threads.

use std::{
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

use crate::{
    progress::{Hot, ProgressTracker},
    render::{Painter, Sink},
    style::BarStyle,
};

/// A builder for [`ProgressTracker`].
pub struct ProgressBuilder {
    total: u64,
    visible: bool,
    style: BarStyle,
    output: Option<Sink>,
}

impl ProgressBuilder {
    /// Starts a builder for `total` units. Zero builds an inactive tracker.
    #[must_use]
    pub fn new(total: impl Into<u64>) -> Self {
        Self {
            total: total.into(),
            visible: true,
            style: BarStyle::default(),
            output: None,
        }
    }

    /// Shows or hides the graphical bar (default: shown).
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the fill style (default: [`BarStyle::Equals`]).
    #[must_use]
    pub const fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the output sink (default: stderr).
    #[must_use]
    pub fn with_output(mut self, output: impl Write + Send + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Consumes the builder and returns the tracker.
    #[must_use]
    pub fn build(self) -> ProgressTracker {
        let sink = self
            .output
            .unwrap_or_else(|| Box::new(io::stderr()) as Sink);

        ProgressTracker {
            hot: Arc::new(Hot::new(self.total, self.style, self.visible)),
            painter: Arc::new(Mutex::new(Painter::new(sink))),
        }
    }
}
