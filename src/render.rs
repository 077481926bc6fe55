//! Frame formatting and the state guarded by the render lock.
//!
//! A frame is `\r`, optionally a bar and a space, then `<percent>%`. No
//! newline is ever written. The [`Painter`] owns the output sink and a
//! reusable frame buffer, and is only reachable through the tracker's
//! mutex, so at most one frame is being written at any time.

use std::io::{self, Write};

use crate::style::BarStyle;

/// A boxed output destination.
pub type Sink = Box<dyn Write + Send>;

pub(crate) struct Painter {
    sink: Sink,
    frame: Vec<u8>,
    /// Highest percentage written during the current run.
    painted: u8,
}

impl Painter {
    pub(crate) fn new(sink: Sink) -> Self {
        Self {
            sink,
            frame: Vec::with_capacity(crate::style::BAR_LEN + 8),
            painted: 0,
        }
    }

    pub(crate) fn set_sink(&mut self, sink: Sink) {
        self.sink = sink;
    }

    pub(crate) fn rewind(&mut self) {
        self.painted = 0;
    }

    /// Writes the frame for `percent` unless a frame at or above it was
    /// already written this run.
    ///
    /// Returns `Ok(false)` when the frame was stale and skipped.
    pub(crate) fn paint(&mut self, percent: u8, bar: Option<BarStyle>) -> io::Result<bool> {
        if percent <= self.painted {
            return Ok(false);
        }
        self.painted = percent;

        format_frame(&mut self.frame, percent, bar);
        self.sink.write_all(&self.frame)?;
        self.sink.flush()?;
        Ok(true)
    }
}

/// Formats one frame into `buf`, replacing its contents.
pub fn format_frame(buf: &mut Vec<u8>, percent: u8, bar: Option<BarStyle>) {
    buf.clear();
    buf.push(b'\r');
    if let Some(style) = bar {
        buf.extend_from_slice(style.bar(percent));
        buf.push(b' ');
    }
    push_decimal(buf, percent);
    buf.push(b'%');
}

fn push_decimal(buf: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        buf.push(b'0' + value / 100);
    }
    if value >= 10 {
        buf.push(b'0' + (value / 10) % 10);
    }
    buf.push(b'0' + value % 10);
}

#[cfg(test)]
mod tests {
    use super::{Painter, format_frame};
    use crate::{style::BarStyle, testing::SharedBuffer};

    fn frame(percent: u8, bar: Option<BarStyle>) -> String {
        let mut buf = Vec::new();
        format_frame(&mut buf, percent, bar);
        String::from_utf8(buf).unwrap()
    }

    /// Frame Layout
    /// Checks the exact bytes for the bar and number-only layouts.
    #[test]
    fn test_frame_layout() {
        assert_eq!(frame(7, None), "\r7%");
        assert_eq!(frame(42, None), "\r42%");
        assert_eq!(frame(100, None), "\r100%");

        let half = frame(50, Some(BarStyle::Equals));
        assert_eq!(
            half,
            "\r[=========================                         ] 50%"
        );
        assert!(!half.contains('\n'));

        let full = frame(100, Some(BarStyle::Hash));
        assert_eq!(
            full,
            "\r[##################################################] 100%"
        );
    }

    /// Stale Frames
    /// A painter never writes a percentage at or below what it already wrote.
    #[test]
    fn test_painter_drops_stale() {
        let out = SharedBuffer::default();
        let mut painter = Painter::new(Box::new(out.clone()));

        assert!(painter.paint(5, None).unwrap());
        assert!(!painter.paint(3, None).unwrap());
        assert!(!painter.paint(5, None).unwrap());
        assert!(painter.paint(6, None).unwrap());
        assert_eq!(out.contents(), "\r5%\r6%");

        painter.rewind();
        assert!(painter.paint(1, None).unwrap());
        assert_eq!(out.percentages(), vec![5, 6, 1]);
    }
}
