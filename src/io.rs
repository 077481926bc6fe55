//! I/O wrappers that count bytes as units of work.
//!
//! A byte stream maps onto the tracker's unit model directly: the total is
//! the expected byte count and every successful transfer of `n` bytes is
//! [`ProgressTracker::advance_by`]`(n)`. Short reads and writes therefore
//! advance by what actually moved, and a failed call advances by nothing.
//!
//! [`ProgressReader::open`] sizes the run from file metadata;
//! [`ProgressReader::with_len`] and [`ProgressWriter::with_len`] size it from
//! a length the caller already knows (e.g. a `Content-Length`).
//!
//! ```no_run
//! use std::io;
//!
//! use fast_progress::{ProgressTracker, io::ProgressReader};
//!
//! let mut src = ProgressReader::open("input.bin", ProgressTracker::default())?;
//! io::copy(&mut src, &mut io::sink())?;
//! eprintln!();
//! # Ok::<(), io::Error>(())
//! ```

use std::{
    fs::File,
    io::{self, BufRead, IoSlice, Read, Write},
    path::Path,
};

use crate::ProgressTracker;

/// Starts a fresh run of `len` units on `tracker`.
fn begin_run(tracker: &ProgressTracker, len: u64) {
    tracker.reset();
    tracker.set_total(len);
}

/// A [`Read`] pass-through that advances a tracker by the bytes read.
///
/// Also implements [`BufRead`] when the inner reader does; there the bytes
/// count when they are [consumed](BufRead::consume), not when the buffer is
/// filled.
pub struct ProgressReader<R> {
    inner: R,
    tracker: ProgressTracker,
}

impl<R> ProgressReader<R> {
    /// Wraps `inner`, leaving the tracker's total and position untouched.
    pub const fn new(inner: R, tracker: ProgressTracker) -> Self {
        Self { inner, tracker }
    }

    /// Wraps `inner` and starts a new run of `len` bytes on `tracker`.
    pub fn with_len(inner: R, tracker: ProgressTracker, len: u64) -> Self {
        begin_run(&tracker, len);
        Self::new(inner, tracker)
    }

    /// The tracker being advanced.
    pub const fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// Gets a reference to the wrapped reader.
    pub const fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Gets a mutable reference to the wrapped reader.
    ///
    /// Bytes read through it directly are not counted.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl ProgressReader<File> {
    /// Opens `path` and starts a run sized to the file's length.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or its metadata read.
    pub fn open(path: impl AsRef<Path>, tracker: ProgressTracker) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let len = file.metadata()?.len();
        log::trace!("tracking {} ({len} bytes)", path.as_ref().display());
        Ok(Self::with_len(file, tracker, len))
    }
}

impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.tracker.advance_by(n as u64);
        Ok(n)
    }
}

impl<R: BufRead> BufRead for ProgressReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt);
        self.tracker.advance_by(amt as u64);
    }
}

/// A [`Write`] pass-through that advances a tracker by the bytes written.
pub struct ProgressWriter<W> {
    inner: W,
    tracker: ProgressTracker,
}

impl<W> ProgressWriter<W> {
    /// Wraps `inner`, leaving the tracker's total and position untouched.
    pub const fn new(inner: W, tracker: ProgressTracker) -> Self {
        Self { inner, tracker }
    }

    /// Wraps `inner` and starts a new run of `len` bytes on `tracker`.
    pub fn with_len(inner: W, tracker: ProgressTracker, len: u64) -> Self {
        begin_run(&tracker, len);
        Self::new(inner, tracker)
    }

    /// The tracker being advanced.
    pub const fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// Gets a reference to the wrapped writer.
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for ProgressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.tracker.advance_by(n as u64);
        Ok(n)
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        let n = self.inner.write_vectored(bufs)?;
        self.tracker.advance_by(n as u64);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufRead as _, Cursor, IoSlice, Read as _, Write};

    use super::{ProgressReader, ProgressWriter};
    use crate::{ProgressTracker, testing::SharedBuffer};

    fn hidden(out: &SharedBuffer) -> ProgressTracker {
        ProgressTracker::builder(0u64)
            .with_visible(false)
            .with_output(out.clone())
            .build()
    }

    /// Reader Tracking
    /// A sized run reaches 100% exactly when the source is drained.
    #[test]
    fn test_io_reader() {
        let out = SharedBuffer::default();
        let data = vec![0u8; 100];
        let mut reader = ProgressReader::with_len(Cursor::new(&data), hidden(&out), 100);

        let mut buf = [0u8; 10];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(reader.tracker().get_pos(), 10);

        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        assert_eq!(reader.tracker().get_pos(), 100);

        let percentages = out.percentages();
        assert_eq!(percentages.first(), Some(&10));
        assert_eq!(percentages.last(), Some(&100));
    }

    /// Buffered reads count consumed bytes, not filled ones.
    #[test]
    fn test_buf_reader_counts_consumed() {
        let out = SharedBuffer::default();
        let text = "alpha\nbeta\ngamma\n";
        let mut reader =
            ProgressReader::with_len(Cursor::new(text), hidden(&out), text.len() as u64);

        assert_eq!(reader.fill_buf().unwrap().len(), text.len());
        assert_eq!(reader.tracker().get_pos(), 0);

        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "alpha\n");
        assert_eq!(reader.tracker().get_pos(), 6);

        let lines: Vec<String> = reader.by_ref().lines().map(Result::unwrap).collect();
        assert_eq!(lines, ["beta", "gamma"]);
        assert_eq!(reader.tracker().get_pos(), text.len() as u64);
        assert_eq!(out.percentages().last(), Some(&100));
    }

    /// Reusing a tracker for a second transfer starts it from zero.
    #[test]
    fn test_with_len_restarts_run() {
        let out = SharedBuffer::default();
        let tracker = hidden(&out);

        let mut first = ProgressWriter::with_len(Vec::new(), tracker.clone(), 4);
        first.write_all(b"abcd").unwrap();
        assert_eq!(tracker.get_last_percent(), 100);

        let mut second = ProgressWriter::with_len(Vec::new(), tracker.clone(), 8);
        assert_eq!(tracker.get_pos(), 0);
        assert_eq!(tracker.get_total(), 8);
        second.write_all(b"efgh").unwrap();

        assert_eq!(out.contents(), "\r100%\r50%");
        assert_eq!(second.into_inner(), b"efgh");
    }

    /// A writer accepting fewer bytes than offered advances by what it took.
    struct Trickle(Vec<u8>);

    impl Write for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(3);
            self.0.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Writer Tracking
    /// Short and vectored writes count only the bytes accepted.
    #[test]
    fn test_io_writer_short_writes() {
        let out = SharedBuffer::default();
        let mut writer = ProgressWriter::with_len(Trickle(Vec::new()), hidden(&out), 10);

        assert_eq!(writer.write(b"12345").unwrap(), 3);
        assert_eq!(writer.tracker().get_pos(), 3);

        let n = writer
            .write_vectored(&[IoSlice::new(b"67"), IoSlice::new(b"890")])
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(writer.tracker().get_pos(), 5);

        writer.write_all(b"abcde").unwrap();
        assert_eq!(writer.tracker().get_pos(), 10);
        assert_eq!(writer.get_ref().0, b"12367abcde");
        assert_eq!(out.percentages(), vec![30, 50, 80, 100]);
    }

    #[test]
    fn test_open_missing_file() {
        let err = ProgressReader::open("/definitely/not/here.bin", ProgressTracker::default())
            .err()
            .unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
