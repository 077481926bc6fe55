//! In-memory sink shared between a tracker and the test inspecting it.

use std::{
    io::{self, Write},
    sync::Arc,
};

use parking_lot::Mutex;

#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }

    /// Every frame written so far, without the leading `\r`.
    pub(crate) fn frames(&self) -> Vec<String> {
        self.contents()
            .split('\r')
            .skip(1)
            .map(str::to_owned)
            .collect()
    }

    /// The percentage printed by every frame, in write order.
    pub(crate) fn percentages(&self) -> Vec<u8> {
        self.frames()
            .iter()
            .map(|frame| {
                let digits = frame
                    .strip_suffix('%')
                    .unwrap()
                    .rsplit(' ')
                    .next()
                    .unwrap();
                digits.parse().unwrap()
            })
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
