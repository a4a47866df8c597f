//! Shared helpers for tests that need real blocking I/O

use crossbeam::channel::Receiver;
use std::io::{self, Read, Write};
use std::sync::{Arc, Mutex};

/// A `Write` sink whose contents can be inspected from another handle
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(pub(crate) Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A stream that blocks on `read` until the test sends more bytes, like a
/// terminal waiting for the player. Dropping the sender ends the stream.
pub(crate) struct ChannelStream {
    chunks: Receiver<Vec<u8>>,
    pending: Vec<u8>,
}

impl ChannelStream {
    pub(crate) fn new(chunks: Receiver<Vec<u8>>) -> Self {
        Self {
            chunks,
            pending: Vec::new(),
        }
    }
}

impl Read for ChannelStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pending.is_empty() {
            match self.chunks.recv() {
                Ok(chunk) => self.pending = chunk,
                Err(_) => return Ok(0),
            }
        }
        let n = buf.len().min(self.pending.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        Ok(n)
    }
}
