//! Input sources
//!
//! Commands arrive as newline-terminated lines. Two sources exist:
//!
//! - [`BlockingSource`] reads straight from the stream and parks the caller
//!   until a line (or end of stream) arrives
//! - [`SharedBufferSource`] never blocks; it drains a one-line [`InputSlot`]
//!   that an [`InputReader`] thread keeps overwriting

use arcade_core::{ArcadeError, GameOverReason, GameStatus, Result};
use crossbeam::atomic::AtomicCell;
use std::io::BufRead;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Whether the caller is willing to wait for input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollMode {
    Blocking,
    NonBlocking,
}

/// Produces at most one command line per poll
pub trait InputSource: Send {
    /// Returns the next trimmed line, or `None` if none is available.
    ///
    /// For a blocking caller `None` means the stream is gone; for a
    /// non-blocking caller it only means nothing was typed.
    fn poll(&mut self, mode: PollMode) -> Option<String>;
}

/// Read one line and trim it. End of stream is reported as `InputClosed`.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(ArcadeError::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Blocks on the underlying stream for every poll, whatever the requested mode
pub struct BlockingSource<R> {
    reader: R,
}

impl<R: BufRead + Send> BlockingSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send> InputSource for BlockingSource<R> {
    fn poll(&mut self, _mode: PollMode) -> Option<String> {
        match read_trimmed_line(&mut self.reader) {
            Ok(line) => Some(line),
            Err(ArcadeError::InputClosed) => {
                debug!("input stream closed");
                None
            }
            Err(e) => {
                warn!(error = %e, "input read failed");
                None
            }
        }
    }
}

/// A single-line mailbox between the background reader and the input task.
///
/// Writes overwrite whatever is there (last write wins); a read takes the
/// value and leaves the slot empty. Lines written faster than they are
/// drained are lost.
#[derive(Default)]
pub struct InputSlot {
    line: AtomicCell<Option<String>>,
}

impl InputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot's content
    pub fn store(&self, line: String) {
        self.line.store(Some(line));
    }

    /// Take the slot's content, leaving it empty
    pub fn take(&self) -> Option<String> {
        self.line.take()
    }
}

/// Non-blocking source over an [`InputSlot`]
pub struct SharedBufferSource {
    slot: Arc<InputSlot>,
}

impl SharedBufferSource {
    pub fn new(slot: Arc<InputSlot>) -> Self {
        Self { slot }
    }
}

impl InputSource for SharedBufferSource {
    fn poll(&mut self, _mode: PollMode) -> Option<String> {
        self.slot.take().filter(|line| !line.is_empty())
    }
}

/// Background thread doing the blocking reads for a [`SharedBufferSource`].
///
/// GameOver is only checked once a read has completed: the first line whose
/// read finishes after the game ended is the acknowledgement and is not
/// stored. The thread also stops when the stream fails, recording
/// `input-error` itself. Joining it is how the time-sliced scheduler waits
/// for the post-game acknowledgement line.
pub struct InputReader {
    handle: JoinHandle<()>,
}

impl InputReader {
    pub fn spawn<R>(mut reader: R, slot: Arc<InputSlot>, status: Arc<GameStatus>) -> Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || loop {
                match read_trimmed_line(&mut reader) {
                    Ok(_) if status.is_over() => {
                        debug!("input reader exiting: game over acknowledged");
                        return;
                    }
                    Ok(line) => slot.store(line),
                    Err(e) => {
                        debug!(error = %e, "input reader stopped");
                        status.finish(GameOverReason::InputError);
                        return;
                    }
                }
            })?;

        Ok(Self { handle })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the reader thread to exit
    pub fn join(self) -> Result<()> {
        self.handle
            .join()
            .map_err(|_| ArcadeError::SchedulerError("input reader panicked".to_string()))
    }
}
