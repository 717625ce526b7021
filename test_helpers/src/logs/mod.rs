//! Capturing `tracing` output in tests.
//!
//! Each capture installs a plain-text `fmt` subscriber as the thread-local
//! default for the duration of a closure and returns everything it wrote.
//! Nothing global is touched, so captures on different test threads do not
//! interfere.
//!
//! # Examples
//!
//! ```
//! use test_helpers::logs;
//!
//! let (value, output) = logs::capture(|| {
//!     tracing::warn!("careful");
//!     7
//! });
//! assert_eq!(value, 7);
//! assert!(output.contains("WARN"));
//! assert!(output.contains("careful"));
//! ```

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink handed to the `fmt` subscriber.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    /// Everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a capturing subscriber and returns its result alongside the
/// captured output.
pub fn capture<F, R>(f: F) -> (R, String)
where
    F: FnOnce() -> R,
{
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

/// Like [`capture`], but expects `f` to panic.
///
/// Returns the panic message (when it was a string) and the output logged
/// before the panic. `None` means `f` returned normally or panicked with a
/// non-string payload.
pub fn capture_panic<F, R>(f: F) -> (Option<String>, String)
where
    F: FnOnce() -> R,
{
    let (outcome, output) = capture(|| panic::catch_unwind(AssertUnwindSafe(f)));
    let message = outcome.err().and_then(|payload| panic_message(payload.as_ref()));
    (message, output)
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_owned()))
}

#[cfg(test)]
mod tests;
