use core::fmt;
use std::io;

/// Adapts an `io::Write` sink to `fmt::Write`, keeping the first I/O error
/// so it can be reported instead of the opaque `fmt::Error`.
pub struct IoWriter<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: io::Write> fmt::Write for IoWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
