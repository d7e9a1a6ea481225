//! Line-oriented access to captured tool output
//!
//! The parsers consume output one line at a time so that a long history or
//! labels listing never has to be held in memory as a whole.

use std::io::BufRead;

use super::TfError;

/// Forward-only line reader over captured TF output
///
/// Yields lines with their terminators stripped and signals end of stream
/// with `None`. The underlying reader is owned by the source and released
/// when the source goes out of scope, on success and failure alike.
pub struct LineSource<R: BufRead> {
    reader: R,
    buf: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    /// Read the next line, or `None` at end of stream
    ///
    /// Strips a trailing `\n` or `\r\n`. Interior carriage returns are
    /// preserved; the tool never emits them.
    pub fn next_line(&mut self) -> Result<Option<String>, TfError> {
        self.buf.clear();
        let read = self.reader.read_line(&mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        if self.buf.ends_with('\n') {
            self.buf.pop();
            if self.buf.ends_with('\r') {
                self.buf.pop();
            }
        }
        Ok(Some(self.buf.clone()))
    }
}
