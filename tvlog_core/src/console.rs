//! Line-oriented console over arbitrary reader and writer.

use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors reading from or writing to the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed")]
    Closed,
}

/// Prompt/answer console.
///
/// Stdin and stdout in the binary, in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` without a newline and read one answer line.
    ///
    /// The line terminator is stripped; other whitespace is kept.
    pub fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print `text` as is.
    pub fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.output, "{text}")?;
        Ok(())
    }

    /// Consume the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
