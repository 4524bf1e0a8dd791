use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented console. Blocks on input until a full line (or end of
/// input) arrives.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Prints `question` without a newline and returns the trimmed answer.
    /// End of input reads as an empty answer; bytes that are not UTF-8 are
    /// replaced rather than rejected.
    pub fn prompt(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        self.input.read_until(b'\n', &mut raw)?;
        Ok(String::from_utf8_lossy(&raw).trim().to_string())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
