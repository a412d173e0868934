//! Input and output capabilities used by `print` and `read()`.
//!
//! The evaluator never touches stdin or stdout directly. The CLI hands it a
//! [`LineWriter`] over stdout and a [`TokenReader`] over stdin; tests capture
//! output in a `Vec<String>` and feed input from an in-memory cursor.

use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// Receives the lines produced by `print`.
pub trait OutputSink {
    /// Emits one line of output. The line does not include a terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Supplies whitespace-delimited tokens to `read()`.
pub trait InputSource {
    /// Returns the next token, blocking until one is available, or `None` at
    /// end of input.
    fn next_token(&mut self) -> io::Result<Option<String>>;
}

/// Captures printed lines in memory.
impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes each line, newline-terminated, to any [`Write`] implementation.
pub struct LineWriter<W: Write> {
    inner: W,
}

impl<W: Write> LineWriter<W> {
    /// Wraps a writer.
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputSink for LineWriter<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")?;
        self.inner.flush()
    }
}

/// Splits a buffered reader into whitespace-separated tokens.
///
/// Lines are read lazily, so reading from stdin only blocks when the tokens
/// of the previous line have been used up.
pub struct TokenReader<R: BufRead> {
    reader:  R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self { reader,
               pending: VecDeque::new() }
    }
}

impl<R: BufRead> InputSource for TokenReader<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// An input source that is always exhausted, for programs that never read.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn token_reader_spans_lines() {
        let mut reader = TokenReader::new(Cursor::new("1 2\n\n  3.5\n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("1"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("3.5"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn line_writer_terminates_lines() {
        let mut writer = LineWriter::new(Vec::new());
        writer.write_line("a").unwrap();
        writer.write_line("b").unwrap();
        assert_eq!(writer.into_inner(), b"a\nb\n");
    }

    #[test]
    fn vec_sink_captures_lines() {
        let mut sink: Vec<String> = Vec::new();
        sink.write_line("hello").unwrap();
        assert_eq!(sink, ["hello"]);
    }

    #[test]
    fn no_input_is_empty() {
        assert_eq!(NoInput.next_token().unwrap(), None);
    }
}
