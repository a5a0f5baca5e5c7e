//! Indentation-aware output sinks

use std::io::{self, Write};

/// Indent unit used by [`IndentedTextWriter::new`]
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Line-oriented output that prefixes each line with the current indent
///
/// The indent level belongs to the sink instance. Changing it affects only
/// lines started after the change; the unit and the line break are the
/// sink's business.
pub trait IndentedSink {
    /// Write text without ending the line
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write text and end the line
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// End the current line
    fn write_empty_line(&mut self) -> io::Result<()> {
        self.write_line("")
    }

    fn indent(&self) -> usize;

    fn set_indent(&mut self, level: usize);
}

/// [`IndentedSink`] over any [`io::Write`]
///
/// Indentation is written lazily, when the first non-empty text of a line
/// arrives, so blank lines carry no trailing whitespace.
#[derive(Debug)]
pub struct IndentedTextWriter<W> {
    inner: W,
    unit: String,
    newline: String,
    level: usize,
    at_line_start: bool,
}

impl<W: Write> IndentedTextWriter<W> {
    /// Wrap `inner` with four-space indentation and `\n` line breaks
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            unit: DEFAULT_INDENT_UNIT.to_string(),
            newline: "\n".to_string(),
            level: 0,
            at_line_start: true,
        }
    }

    /// Use `unit` for each indent level (e.g. `"\t"`)
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Use `newline` as the line break (e.g. `"\r\n"`)
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Unwrap the writer without flushing it
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_indent(&mut self) -> io::Result<()> {
        for _ in 0..self.level {
            self.inner.write_all(self.unit.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: Write> IndentedSink for IndentedTextWriter<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if self.at_line_start {
            self.write_indent()?;
            self.at_line_start = false;
        }
        self.inner.write_all(text.as_bytes())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.inner.write_all(self.newline.as_bytes())?;
        self.at_line_start = true;
        Ok(())
    }

    fn indent(&self) -> usize {
        self.level
    }

    fn set_indent(&mut self, level: usize) {
        self.level = level;
    }
}

impl<S: IndentedSink + ?Sized> IndentedSink for &mut S {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn write_empty_line(&mut self) -> io::Result<()> {
        (**self).write_empty_line()
    }

    fn indent(&self) -> usize {
        (**self).indent()
    }

    fn set_indent(&mut self, level: usize) {
        (**self).set_indent(level)
    }
}

#[cfg(test)]
#[path = "sink/sink_tests.rs"]
mod sink_tests;
