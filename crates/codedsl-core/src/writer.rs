//! Template-aware writer over an [`IndentedSink`]

use crate::sink::IndentedSink;
use crate::template::Template;
use std::fmt::Display;
use std::io;

/// Writes templates and multi-line text through an [`IndentedSink`]
///
/// Text may contain embedded line breaks (`\n` or `\r\n`); every physical
/// line it produces gets the sink's current indent. [`write`](Self::write)
/// leaves the last line open so a later call can continue it, the
/// `write_line*` methods always end it.
pub struct CodeWriter<'a, S: IndentedSink + ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: IndentedSink + ?Sized> CodeWriter<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }

    pub fn indent(&self) -> usize {
        self.sink.indent()
    }

    pub fn set_indent(&mut self, level: usize) {
        self.sink.set_indent(level);
    }

    pub fn push_indent(&mut self) {
        let level = self.sink.indent();
        self.sink.set_indent(level + 1);
    }

    /// Lower the indent by one level, stopping at zero
    pub fn pop_indent(&mut self) {
        let level = self.sink.indent();
        self.sink.set_indent(level.saturating_sub(1));
    }

    /// Render `template` and write it, leaving the last line open
    pub fn write<const N: usize>(
        &mut self,
        template: &Template<N>,
        args: [&dyn Display; N],
    ) -> io::Result<()> {
        self.write_text(&template.render(args))
    }

    /// Render `template` and write it, ending every line
    pub fn write_line_with<const N: usize>(
        &mut self,
        template: &Template<N>,
        args: [&dyn Display; N],
    ) -> io::Result<()> {
        self.write_line_text(&template.render(args))
    }

    /// End the current line
    pub fn write_line(&mut self) -> io::Result<()> {
        self.sink.write_empty_line()
    }

    /// Write `text` verbatim, leaving the last line open
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut lines = physical_lines(text).peekable();
        while let Some(line) = lines.next() {
            if lines.peek().is_some() {
                self.sink.write_line(line)?;
            } else {
                self.sink.write(line)?;
            }
        }
        Ok(())
    }

    /// Write `text` verbatim, ending every line
    pub fn write_line_text(&mut self, text: &str) -> io::Result<()> {
        for line in physical_lines(text) {
            self.sink.write_line(line)?;
        }
        Ok(())
    }
}

fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
#[path = "writer/writer_tests.rs"]
mod writer_tests;
