#![allow(non_snake_case)]

use super::*;

fn output(writer: IndentedTextWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn IndentedTextWriter___write_line___prefixes_indent() {
    let mut writer = IndentedTextWriter::new(Vec::new());

    writer.set_indent(2);
    writer.write_line("x").unwrap();

    assert_eq!(output(writer), "        x\n");
}

#[test]
fn IndentedTextWriter___consecutive_writes___share_one_prefix() {
    let mut writer = IndentedTextWriter::new(Vec::new());
    writer.set_indent(1);

    writer.write("a").unwrap();
    writer.write("b").unwrap();
    writer.write_line("c").unwrap();

    assert_eq!(output(writer), "    abc\n");
}

#[test]
fn IndentedTextWriter___indent_change_mid_line___applies_to_next_line() {
    let mut writer = IndentedTextWriter::new(Vec::new());

    writer.write("a").unwrap();
    writer.set_indent(1);
    writer.write_line("b").unwrap();
    writer.write_line("c").unwrap();

    assert_eq!(output(writer), "ab\n    c\n");
}

#[test]
fn IndentedTextWriter___empty_line___has_no_trailing_whitespace() {
    let mut writer = IndentedTextWriter::new(Vec::new());
    writer.set_indent(3);

    writer.write_empty_line().unwrap();
    writer.write_line("").unwrap();

    assert_eq!(output(writer), "\n\n");
}

#[test]
fn IndentedTextWriter___custom_unit_and_newline___are_used() {
    let mut writer = IndentedTextWriter::new(Vec::new())
        .with_unit("\t")
        .with_newline("\r\n");
    writer.set_indent(2);

    writer.write_line("x").unwrap();

    assert_eq!(output(writer), "\t\tx\r\n");
}

fn emit_indented<S: IndentedSink>(mut sink: S) {
    sink.set_indent(1);
    sink.write_line("x").unwrap();
}

#[test]
fn IndentedTextWriter___through_mut_reference___shares_state() {
    let mut writer = IndentedTextWriter::new(Vec::new());

    emit_indented(&mut writer);

    assert_eq!(writer.indent(), 1);
    assert_eq!(output(writer), "    x\n");
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn IndentedTextWriter___inner_failure___propagates() {
    let mut writer = IndentedTextWriter::new(FailingWriter);

    let err = writer.write_line("x").unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}
