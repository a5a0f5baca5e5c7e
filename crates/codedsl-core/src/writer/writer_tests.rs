#![allow(non_snake_case)]

use super::*;
use crate::sink::IndentedTextWriter;

fn render(f: impl FnOnce(&mut CodeWriter<'_, IndentedTextWriter<Vec<u8>>>)) -> String {
    let mut sink = IndentedTextWriter::new(Vec::new());
    let mut writer = CodeWriter::new(&mut sink);
    f(&mut writer);
    String::from_utf8(sink.into_inner()).unwrap()
}

#[test]
fn CodeWriter___write_then_write___continues_same_line() {
    let header = Template::<1>::parse("class {0}").unwrap();

    let out = render(|w| {
        w.write(&header, [&"Deposited"]).unwrap();
        w.write_text(" : IEvent").unwrap();
        w.write_line().unwrap();
    });

    assert_eq!(out, "class Deposited : IEvent\n");
}

#[test]
fn CodeWriter___write_multiline___indents_every_line_and_leaves_last_open() {
    let header = Template::<1>::parse("\n[ProtoContract]\npublic sealed class {0}").unwrap();

    let out = render(|w| {
        w.set_indent(1);
        w.write(&header, [&"Deposited"]).unwrap();
        w.write_text(" : IEvent").unwrap();
        w.write_line().unwrap();
    });

    assert_eq!(
        out,
        "\n    [ProtoContract]\n    public sealed class Deposited : IEvent\n"
    );
}

#[test]
fn CodeWriter___write_line_with___terminates_every_line() {
    let ctor = Template::<1>::parse("\nprivate {0} () {{}}").unwrap();

    let out = render(|w| {
        w.set_indent(1);
        w.write_line_with(&ctor, [&"Deposited"]).unwrap();
        w.write_text("next").unwrap();
    });

    assert_eq!(out, "\n    private Deposited () {}\n    next");
}

#[test]
fn CodeWriter___crlf_in_template___splits_like_lf() {
    let header = Template::<1>::parse("[ProtoContract]\r\nclass {0}").unwrap();

    let out = render(|w| {
        w.write_line_with(&header, [&"A"]).unwrap();
    });

    assert_eq!(out, "[ProtoContract]\nclass A\n");
}

#[test]
fn CodeWriter___literal_text_with_braces___passes_through() {
    let out = render(|w| {
        w.write_line_text("private A () {}").unwrap();
        w.write_line_text("{0} stays {{ as is }}").unwrap();
    });

    assert_eq!(out, "private A () {}\n{0} stays {{ as is }}\n");
}

#[test]
fn CodeWriter___write_text_ending_in_newline___leaves_line_start() {
    let out = render(|w| {
        w.set_indent(1);
        w.write_text("a\n").unwrap();
        w.write_text("b").unwrap();
    });

    assert_eq!(out, "    a\n    b");
}

#[test]
fn CodeWriter___write_line_text_empty___emits_blank_line() {
    let out = render(|w| {
        w.write_line_text("").unwrap();
        w.write_line().unwrap();
    });

    assert_eq!(out, "\n\n");
}

#[test]
fn CodeWriter___indent_change___affects_only_later_lines() {
    let out = render(|w| {
        w.write_line_text("{").unwrap();
        w.push_indent();
        w.write_line_text("body;").unwrap();
        w.pop_indent();
        w.write_line_text("}").unwrap();
    });

    assert_eq!(out, "{\n    body;\n}\n");
}

#[test]
fn CodeWriter___pop_indent_at_zero___stays_at_zero() {
    let mut sink = IndentedTextWriter::new(Vec::new());
    let mut writer = CodeWriter::new(&mut sink);

    writer.pop_indent();

    assert_eq!(writer.indent(), 0);
}

#[test]
fn CodeWriter___over_dyn_sink___writes_through() {
    let mut sink = IndentedTextWriter::new(Vec::new());
    {
        let dyn_sink: &mut dyn IndentedSink = &mut sink;
        let mut writer = CodeWriter::new(dyn_sink);
        writer.push_indent();
        writer.write_line_text("x").unwrap();
    }

    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "    x\n");
}
