#![allow(non_snake_case)]

use super::*;
use crate::value::ValueType;

fn emit_with(style: &AnnotationStyle, ending: LineEnding, code: &str, prefix: &str) -> (String, usize) {
    let mut out = String::new();
    let mut emitter = Emitter::new(&mut out, ending, style);
    emitter.emit(code, prefix);
    let lines = emitter.lines();
    (out, lines)
}

fn plain() -> AnnotationStyle {
    AnnotationStyle {
        suffix: String::new(),
        ..AnnotationStyle::default()
    }
}

#[test]
fn LineEnding___detect___crlf_when_any_crlf_present() {
    assert_eq!(LineEnding::detect("a\r\nb\n"), LineEnding::CrLf);
    assert_eq!(LineEnding::detect("a\nb\n"), LineEnding::Lf);
    assert_eq!(LineEnding::detect(""), LineEnding::Lf);
}

#[test]
fn AnnotationStyle___applies_to___skips_short_lines() {
    let style = AnnotationStyle::default();

    assert!(!style.applies_to("  }"));
    assert!(!style.applies_to("12345678"));
    assert!(style.applies_to("123456789"));
}

#[test]
fn AnnotationStyle___applies_to___skips_comment_lines() {
    let style = AnnotationStyle::default();

    assert!(!style.applies_to("    /// <summary>The tint</summary>"));
    assert!(!style.applies_to("   * @param {number} actor"));
    assert!(style.applies_to("    float speed = 1f;"));
}

#[test]
fn AnnotationStyle___applies_to___disabled_by_empty_suffix() {
    assert!(!plain().applies_to("    float speed = 1f;"));
}

#[test]
fn Emitter___emit___prefixes_and_annotates_lines() {
    let (out, lines) = emit_with(
        &AnnotationStyle::default(),
        LineEnding::Lf,
        "float speed = 1f;\n}",
        "    ",
    );

    assert_eq!(out, "    float speed = 1f;    // GENERATED\n    }\n");
    assert_eq!(lines, 2);
}

#[test]
fn Emitter___emit___drops_leading_newline_only() {
    let (out, _) = emit_with(&plain(), LineEnding::Lf, "\nfirst\n\nsecond", "");

    assert_eq!(out, "first\n\nsecond\n");
}

#[test]
fn Emitter___emit___drops_whitespace_only_lines() {
    let (out, lines) = emit_with(&plain(), LineEnding::Lf, "a\n    \nb", "  ");

    assert_eq!(out, "  a\n  b\n");
    assert_eq!(lines, 2);
}

#[test]
fn Emitter___emit___empty_lines_are_blank_without_prefix() {
    let (out, _) = emit_with(&plain(), LineEnding::Lf, "a\n\nb", "  ");

    assert_eq!(out, "  a\n\n  b\n");
}

#[test]
fn Emitter___emit___trailing_newline_yields_blank_line() {
    let (out, lines) = emit_with(&plain(), LineEnding::Lf, "a\n", "");

    assert_eq!(out, "a\n\n");
    assert_eq!(lines, 2);
}

#[test]
fn Emitter___emit___writes_crlf_for_crlf_targets() {
    let (out, _) = emit_with(&plain(), LineEnding::CrLf, "a\r\nb", "");

    assert_eq!(out, "a\r\nb\r\n");
}

#[test]
fn Emitter___emit_field___expands_placeholders() {
    let field = FieldDescriptor::new("speed", ValueType::Float);
    let style = plain();
    let mut out = String::new();
    let mut emitter = Emitter::new(&mut out, LineEnding::Lf, &style);

    emitter.emit_field("GenCsType genField;", "\t", &field);

    assert_eq!(out, "\tfloat speed;\n");
}
