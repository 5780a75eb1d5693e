//! Output sink handed to generators
//!
//! An [`Emitter`] turns template text into target lines: it prefixes every
//! line with the region's indentation, tags generated lines with the
//! annotation suffix, and terminates lines with the target file's own line
//! ending.

use crate::error::GenResult;
use crate::schema::FieldDescriptor;
use crate::template::{fill_field_template, fill_field_template_with};
use serde::{Deserialize, Serialize};

/// Line terminator convention of a target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF if the text contains any CRLF pair, LF otherwise
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// How generated lines are tagged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationStyle {
    /// Appended to each tagged line; empty disables tagging
    pub suffix: String,

    /// Lines this short (template indentation included) are left untagged
    pub min_line_len: usize,

    /// A line containing any of these is left untagged
    pub comment_delimiters: Vec<String>,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            suffix: "    // GENERATED".to_string(),
            min_line_len: 8,
            comment_delimiters: vec!["*".to_string(), "//".to_string()],
        }
    }
}

impl AnnotationStyle {
    pub fn applies_to(&self, line: &str) -> bool {
        !self.suffix.is_empty()
            && line.len() > self.min_line_len
            && !line.trim().is_empty()
            && !self
                .comment_delimiters
                .iter()
                .any(|d| !d.is_empty() && line.contains(d.as_str()))
    }
}

/// Ordered line sink for one region
#[derive(Debug)]
pub struct Emitter<'a> {
    out: &'a mut String,
    ending: LineEnding,
    annotation: &'a AnnotationStyle,
    lines: usize,
}

impl<'a> Emitter<'a> {
    pub fn new(out: &'a mut String, ending: LineEnding, annotation: &'a AnnotationStyle) -> Self {
        Self {
            out,
            ending,
            annotation,
            lines: 0,
        }
    }

    /// Emit template text verbatim (no placeholder expansion).
    ///
    /// A leading newline is dropped so templates can start on the line after
    /// the opening quote. Empty lines are kept as intentional blank lines;
    /// whitespace-only lines are dropped, which lets conditional fragments
    /// collapse to nothing.
    pub fn emit(&mut self, code: &str, prefix: &str) {
        let code = code
            .strip_prefix("\r\n")
            .or_else(|| code.strip_prefix('\n'))
            .unwrap_or(code);

        for line in code.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                self.out.push_str(self.ending.as_str());
                self.lines += 1;
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            self.out.push_str(prefix);
            self.out.push_str(line);
            if self.annotation.applies_to(line) {
                self.out.push_str(&self.annotation.suffix);
            }
            self.out.push_str(self.ending.as_str());
            self.lines += 1;
        }
    }

    /// Expand field placeholders, then emit
    pub fn emit_field(&mut self, template: &str, prefix: &str, field: &FieldDescriptor) {
        let code = fill_field_template(template, field);
        self.emit(&code, prefix);
    }

    /// Expand field placeholders and `extras` in one pass, then emit
    pub fn emit_field_with(
        &mut self,
        template: &str,
        prefix: &str,
        field: &FieldDescriptor,
        extras: &[(&str, &str)],
    ) -> GenResult<()> {
        let code = fill_field_template_with(template, field, extras)?;
        self.emit(&code, prefix);
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines(&self) -> usize {
        self.lines
    }
}

#[cfg(test)]
#[path = "emit/emit_tests.rs"]
mod emit_tests;
