//! Region patcher: regenerate every known marker region of one file

use crate::emit::{AnnotationStyle, Emitter, LineEnding};
use crate::error::{GenError, GenResult, RegionProblem};
use crate::registry::MarkerRegistry;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// BEGIN/END tokens that delimit regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSyntax {
    pub begin: String,
    pub end: String,
}

impl Default for MarkerSyntax {
    fn default() -> Self {
        Self {
            begin: "BEGIN_GAME_BUILDER_CODE_GEN".to_string(),
            end: "END_GAME_BUILDER_CODE_GEN".to_string(),
        }
    }
}

impl MarkerSyntax {
    /// Marker named after the begin token, if the line carries one
    pub fn begin_marker<'l>(&self, line: &'l str) -> Option<&'l str> {
        token_argument(line, &self.begin).map(|name| name.unwrap_or(""))
    }

    /// `Some(name)` for an end line; the inner option is the optional marker name
    pub fn end_marker<'l>(&self, line: &'l str) -> Option<Option<&'l str>> {
        token_argument(line, &self.end)
    }
}

/// Finds `token` as a whole word and returns the identifier following it.
///
/// The name is the run of `[A-Za-z0-9_]` after the token and any whitespace,
/// so comment closers (`*/`, `-->`) are not part of it. A line with no such
/// run names no marker.
fn token_argument<'l>(line: &'l str, token: &str) -> Option<Option<&'l str>> {
    if token.is_empty() {
        return None;
    }
    let mut search_from = 0;
    while let Some(offset) = line[search_from..].find(token) {
        let start = search_from + offset;
        let end = start + token.len();
        let rest = &line[end..];
        let boundary_before = line[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_word_char(c));
        let boundary_after = rest.chars().next().is_none_or(|c| !is_word_char(c));
        if boundary_before && boundary_after {
            return Some(identifier_after(rest));
        }
        search_from = end;
    }
    None
}

fn identifier_after(rest: &str) -> Option<&str> {
    let rest = rest.trim_start();
    let len = rest
        .find(|c: char| !is_marker_char(c))
        .unwrap_or(rest.len());
    (len > 0).then(|| &rest[..len])
}

fn is_marker_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, Copy)]
enum ScanState<'l> {
    Scanning,
    InRegion { marker: &'l str, line: usize },
}

/// One regenerated region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSummary {
    pub marker: String,
    pub line: usize,
    pub generated_lines: usize,
}

/// Result of patching one file in memory
#[derive(Debug, Clone)]
pub struct Patched {
    pub text: String,
    pub regions: Vec<RegionSummary>,
    /// BEGIN markers that were passed through because nothing is registered for them
    pub foreign_markers: Vec<String>,
}

/// The BEGIN/END scanner
#[derive(Debug, Clone, Copy)]
pub struct RegionPatcher<'c> {
    syntax: &'c MarkerSyntax,
    annotation: &'c AnnotationStyle,
}

impl<'c> RegionPatcher<'c> {
    pub fn new(syntax: &'c MarkerSyntax, annotation: &'c AnnotationStyle) -> Self {
        Self { syntax, annotation }
    }

    /// Rewrite `source`, regenerating each region whose marker is in `registry`.
    ///
    /// Text outside regions is copied byte for byte. `path` is only used for
    /// error reporting.
    pub fn patch(
        &self,
        path: &Path,
        source: &str,
        registry: &MarkerRegistry<'_>,
    ) -> GenResult<Patched> {
        let ending = LineEnding::detect(source);
        let mut text = String::with_capacity(source.len());
        let mut regions = Vec::new();
        let mut foreign_markers = Vec::new();
        let mut state = ScanState::Scanning;

        for (index, raw) in source.split_inclusive('\n').enumerate() {
            let line_no = index + 1;
            let line = raw.trim_end_matches(['\n', '\r']);

            match state {
                ScanState::Scanning => {
                    text.push_str(raw);

                    let Some(marker) = self.syntax.begin_marker(line) else {
                        continue;
                    };
                    let Some(generator) = registry.get(marker) else {
                        tracing::debug!(marker, line = line_no, "passing through unregistered marker");
                        foreign_markers.push(marker.to_string());
                        continue;
                    };

                    let prefix = &line[..line.len() - line.trim_start().len()];
                    let mut emitter = Emitter::new(&mut text, ending, self.annotation);
                    generator.generate(&mut emitter, prefix)?;
                    let generated_lines = emitter.lines();

                    tracing::debug!(marker, line = line_no, generated_lines, "regenerated region");
                    regions.push(RegionSummary {
                        marker: marker.to_string(),
                        line: line_no,
                        generated_lines,
                    });
                    state = ScanState::InRegion {
                        marker,
                        line: line_no,
                    };
                }
                ScanState::InRegion { marker, .. } => {
                    if let Some(found) = self.syntax.begin_marker(line) {
                        return Err(self.malformed(
                            path,
                            marker,
                            line_no,
                            RegionProblem::NestedBegin {
                                found: found.to_string(),
                            },
                        ));
                    }
                    match self.syntax.end_marker(line) {
                        Some(Some(found)) if found != marker => {
                            return Err(self.malformed(
                                path,
                                marker,
                                line_no,
                                RegionProblem::MismatchedEnd {
                                    found: found.to_string(),
                                },
                            ));
                        }
                        Some(_) => {
                            text.push_str(raw);
                            state = ScanState::Scanning;
                        }
                        None => {}
                    }
                }
            }
        }

        if let ScanState::InRegion { marker, line } = state {
            return Err(self.malformed(path, marker, line, RegionProblem::Unterminated));
        }

        Ok(Patched {
            text,
            regions,
            foreign_markers,
        })
    }

    fn malformed(&self, path: &Path, marker: &str, line: usize, problem: RegionProblem) -> GenError {
        GenError::MalformedRegion {
            path: path.to_path_buf(),
            marker: marker.to_string(),
            line,
            problem,
        }
    }
}
