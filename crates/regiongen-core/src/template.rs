//! Placeholder substitution
//!
//! Templates are ordinary target-language source containing bare-word
//! placeholder tokens. All tokens of a set are compiled into one regular
//! expression and replaced in a single pass, so an expansion is never
//! rescanned: a field whose comment contains `GenField` keeps that text.
//! Tokens are tried longest first, so a token that is a prefix of another
//! (`Accessor` / `AccessorType`) cannot shadow it.

use crate::error::{GenError, GenResult};
use crate::schema::FieldDescriptor;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Field name, as written: `genField`
pub const FIELD_NAME: &str = "genField";
/// Field name with its first letter capitalized: `GenField`
pub const FIELD_NAME_CAPITALIZED: &str = "GenField";
/// C# type name: `GenCsType`
pub const FIELD_CS_TYPE: &str = "GenCsType";
/// JSDoc type name: `GenJsType`
pub const FIELD_JS_TYPE: &str = "GenJsType";
/// Comment text: `GenComment`
pub const FIELD_COMMENT: &str = "GenComment";

const FIELD_TOKENS: [&str; 5] = [
    FIELD_NAME,
    FIELD_NAME_CAPITALIZED,
    FIELD_CS_TYPE,
    FIELD_JS_TYPE,
    FIELD_COMMENT,
];

#[allow(clippy::expect_used)] // Safe: escaped constant literals always compile
static FIELD_PLACEHOLDERS: Lazy<Placeholders> =
    Lazy::new(|| Placeholders::new(FIELD_TOKENS).expect("field placeholder set compiles"));

/// A compiled set of placeholder tokens
#[derive(Debug, Clone)]
pub struct Placeholders {
    pattern: Regex,
}

impl Placeholders {
    pub fn new<'t>(tokens: impl IntoIterator<Item = &'t str>) -> GenResult<Self> {
        let mut tokens: Vec<&str> = tokens.into_iter().filter(|t| !t.is_empty()).collect();
        if tokens.is_empty() {
            return Err(GenError::Template("placeholder set is empty".to_string()));
        }
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        tokens.dedup();

        let alternation = tokens
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation).map_err(|e| GenError::Template(e.to_string()))?;

        Ok(Self { pattern })
    }

    /// Replace every token in one pass, using `value` to expand each match.
    pub fn fill<F>(&self, template: &str, value: F) -> String
    where
        F: Fn(&str) -> String,
    {
        self.pattern
            .replace_all(template, |caps: &Captures<'_>| value(&caps[0]))
            .into_owned()
    }
}

/// Expand the field placeholders of `template` for one descriptor
pub fn fill_field_template(template: &str, field: &FieldDescriptor) -> String {
    FIELD_PLACEHOLDERS.fill(template, |token| field_value(token, field))
}

/// Expand the field placeholders and an extra token table in the same pass.
///
/// Extra values are pasted verbatim: a value containing `GenField` stays as
/// written. An extra token that is also a field token takes precedence.
pub fn fill_field_template_with(
    template: &str,
    field: &FieldDescriptor,
    extras: &[(&str, &str)],
) -> GenResult<String> {
    if extras.is_empty() {
        return Ok(fill_field_template(template, field));
    }
    let placeholders = Placeholders::new(
        FIELD_TOKENS
            .into_iter()
            .chain(extras.iter().map(|(token, _)| *token)),
    )?;
    Ok(placeholders.fill(template, |token| {
        extras
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v.to_string())
            .unwrap_or_else(|| field_value(token, field))
    }))
}

fn field_value(token: &str, field: &FieldDescriptor) -> String {
    match token {
        FIELD_NAME => field.name.clone(),
        FIELD_NAME_CAPITALIZED => capitalize(&field.name),
        FIELD_CS_TYPE => field.value_type.cs_type().to_string(),
        FIELD_JS_TYPE => field.value_type.jsdoc_type().to_string(),
        FIELD_COMMENT => field.comment.clone(),
        other => other.to_string(),
    }
}

/// Expand an ad-hoc token table in one pass
pub fn fill_template(template: &str, table: &[(&str, &str)]) -> GenResult<String> {
    let placeholders = Placeholders::new(table.iter().map(|(token, _)| *token))?;
    Ok(placeholders.fill(template, |token| {
        table
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v.to_string())
            .unwrap_or_else(|| token.to_string())
    }))
}

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use regiongen_core::template::capitalize;
///
/// assert_eq!(capitalize("displayName"), "DisplayName");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
