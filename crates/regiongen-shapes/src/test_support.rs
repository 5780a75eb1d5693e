//! Rendering helpers shared by the generator tests

use regiongen_core::{
    AnnotationStyle, Emitter, FieldDescriptor, FieldSchema, GenResult, Generator, LineEnding,
    MarkerRegistry, SchemaOptions,
};

/// Annotation disabled so expected output reads like the templates
pub(crate) fn plain() -> AnnotationStyle {
    AnnotationStyle {
        suffix: String::new(),
        ..AnnotationStyle::default()
    }
}

pub(crate) fn try_render(
    registry: &MarkerRegistry<'_>,
    marker: &str,
    prefix: &str,
) -> GenResult<String> {
    let annotation = plain();
    let mut text = String::new();
    let generator = registry
        .get(marker)
        .unwrap_or_else(|| panic!("marker {marker} is not registered"));
    let mut out = Emitter::new(&mut text, LineEnding::Lf, &annotation);
    generator.generate(&mut out, prefix)?;
    Ok(text)
}

pub(crate) fn render(registry: &MarkerRegistry<'_>, marker: &str) -> String {
    try_render(registry, marker, "").unwrap()
}

pub(crate) fn schema(fields: Vec<FieldDescriptor>) -> FieldSchema {
    FieldSchema::new("test", fields, Vec::new(), SchemaOptions::default()).unwrap()
}
