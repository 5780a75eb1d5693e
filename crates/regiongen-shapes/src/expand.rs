//! Helpers shared by the shape generators

use regiongen_core::{
    Behavior, ChangeGuard, Emitter, FieldDescriptor, GenResult, ValueKind, ValueType,
};

/// Dispatch index of the field within its kind
pub(crate) const INDEX: &str = "GenIndex";
/// Host accessor stem (`Boolean`, `Float`, ...)
pub(crate) const STEM: &str = "GenStem";
/// Script assertion helper for the field's type
pub(crate) const ASSERT: &str = "GenAssert";

/// Fill shape-level and field tokens in one pass and emit
pub(crate) fn emit_with(
    out: &mut Emitter<'_>,
    template: &str,
    prefix: &str,
    field: &FieldDescriptor,
    extras: &[(&str, &str)],
) -> GenResult<()> {
    out.emit_field_with(template, prefix, field, extras)
}

/// Emit a template that refers to the field's dispatch slot
pub(crate) fn emit_indexed(
    out: &mut Emitter<'_>,
    template: &str,
    prefix: &str,
    field: &FieldDescriptor,
    index: usize,
) -> GenResult<()> {
    let stem = accessor_stem(field)?;
    let assert = assert_function(field)?;
    let index = index.to_string();
    emit_with(
        out,
        template,
        prefix,
        field,
        &[(INDEX, index.as_str()), (STEM, stem), (ASSERT, assert)],
    )
}

pub(crate) fn accessor_stem(field: &FieldDescriptor) -> GenResult<&'static str> {
    field.value_type.require(
        &field.name,
        Behavior::ScriptAccessor,
        field.value_type.accessor_stem(),
    )
}

pub(crate) fn assert_function(field: &FieldDescriptor) -> GenResult<&'static str> {
    field.value_type.require(
        &field.name,
        Behavior::Assert,
        field.value_type.assert_function(),
    )
}

/// C# condition under which a setter call is a no-op, written against
/// `genField` / `newGenField`
pub(crate) fn no_change_condition(value_type: &ValueType) -> &'static str {
    match value_type.change_guard() {
        ChangeGuard::Exact => "genField == newGenField",
        ChangeGuard::FloatEpsilon => "Mathf.Abs(genField - newGenField) < 1e-4f",
        ChangeGuard::VectorDistance => "Vector3.Distance(genField, newGenField) < 1e-4f",
        ChangeGuard::QuaternionAngle => "genField.ApproxEquals(newGenField)",
    }
}

/// Initializer of the backing field declaration
const INITIALIZER: &str = "GenInitializer";

/// `private T name = default;` followed by a blank line; fill with
/// [`initializer`] under [`INITIALIZER`]
const SOURCE_OF_TRUTH_DECL: &str = "private GenCsType genFieldGenInitializer;\n";

/// ` = <default>` from the explicit or implicit default, empty when there is none
fn initializer(field: &FieldDescriptor) -> String {
    field
        .default_value
        .as_deref()
        .or_else(|| field.value_type.implicit_default())
        .map(|value| format!(" = {value}"))
        .unwrap_or_default()
}

/// Emit the backing field declaration
pub(crate) fn emit_source_of_truth(
    out: &mut Emitter<'_>,
    prefix: &str,
    field: &FieldDescriptor,
) -> GenResult<()> {
    let initializer = initializer(field);
    emit_with(
        out,
        SOURCE_OF_TRUTH_DECL,
        prefix,
        field,
        &[(INITIALIZER, initializer.as_str())],
    )
}

pub(crate) fn is_quaternion(field: &FieldDescriptor) -> bool {
    field.kind() == ValueKind::Quaternion
}

#[cfg(test)]
#[path = "expand/expand_tests.rs"]
mod expand_tests;
