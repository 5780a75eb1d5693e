#![allow(non_snake_case)]

use super::*;
use crate::test_support::plain;
use regiongen_core::{GenError, LineEnding};
use test_case::test_case;

fn emit_one(template: &str, field: &FieldDescriptor, index: usize) -> GenResult<String> {
    let annotation = plain();
    let mut text = String::new();
    let mut out = Emitter::new(&mut text, LineEnding::Lf, &annotation);
    emit_indexed(&mut out, template, "", field, index)?;
    Ok(text)
}

#[test_case(ValueType::Boolean, "genField == newGenField" ; "boolean exact")]
#[test_case(ValueType::Integer, "genField == newGenField" ; "integer exact")]
#[test_case(ValueType::String, "genField == newGenField" ; "string exact")]
#[test_case(ValueType::Color, "genField == newGenField" ; "color exact")]
#[test_case(ValueType::Enum("SkyType".into()), "genField == newGenField" ; "enum exact")]
#[test_case(ValueType::Float, "Mathf.Abs(genField - newGenField) < 1e-4f" ; "float epsilon")]
#[test_case(ValueType::Vector3, "Vector3.Distance(genField, newGenField) < 1e-4f" ; "vector distance")]
#[test_case(ValueType::Quaternion, "genField.ApproxEquals(newGenField)" ; "quaternion angle")]
fn no_change_condition___matches_change_guard(value_type: ValueType, expected: &str) {
    assert_eq!(no_change_condition(&value_type), expected);
}

fn emit_decl(field: &FieldDescriptor) -> String {
    let annotation = plain();
    let mut text = String::new();
    let mut out = Emitter::new(&mut text, LineEnding::Lf, &annotation);
    emit_source_of_truth(&mut out, "", field).unwrap();
    text
}

#[test]
fn emit_source_of_truth___uses_explicit_default() {
    let field = FieldDescriptor::new("hideInPlayMode", ValueType::Boolean).default_value("false");

    assert_eq!(emit_decl(&field), "private bool hideInPlayMode = false;\n\n");
}

#[test]
fn emit_source_of_truth___falls_back_to_implicit_default() {
    let vector = FieldDescriptor::new("renderableOffset", ValueType::Vector3);
    let rotation = FieldDescriptor::new("renderableRotation", ValueType::Quaternion);
    let text = FieldDescriptor::new("displayName", ValueType::String);

    assert_eq!(
        emit_decl(&vector),
        "private Vector3 renderableOffset = Vector3.zero;\n\n"
    );
    assert_eq!(
        emit_decl(&rotation),
        "private Quaternion renderableRotation = Quaternion.identity;\n\n"
    );
    assert_eq!(emit_decl(&text), "private string displayName;\n\n");
}

#[test]
fn emit_source_of_truth___default_literal_is_not_expanded() {
    let field = FieldDescriptor::new("label", ValueType::String).default_value("\"GenField\"");

    assert_eq!(emit_decl(&field), "private string label = \"GenField\";\n\n");
}

#[test]
fn emit_indexed___fills_shape_and_field_tokens() {
    let field = FieldDescriptor::new("mass", ValueType::Float).comment("Mass in kg");

    let text = emit_one(
        "// GenComment\nreturn getActorGenStem(id, GenIndex); GenAssert(genField);",
        &field,
        4,
    )
    .unwrap();

    assert_eq!(
        text,
        "// Mass in kg\nreturn getActorFloat(id, 4); assertNumber(mass);\n"
    );
}

#[test]
fn emit_indexed___does_not_rescan_expanded_values() {
    let field = FieldDescriptor::new("speed", ValueType::Float).comment("GenIndex stays literal");

    let text = emit_one("// GenComment GenIndex", &field, 2).unwrap();

    assert_eq!(text, "// GenIndex stays literal 2\n");
}

#[test_case(ValueType::Integer ; "integer")]
#[test_case(ValueType::Enum("CameraMode".into()) ; "enum")]
fn emit_indexed___type_without_accessor___is_unknown_type(value_type: ValueType) {
    let field = FieldDescriptor::new("mode", value_type);

    let result = emit_one("getActorGenStem(GenIndex);", &field, 0);

    assert!(matches!(
        result,
        Err(GenError::UnknownType {
            behavior: Behavior::ScriptAccessor,
            ..
        })
    ));
}

#[test]
fn emit_with___no_extras___expands_field_tokens_only() {
    let annotation = plain();
    let mut text = String::new();
    let mut out = Emitter::new(&mut text, LineEnding::Lf, &annotation);
    let field = FieldDescriptor::new("tint", ValueType::Color);

    emit_with(&mut out, "public GenCsType genField; // GenIndex", "  ", &field, &[]).unwrap();

    assert_eq!(text, "  public Color tint; // GenIndex\n");
}
