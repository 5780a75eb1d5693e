//! Runtime actor fields: player input state mirrored into scripts

use regiongen_core::{Emitter, FieldSchema, GenResult, ValueKind};

pub(super) fn csharp_decls(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.fields() {
        out.emit_field("public GenCsType genField;", prefix, field);
    }
    Ok(())
}

/// Initializers for the object-valued fields; scalars arrive with the first merge
pub(super) fn constructor_js(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.fields() {
        match field.kind() {
            ValueKind::Vector3 => {
                out.emit_field("this.genField = new THREE.Vector3();", prefix, field);
            }
            // Plain object: THREE.Quaternion keeps its components in _x, _y, ...
            ValueKind::Quaternion => {
                out.emit_field("this.genField = { x: 0, y: 0, z: 0, w: 1 };", prefix, field);
            }
            _ => {}
        }
    }
    Ok(())
}

pub(super) fn merge_json_js(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.fields() {
        let template = match field.kind() {
            ValueKind::Vector3 => "this.genField.copy(runtimeSrc.genField);",
            ValueKind::Quaternion => "copyQuat(runtimeSrc.genField, this.genField);",
            _ => "this.genField = runtimeSrc.genField;",
        };
        out.emit_field(template, prefix, field);
    }
    Ok(())
}
