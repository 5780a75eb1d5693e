//! Persisted state: struct declarations, struct copy, and the binary layout
//!
//! The binary shapes write one value per persisted field in declaration
//! order with no framing; `regiongen_core::codec` reads and writes the same
//! layout.

use crate::expand::emit_with;
use regiongen_core::{Behavior, Emitter, FieldSchema, GenResult};

pub(super) fn csharp_decls(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.persisted() {
        out.emit_field("public GenCsType genField;", prefix, field);
    }
    Ok(())
}

pub(super) fn serialize(schema: &FieldSchema, out: &mut Emitter<'_>, prefix: &str) -> GenResult<()> {
    for field in schema.persisted() {
        out.emit_field("rv.genField = actor.GetGenField();", prefix, field);
    }
    Ok(())
}

pub(super) fn deserialize(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.persisted() {
        out.emit_field("SetGenField(serialized.genField);", prefix, field);
    }
    Ok(())
}

pub(super) fn binary_serialize(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.persisted() {
        let encoding = field.value_type.require(
            &field.name,
            Behavior::BinaryWrite,
            field.value_type.binary_encoding(),
        )?;
        emit_with(
            out,
            "writer.WriteSuffix(genField);",
            prefix,
            field,
            &[("Suffix", encoding.write_suffix())],
        )?;
    }
    Ok(())
}

pub(super) fn binary_deserialize(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.persisted() {
        let encoding = field.value_type.require(
            &field.name,
            Behavior::BinaryRead,
            field.value_type.binary_encoding(),
        )?;
        emit_with(
            out,
            "this.genField = reader.ReadSuffix();",
            prefix,
            field,
            &[("Suffix", encoding.read_suffix())],
        )?;
    }
    Ok(())
}
