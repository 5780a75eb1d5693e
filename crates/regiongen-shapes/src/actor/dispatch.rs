//! C# switch cases that route index-based accessor calls to fields
//!
//! Getter and setter cases both walk the schema's [`DispatchIndex`] (the
//! same artifact `regiongen index` exports), so the case for a field has the
//! same number on both sides. Read-only fields keep their number and simply
//! have no setter case.
//!
//! [`DispatchIndex`]: regiongen_core::DispatchIndex

use crate::expand::{INDEX, emit_with};
use regiongen_core::{Emitter, FieldSchema, GenResult, ValueKind};

pub(super) fn getter_cases(
    schema: &FieldSchema,
    kind: ValueKind,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for (index, field) in schema.dispatch_entries(kind) {
        let index = index.to_string();
        emit_with(
            out,
            "case GenIndex: return this.GetGenField();",
            prefix,
            field,
            &[(INDEX, index.as_str())],
        )?;
    }
    Ok(())
}

pub(super) fn setter_cases(
    schema: &FieldSchema,
    kind: ValueKind,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for (index, field) in schema.dispatch_entries(kind).filter(|(_, f)| !f.read_only) {
        let index = index.to_string();
        emit_with(
            out,
            "case GenIndex: this.SetGenField(newValue); return;",
            prefix,
            field,
            &[(INDEX, index.as_str())],
        )?;
    }
    Ok(())
}
