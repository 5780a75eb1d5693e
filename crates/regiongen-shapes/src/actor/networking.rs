//! Reliable replication stream, written and read in declaration order

use regiongen_core::{Emitter, FieldSchema, GenResult, ValueKind};

pub(super) fn stream_write(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.reliable() {
        let template = if field.kind() == ValueKind::String {
            // The stream cannot carry null.
            "stream.SendNext(Util.EmptyIfNull(actor.GetGenField()));"
        } else {
            "stream.SendNext(actor.GetGenField());"
        };
        out.emit_field(template, prefix, field);
    }
    Ok(())
}

pub(super) fn stream_read(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.reliable() {
        out.emit_field(
            "actor.SetGenField((GenCsType)stream.ReceiveNext());",
            prefix,
            field,
        );
    }
    Ok(())
}
