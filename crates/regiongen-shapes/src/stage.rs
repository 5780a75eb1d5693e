//! Stage registry: `GameBuilderStage.cs`
//!
//! Stage settings use last-writer-wins replication: a local set that changes
//! the value is broadcast to every peer through an RPC that applies it
//! with the same guarded local setter.

use crate::expand::{emit_source_of_truth, is_quaternion, no_change_condition};
use regiongen_core::{Emitter, FieldDescriptor, FieldSchema, GenResult, MarkerRegistry};

/// Registry name used in `regiongen.toml`
pub const REGISTRY: &str = "stage";

pub fn registry(stage: &FieldSchema) -> GenResult<MarkerRegistry<'_>> {
    MarkerRegistry::new(REGISTRY)
        .register("STAGE_CSHARP", move |out, prefix| {
            csharp(stage, out, prefix)
        })?
        .register("STAGE_PERSISTED_STRUCT_MEMBERS", move |out, prefix| {
            persisted_struct_members(stage, out, prefix)
        })?
        .register("STAGE_SAVE_ASSIGNMENTS", move |out, prefix| {
            save_assignments(stage, out, prefix)
        })?
        .register("STAGE_LOAD_PERSISTED", move |out, prefix| {
            load_persisted(stage, out, prefix)
        })?
        .register("FORCE_UPDATE_ON_START", move |out, prefix| {
            force_update_on_start(stage, out, prefix)
        })
}

fn csharp(schema: &FieldSchema, out: &mut Emitter<'_>, prefix: &str) -> GenResult<()> {
    for field in schema.fields() {
        emit_source_of_truth(out, prefix, field)?;
        out.emit_field(&replicated_accessors(field), prefix, field);
    }
    Ok(())
}

fn replicated_accessors(field: &FieldDescriptor) -> String {
    let mut code = String::from(
        "\npublic GenCsType GetGenField()\n{\n  return genField;\n}\n\nbool SetGenFieldLocal(GenCsType newGenField)\n{\n",
    );
    if is_quaternion(field) {
        code.push_str("  newGenField = newGenField.normalized;\n");
    }
    code.push_str("  if (");
    code.push_str(no_change_condition(&field.value_type));
    code.push_str(")\n  {\n    return false;\n  }\n  this.genField = newGenField;\n");
    if field.needs_change_notification {
        code.push_str("  UpdateGenField();\n");
    }
    code.push_str(
        r#"  return true;
}

[PunRPC]
void SetGenFieldRPC(GenCsType newGenField)
{
  SetGenFieldLocal(newGenField);
}

public void SetGenField(GenCsType newGenField)
{
  if (SetGenFieldLocal(newGenField))
  {
    photonView.RPC("SetGenFieldRPC", PhotonTargets.AllViaServer, newGenField);
  }
}"#,
    );
    code
}

/// Enums are saved by name so reordering their members keeps old saves valid
fn persisted_struct_members(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.fields() {
        let template = if field.value_type.is_enum() {
            "public string genField;"
        } else {
            "public GenCsType genField;"
        };
        out.emit_field(template, prefix, field);
    }
    Ok(())
}

fn save_assignments(schema: &FieldSchema, out: &mut Emitter<'_>, prefix: &str) -> GenResult<()> {
    for field in schema.fields() {
        let template = if field.value_type.is_enum() {
            "genField = GetGenField().ToString(),"
        } else {
            "genField = GetGenField(),"
        };
        out.emit_field(template, prefix, field);
    }
    Ok(())
}

/// Loading goes through the local setters: peers already hold these values
fn load_persisted(schema: &FieldSchema, out: &mut Emitter<'_>, prefix: &str) -> GenResult<()> {
    for field in schema.fields() {
        let template = if field.value_type.is_enum() {
            "SetGenFieldLocal(state.genField.IsNullOrEmpty() ? DefaultGenField : Util.ParseEnum<GenCsType>(state.genField));"
        } else {
            "SetGenFieldLocal(state.genField);"
        };
        out.emit_field(template, prefix, field);
    }
    Ok(())
}

fn force_update_on_start(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema
        .fields()
        .iter()
        .filter(|f| f.needs_change_notification)
    {
        out.emit_field("UpdateGenField();", prefix, field);
    }
    Ok(())
}
