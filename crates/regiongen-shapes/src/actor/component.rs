//! C# component storage: backing field, guarded setter, getter

use crate::expand::{emit_source_of_truth, emit_with, is_quaternion, no_change_condition};
use regiongen_core::{Emitter, FieldDescriptor, FieldSchema, GenResult};

pub(super) fn getters_setters(
    schema: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for field in schema.fields().iter().filter(|f| f.needs_component_storage) {
        let triggers = schema.downstream().triggers(&field.name);
        let tokens: Vec<String> = (0..triggers.len()).map(trigger_token).collect();
        let extras: Vec<(&str, &str)> = tokens
            .iter()
            .map(String::as_str)
            .zip(triggers.iter().map(String::as_str))
            .collect();

        emit_source_of_truth(out, prefix, field)?;
        emit_with(out, &accessor_pair(field, &tokens), prefix, field, &extras)?;
    }
    Ok(())
}

/// Placeholder for the `n`th downstream trigger of a field
fn trigger_token(n: usize) -> String {
    format!("GenTrigger{n}")
}

/// Setter and getter template for one field; `triggers` are the trigger
/// placeholders, filled with the trigger names in the same pass as the field.
///
/// The setter only compares against the current value when something
/// observes the change (an update hook or a downstream trigger).
fn accessor_pair(field: &FieldDescriptor, triggers: &[String]) -> String {
    let mut code = String::from("\npublic void SetGenField(GenCsType newGenField)\n{\n");

    if is_quaternion(field) {
        code.push_str("  newGenField = newGenField.normalized;\n");
    }
    if field.needs_change_notification || !triggers.is_empty() {
        code.push_str("  if (");
        code.push_str(no_change_condition(&field.value_type));
        code.push_str(")\n  {\n    return;\n  }\n\n");
    }
    if field.change_notification_needs_prior_value {
        code.push_str("  var oldGenField = genField;\n");
    }
    code.push_str("  genField = newGenField;\n");
    if field.needs_change_notification {
        if field.change_notification_needs_prior_value {
            code.push_str("  UpdateGenField(oldGenField);\n");
        } else {
            code.push_str("  UpdateGenField();\n");
        }
    }
    for trigger in triggers {
        code.push_str("  ");
        code.push_str(trigger);
        code.push_str("();\n");
    }
    code.push_str("}\n\npublic GenCsType GetGenField()\n{\n  return genField;\n}\n");
    code
}
