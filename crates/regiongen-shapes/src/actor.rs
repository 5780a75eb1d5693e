//! Actor registry: shapes generated from the actor and runtime field tables
//!
//! Target files: `VoosActor.cs`, `VoosActorAccessors.cs`,
//! `ActorNetworking.cs`, `ModuleBehaviorsActor.js.txt` and
//! `HandlingActor.js.txt`.

mod component;
mod dispatch;
mod networking;
mod persistence;
mod runtime;
mod scripting;

use regiongen_core::{FieldSchema, GenResult, MarkerRegistry, ValueKind};

/// Registry name used in `regiongen.toml`
pub const REGISTRY: &str = "actor";

/// Kinds with host accessors, in the order their shapes are emitted
pub(crate) const SCRIPT_KINDS: [ValueKind; 6] = [
    ValueKind::Boolean,
    ValueKind::Float,
    ValueKind::Vector3,
    ValueKind::Quaternion,
    ValueKind::String,
    ValueKind::Color,
];

/// Build the actor registry over the validated actor and runtime schemas
pub fn registry<'p>(
    actor: &'p FieldSchema,
    runtime: &'p FieldSchema,
) -> GenResult<MarkerRegistry<'p>> {
    let mut registry = MarkerRegistry::new(REGISTRY)
        .register("ACTOR_PERSISTED_FIELDS_CSHARP_DECLS", move |out, prefix| {
            persistence::csharp_decls(actor, out, prefix)
        })?
        .register("ACTOR_PERSISTED_FIELDS_SERIALIZE", move |out, prefix| {
            persistence::serialize(actor, out, prefix)
        })?
        .register("ACTOR_PERSISTED_FIELDS_DESERIALIZE", move |out, prefix| {
            persistence::deserialize(actor, out, prefix)
        })?
        .register("ACTOR_PERSISTED_FIELDS_BINARY_SERIALIZE", move |out, prefix| {
            persistence::binary_serialize(actor, out, prefix)
        })?
        .register("ACTOR_PERSISTED_FIELDS_BINARY_DESERIALIZE", move |out, prefix| {
            persistence::binary_deserialize(actor, out, prefix)
        })?
        .register("ACTOR_COMPONENT_CSHARP", move |out, prefix| {
            component::getters_setters(actor, out, prefix)
        })?
        .register("ACTOR_RELIABLE_STREAM_WRITE", move |out, prefix| {
            networking::stream_write(actor, out, prefix)
        })?
        .register("ACTOR_RELIABLE_STREAM_READ", move |out, prefix| {
            networking::stream_read(actor, out, prefix)
        })?
        .register("RUNTIME_STATE_CSHARP_DECLS", move |out, prefix| {
            runtime::csharp_decls(runtime, out, prefix)
        })?
        .register("ACTOR_FIELDS_CONSTRUCTOR_JAVASCRIPT", move |out, prefix| {
            runtime::constructor_js(runtime, out, prefix)
        })?
        .register("ACTOR_RUNTIME_FIELDS_MERGE_JSON_JAVASCRIPT", move |out, prefix| {
            runtime::merge_json_js(runtime, out, prefix)
        })?
        .register("OTHER_ACTOR_CLASS_JAVASCRIPT", move |out, prefix| {
            scripting::getters(actor, runtime, out, prefix)
        })?
        .register("HANDLING_ACTOR_CLASS_JAVASCRIPT", move |out, prefix| {
            scripting::setters(actor, out, prefix)
        })?
        .register("LEGACY_ACTOR_ACCESSORS", move |out, prefix| {
            scripting::legacy_accessors(actor, out, prefix)
        })?;

    for kind in SCRIPT_KINDS {
        let label = kind.to_string().to_uppercase();
        registry = registry
            .register(format!("CS_ACTOR_GET_{label}_FIELD_SWITCH"), move |out, prefix| {
                dispatch::getter_cases(actor, kind, out, prefix)
            })?
            .register(format!("CS_ACTOR_SET_{label}_FIELD_SWITCH"), move |out, prefix| {
                dispatch::setter_cases(actor, kind, out, prefix)
            })?;
    }

    Ok(registry)
}
