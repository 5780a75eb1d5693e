//! The game builder project: every table, validated, and its registries

use crate::remote::RemoteFunction;
use crate::tables::{
    ACCESSOR_KINDS, REMOTE_API_FUNCTIONS, actor_downstreams, actor_fields, runtime_actor_fields,
    stage_fields,
};
use crate::{actor, native, remote, stage};
use regiongen_core::{
    DispatchIndex, FieldSchema, GenError, GenResult, MarkerRegistry, SchemaOptions, SchemaSettings,
    ValueKind,
};
use tracing::{debug, info};

/// Registry names a target may name, in listing order
pub const REGISTRY_NAMES: [&str; 4] = [
    actor::REGISTRY,
    stage::REGISTRY,
    remote::REGISTRY,
    native::REGISTRY,
];

/// Validated schemas shared by all registries of one run
#[derive(Debug, Clone)]
pub struct Project {
    actor: FieldSchema,
    runtime: FieldSchema,
    stage: FieldSchema,
    remote_functions: Vec<RemoteFunction>,
    accessor_kinds: Vec<ValueKind>,
}

impl Project {
    /// Validate every table. Nothing is generated if this fails.
    pub fn load(settings: &SchemaSettings) -> GenResult<Self> {
        let actor = FieldSchema::new(
            "actor",
            actor_fields(),
            actor_downstreams(),
            SchemaOptions {
                require_networking: true,
                strict_networking: settings.strict_networking,
            },
        )?;
        let runtime = FieldSchema::new(
            "runtime",
            runtime_actor_fields(),
            Vec::new(),
            SchemaOptions::default(),
        )?;
        let stage = FieldSchema::new("stage", stage_fields(), Vec::new(), SchemaOptions::default())?;
        let remote_functions = RemoteFunction::parse_table(REMOTE_API_FUNCTIONS)?;

        debug!(
            kinds = ?ACCESSOR_KINDS,
            "Native accessor kinds"
        );
        info!(
            actor = actor.fields().len(),
            runtime = runtime.fields().len(),
            stage = stage.fields().len(),
            remote_functions = remote_functions.len(),
            "Project loaded"
        );

        Ok(Self {
            actor,
            runtime,
            stage,
            remote_functions,
            accessor_kinds: ACCESSOR_KINDS.to_vec(),
        })
    }

    /// Build the named registry over this project's schemas
    pub fn registry(&self, name: &str) -> GenResult<MarkerRegistry<'_>> {
        match name {
            actor::REGISTRY => actor::registry(&self.actor, &self.runtime),
            stage::REGISTRY => stage::registry(&self.stage),
            remote::REGISTRY => remote::registry(&self.remote_functions),
            native::REGISTRY => native::registry(&self.accessor_kinds),
            other => Err(GenError::Registry(format!(
                "no registry named '{other}' (known: {})",
                REGISTRY_NAMES.join(", ")
            ))),
        }
    }

    pub fn actor(&self) -> &FieldSchema {
        &self.actor
    }

    pub fn runtime(&self) -> &FieldSchema {
        &self.runtime
    }

    pub fn stage(&self) -> &FieldSchema {
        &self.stage
    }

    pub fn remote_functions(&self) -> &[RemoteFunction] {
        &self.remote_functions
    }

    /// Index-based dispatch only exists for actor fields
    pub fn dispatch_index(&self) -> &DispatchIndex {
        self.actor.dispatch_index()
    }
}
