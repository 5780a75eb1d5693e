//! regiongen-core - Field schema, templating, and region patching engine
//!
//! This crate provides the generation engine behind `regiongen`:
//! - [`FieldSchema`] validates a field table and derives its projections
//! - [`template`] expands placeholder tokens in one pass
//! - [`Emitter`] writes prefixed, annotated lines for one region
//! - [`MarkerRegistry`] maps marker names to generators
//! - [`RegionPatcher`] and [`Driver`] rewrite target files in place
//! - [`codec`] and [`component`] model what generated code does at runtime

pub mod codec;
pub mod component;
pub mod config;
pub mod driver;
pub mod emit;
mod error;
pub mod patcher;
pub mod registry;
pub mod schema;
pub mod template;
pub mod value;

pub use config::{CONFIG_FILENAME, GenConfig, SchemaSettings, TargetSpec};
pub use driver::{Driver, FileOutcome, FileReport, RunReport, TargetFile, WriteMode};
pub use emit::{AnnotationStyle, Emitter, LineEnding};
pub use error::{Behavior, GenError, GenResult, RegionProblem, SchemaError};
pub use patcher::{MarkerSyntax, Patched, RegionPatcher, RegionSummary};
pub use registry::{Generator, MarkerRegistry};
pub use schema::{
    DispatchIndex, DownstreamEntry, DownstreamIndex, FieldDescriptor, FieldIterExt, FieldSchema,
    Networking, SchemaOptions,
};
pub use value::{BinaryEncoding, ChangeGuard, FieldValue, ValueKind, ValueType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Behavior, DownstreamEntry, Emitter, FieldDescriptor, FieldIterExt, FieldSchema, GenError,
        GenResult, MarkerRegistry, SchemaOptions, ValueKind, ValueType,
    };
}
