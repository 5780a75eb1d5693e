//! Static tables of the game builder project
//!
//! Pure data. Validation happens when [`crate::Project::load`] turns these
//! into schemas.

mod actor;
mod remote;
mod stage;

pub use actor::{actor_downstreams, actor_fields, runtime_actor_fields};
pub use remote::REMOTE_API_FUNCTIONS;
pub use stage::stage_fields;

use regiongen_core::ValueKind;

/// Accessor kinds the native bridge caches host delegates for, in emit order
pub const ACCESSOR_KINDS: [ValueKind; 4] = [
    ValueKind::Boolean,
    ValueKind::Vector3,
    ValueKind::Quaternion,
    ValueKind::Float,
];
