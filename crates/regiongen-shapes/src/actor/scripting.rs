//! Script-side accessors
//!
//! Actor fields are reached through host calls keyed by kind and dispatch
//! index (`getActorFloat(tempId, 3)`); runtime fields live on the script
//! object itself.

use super::SCRIPT_KINDS;
use crate::expand::{accessor_stem, emit_indexed};
use regiongen_core::{Emitter, FieldDescriptor, FieldSchema, GenResult, ValueKind};

const RUNTIME_GETTER: &str = r#"
/**
 * Getter for: GenComment
 * @returns {GenJsType}
 */
getGenField() {
  return this.actor_.genField;
}"#;

const RUNTIME_VECTOR3_GETTER: &str = r#"
/**
 * Getter for: GenComment
 * @param {THREE.Vector3=} existing
 * @returns {THREE.Vector3}
 */
getGenField(existing = null) {
  if (!existing) {
    existing = new THREE.Vector3();
  }
  assertVector3(existing, 'getGenField argument');
  existing.copy(this.actor_.genField);
  return existing;
}"#;

const RUNTIME_QUATERNION_GETTER: &str = r#"
/**
 * Getter for: GenComment
 * @param {THREE.Quaternion=} existing
 * @returns {THREE.Quaternion}
 */
getGenField(existing = null) {
  if (!existing) {
    existing = new THREE.Quaternion();
  }
  assertQuaternion(existing, 'getGenField argument');
  copyQuat(this.actor_.genField, existing);
  return existing;
}"#;

const VALUE_GETTER: &str = r#"
/**
 * Getter for: GenComment
 * @returns {GenJsType}
 */
getGenField() {
  return getActorGenStem(this.actor_.tempId_, GenIndex);
}"#;

/// Vector3 and Quaternion: the host fills a caller-supplied object
const OBJECT_GETTER: &str = r#"
/**
 * Getter for: GenComment
 * @param {GenJsType=} existing
 * @returns {GenJsType}
 */
getGenField(existing = null) {
  if (!existing) {
    existing = new GenJsType();
  }
  GenAssert(existing, 'getGenField argument');
  getActorGenStem(this.actor_.tempId_, GenIndex, existing);
  return existing;
}"#;

const COLOR_GETTER: &str = r#"
/**
 * Getter for: GenComment
 * @param {THREE.Color=} existing
 * @returns {THREE.Color}
 */
getGenField(existing = null) {
  if (!existing) {
    existing = new THREE.Color();
  }
  assertColor(existing, 'getGenField argument');
  const o = getActorColor(this.actor_.tempId_, GenIndex);
  existing.r = o.r;
  existing.g = o.g;
  existing.b = o.b;
  existing.a = o.a;
  return existing;
}"#;

const VALUE_SETTER: &str = r#"
/**
 * Setter for: GenComment
 * @param {GenJsType} newGenField
 */
setGenField(newGenField) {
  GenAssert(newGenField, 'setGenField argument');
  setActorGenStem(this.actor_.tempId_, GenIndex, newGenField);
}"#;

const VECTOR3_SETTER: &str = r#"
/**
 * Setter for: GenComment
 * @param {THREE.Vector3} newGenField
 */
setGenField(newGenField) {
  assertVector3(newGenField, 'setGenField argument');
  const v = newGenField;
  setActorVector3(this.actor_.tempId_, GenIndex, v.x, v.y, v.z);
}"#;

const QUATERNION_SETTER: &str = r#"
/**
 * Setter for: GenComment
 * @param {THREE.Quaternion} newGenField
 */
setGenField(newGenField) {
  assertQuaternion(newGenField, 'setGenField argument');
  const q = newGenField;
  setActorQuaternion(this.actor_.tempId_, GenIndex, q.x, q.y, q.z, q.w);
}"#;

const LEGACY_VALUE_SETTER: &str = r#"
set genField(newGenField) {
  GenAssert(newGenField, 'setGenField argument');
  setActorGenStem(this.tempId_, GenIndex, newGenField);
}"#;

const LEGACY_VECTOR3_SETTER: &str = r#"
set genField(newGenField) {
  assertVector3(newGenField, 'setGenField argument');
  const v = newGenField;
  setActorVector3(this.tempId_, GenIndex, v.x, v.y, v.z);
}"#;

const LEGACY_QUATERNION_SETTER: &str = r#"
set genField(newGenField) {
  assertQuaternion(newGenField, 'setGenField argument');
  const q = newGenField;
  setActorQuaternion(this.tempId_, GenIndex, q.x, q.y, q.z, q.w);
}"#;

const LEGACY_VALUE_GETTER: &str = r#"
get genField() {
  return getActorGenStem(this.tempId_, GenIndex);
}"#;

/// Returns a live vector whose `copy`/`set` write back through the setter
const LEGACY_VECTOR3_GETTER: &str = r#"
get genField() {
  const existing = new THREE.Vector3();
  getActorVector3(this.tempId_, GenIndex, existing);
  // Legacy hack..
  existing.copy = (v) => {
    existing.x = v.x;
    existing.y = v.y;
    existing.z = v.z;
    this.genField = existing;
  };
  existing.set = (x, y, z) => {
    existing.x = x;
    existing.y = y;
    existing.z = z;
    this.genField = existing;
  };
  return existing;
}"#;

const LEGACY_QUATERNION_GETTER: &str = r#"
get genField() {
  const existing = new THREE.Quaternion();
  getActorQuaternion(this.tempId_, GenIndex, existing);
  return existing;
}"#;

/// Legacy property accessors predate color support
const LEGACY_KINDS: [ValueKind; 5] = [
    ValueKind::Boolean,
    ValueKind::Float,
    ValueKind::Vector3,
    ValueKind::Quaternion,
    ValueKind::String,
];

/// Every actor field must be reachable through a host accessor
fn check_accessors(schema: &FieldSchema) -> GenResult<()> {
    for field in schema.fields() {
        accessor_stem(field)?;
    }
    Ok(())
}

fn emit_by_kind(
    schema: &FieldSchema,
    kinds: &[ValueKind],
    writable_only: bool,
    template: impl Fn(ValueKind) -> Option<&'static str>,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    for &kind in kinds {
        let Some(template) = template(kind) else {
            continue;
        };
        for (index, field) in schema.dispatch_entries(kind) {
            if writable_only && field.read_only {
                continue;
            }
            emit_indexed(out, template, prefix, field, index)?;
        }
    }
    Ok(())
}

fn runtime_getter(field: &FieldDescriptor) -> &'static str {
    match field.kind() {
        ValueKind::Vector3 => RUNTIME_VECTOR3_GETTER,
        ValueKind::Quaternion => RUNTIME_QUATERNION_GETTER,
        _ => RUNTIME_GETTER,
    }
}

/// `OTHER_ACTOR_CLASS_JAVASCRIPT`: runtime field getters, then one getter
/// per actor field grouped by kind
pub(super) fn getters(
    actor: &FieldSchema,
    runtime: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    check_accessors(actor)?;

    for field in runtime.fields() {
        out.emit_field(runtime_getter(field), prefix, field);
    }

    emit_by_kind(
        actor,
        &SCRIPT_KINDS,
        false,
        |kind| match kind {
            ValueKind::Vector3 | ValueKind::Quaternion => Some(OBJECT_GETTER),
            ValueKind::Color => Some(COLOR_GETTER),
            _ => Some(VALUE_GETTER),
        },
        out,
        prefix,
    )
}

/// `HANDLING_ACTOR_CLASS_JAVASCRIPT`: one setter per writable actor field
pub(super) fn setters(actor: &FieldSchema, out: &mut Emitter<'_>, prefix: &str) -> GenResult<()> {
    check_accessors(actor)?;

    emit_by_kind(
        actor,
        &SCRIPT_KINDS,
        true,
        |kind| match kind {
            ValueKind::Vector3 => Some(VECTOR3_SETTER),
            ValueKind::Quaternion => Some(QUATERNION_SETTER),
            _ => Some(VALUE_SETTER),
        },
        out,
        prefix,
    )
}

/// `LEGACY_ACTOR_ACCESSORS`: `set x(v)` / `get x()` properties on the actor
pub(super) fn legacy_accessors(
    actor: &FieldSchema,
    out: &mut Emitter<'_>,
    prefix: &str,
) -> GenResult<()> {
    check_accessors(actor)?;

    emit_by_kind(
        actor,
        &LEGACY_KINDS,
        true,
        |kind| match kind {
            ValueKind::Vector3 => Some(LEGACY_VECTOR3_SETTER),
            ValueKind::Quaternion => Some(LEGACY_QUATERNION_SETTER),
            _ => Some(LEGACY_VALUE_SETTER),
        },
        out,
        prefix,
    )?;
    emit_by_kind(
        actor,
        &LEGACY_KINDS,
        false,
        |kind| match kind {
            ValueKind::Vector3 => Some(LEGACY_VECTOR3_GETTER),
            ValueKind::Quaternion => Some(LEGACY_QUATERNION_GETTER),
            _ => Some(LEGACY_VALUE_GETTER),
        },
        out,
        prefix,
    )
}
