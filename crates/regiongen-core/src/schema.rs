//! Field schema: descriptors, downstream triggers, and derived views
//!
//! A [`FieldSchema`] is built once per run from static tables and is
//! immutable afterwards. Construction validates the tables (unique names,
//! downstream dependencies that exist, enum fields with a type name) and
//! derives the read-only projections every generator consumes:
//!
//! - per-type sequences in declaration order ([`FieldSchema::of_kind`])
//! - the writable-only filter ([`FieldIterExt::writable`])
//! - the [`DownstreamIndex`]
//! - the [`DispatchIndex`]

use crate::error::{GenResult, SchemaError};
use crate::value::{ValueKind, ValueType};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Whether a field rides the reliable replication stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Networking {
    /// Sent on the reliable stream
    Reliable,
    /// Explicitly not replicated
    Local,
    /// No annotation was given
    #[default]
    Unspecified,
}

/// One row of a field table
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub value_type: ValueType,
    pub persisted: bool,
    pub networking: Networking,
    pub read_only: bool,
    pub needs_component_storage: bool,
    pub needs_change_notification: bool,
    pub change_notification_needs_prior_value: bool,
    pub default_value: Option<String>,
    pub comment: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            persisted: false,
            networking: Networking::Unspecified,
            read_only: false,
            needs_component_storage: false,
            needs_change_notification: false,
            change_notification_needs_prior_value: false,
            default_value: None,
            comment: String::new(),
        }
    }

    pub fn persisted(mut self) -> Self {
        self.persisted = true;
        self
    }

    pub fn reliable(mut self) -> Self {
        self.networking = Networking::Reliable;
        self
    }

    pub fn local(mut self) -> Self {
        self.networking = Networking::Local;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn component_storage(mut self) -> Self {
        self.needs_component_storage = true;
        self
    }

    pub fn notify(mut self) -> Self {
        self.needs_change_notification = true;
        self
    }

    /// Notify with the value the field held before the change
    pub fn notify_with_prior(mut self) -> Self {
        self.needs_change_notification = true;
        self.change_notification_needs_prior_value = true;
        self
    }

    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.comment = text.into();
        self
    }

    pub fn kind(&self) -> ValueKind {
        self.value_type.kind()
    }

    pub fn is_reliable(&self) -> bool {
        self.networking == Networking::Reliable
    }
}

/// A recomputation function and the fields whose changes trigger it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamEntry {
    pub trigger: String,
    pub deps: Vec<String>,
}

impl DownstreamEntry {
    /// Repeated deps are kept once, at their first position
    pub fn new(trigger: impl Into<String>, deps: &[&str]) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(deps.len());
        for dep in deps {
            if !unique.iter().any(|d| d == dep) {
                unique.push(dep.to_string());
            }
        }
        Self {
            trigger: trigger.into(),
            deps: unique,
        }
    }
}

/// Field name to the triggers that must run when it changes, in entry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownstreamIndex {
    by_field: HashMap<String, Vec<String>>,
}

impl DownstreamIndex {
    pub fn triggers(&self, field: &str) -> &[String] {
        self.by_field.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Position of each field within its type-filtered, declaration-ordered sequence.
///
/// Getter and setter dispatch generators both read this artifact, so a field's
/// index is the same on both sides. Reordering fields of one kind changes the
/// indices and breaks any consumer compiled against the old order; commit the
/// JSON form (see [`DispatchIndex::to_json`]) to catch that in review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchIndex {
    schema: String,
    kinds: BTreeMap<ValueKind, Vec<String>>,
}

impl DispatchIndex {
    fn build(schema: &str, fields: &[FieldDescriptor]) -> Self {
        let mut kinds: BTreeMap<ValueKind, Vec<String>> = BTreeMap::new();
        for field in fields {
            kinds
                .entry(field.kind())
                .or_default()
                .push(field.name.clone());
        }
        Self {
            schema: schema.to_string(),
            kinds,
        }
    }

    /// Dispatch index of a field, if declared
    pub fn index_of(&self, field: &str) -> Option<(ValueKind, usize)> {
        self.kinds.iter().find_map(|(kind, names)| {
            names
                .iter()
                .position(|name| name == field)
                .map(|index| (*kind, index))
        })
    }

    /// Field names of one kind in index order
    pub fn names(&self, kind: ValueKind) -> &[String] {
        self.kinds.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Options that change how strictly a schema is validated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Warn when a field has no networking annotation
    pub require_networking: bool,
    /// Promote the missing-networking warning to an error
    pub strict_networking: bool,
}

/// Validated, immutable field table
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: String,
    fields: Vec<FieldDescriptor>,
    downstream: DownstreamIndex,
    dispatch: DispatchIndex,
}

impl FieldSchema {
    /// Validate a field table and its downstream entries.
    ///
    /// Fails on the first duplicate name, empty enum type name, or downstream
    /// dependency on an undeclared field. Missing networking annotations are
    /// logged and tolerated unless `options.strict_networking` is set.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        downstreams: Vec<DownstreamEntry>,
        options: SchemaOptions,
    ) -> GenResult<Self> {
        let name = name.into();

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    schema: name.clone(),
                    field: field.name.clone(),
                }
                .into());
            }
            if let ValueType::Enum(type_name) = &field.value_type {
                if type_name.is_empty() {
                    return Err(SchemaError::InvalidField {
                        schema: name.clone(),
                        field: field.name.clone(),
                        reason: "enum field has no enum type name".to_string(),
                    }
                    .into());
                }
            }
            if field.change_notification_needs_prior_value && !field.needs_change_notification {
                return Err(SchemaError::InvalidField {
                    schema: name.clone(),
                    field: field.name.clone(),
                    reason: "prior value requested without change notification".to_string(),
                }
                .into());
            }
        }

        let mut by_field: HashMap<String, Vec<String>> = fields
            .iter()
            .map(|f| (f.name.clone(), Vec::new()))
            .collect();
        for entry in &downstreams {
            for dep in &entry.deps {
                let triggers = by_field.get_mut(dep).ok_or_else(|| SchemaError::UnknownDependency {
                    schema: name.clone(),
                    trigger: entry.trigger.clone(),
                    field: dep.clone(),
                })?;
                if !triggers.contains(&entry.trigger) {
                    triggers.push(entry.trigger.clone());
                }
            }
        }

        if options.require_networking || options.strict_networking {
            for field in &fields {
                if field.networking != Networking::Unspecified {
                    continue;
                }
                if options.strict_networking {
                    return Err(SchemaError::MissingNetworking {
                        schema: name.clone(),
                        field: field.name.clone(),
                    }
                    .into());
                }
                tracing::warn!(
                    schema = %name,
                    field = %field.name,
                    "no networking annotation; treating as unspecified"
                );
            }
        }

        let dispatch = DispatchIndex::build(&name, &fields);
        tracing::debug!(schema = %name, fields = fields.len(), "schema validated");

        Ok(Self {
            name,
            fields,
            downstream: DownstreamIndex { by_field },
            dispatch,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields of one kind, in declaration order
    pub fn of_kind(&self, kind: ValueKind) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(move |f| f.kind() == kind)
    }

    pub fn persisted(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|f| f.persisted)
    }

    /// Fields on the reliable replication stream
    pub fn reliable(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().filter(|f| f.is_reliable())
    }

    pub fn downstream(&self) -> &DownstreamIndex {
        &self.downstream
    }

    pub fn dispatch_index(&self) -> &DispatchIndex {
        &self.dispatch
    }

    /// Fields of one kind paired with their index, read from [`DispatchIndex`]
    pub fn dispatch_entries(
        &self,
        kind: ValueKind,
    ) -> impl Iterator<Item = (usize, &FieldDescriptor)> + '_ {
        self.dispatch
            .names(kind)
            .iter()
            .enumerate()
            .filter_map(|(index, name)| self.field(name).map(|field| (index, field)))
    }
}

/// Composable filters over field iterators
pub trait FieldIterExt<'a>: Iterator<Item = &'a FieldDescriptor> + Sized {
    /// Drop read-only fields
    fn writable(self) -> impl Iterator<Item = &'a FieldDescriptor> {
        self.filter(|f| !f.read_only)
    }
}

impl<'a, I: Iterator<Item = &'a FieldDescriptor>> FieldIterExt<'a> for I {}
