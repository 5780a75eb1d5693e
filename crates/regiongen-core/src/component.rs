//! Reference setter model
//!
//! An in-memory component that applies the same rules the generated C#
//! setters follow: normalize the incoming value, skip it when the change
//! guard says it is unchanged, capture the prior value when the field asks
//! for it, assign, then run the field's update hook and every downstream
//! trigger in declaration order.

use crate::error::{GenError, GenResult};
use crate::schema::{FieldDescriptor, FieldSchema};
use crate::value::FieldValue;
use std::collections::BTreeMap;

/// Side effect requested by an accepted change
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The field's own update hook, with the prior value when requested
    Update {
        field: String,
        prior: Option<FieldValue>,
    },
    /// A downstream recomputation function
    Trigger(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetOutcome {
    /// The change guard rejected the value; nothing was assigned
    Unchanged,
    Changed { notifications: Vec<Notification> },
}

impl SetOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, SetOutcome::Changed { .. })
    }

    pub fn notifications(&self) -> &[Notification] {
        match self {
            SetOutcome::Unchanged => &[],
            SetOutcome::Changed { notifications } => notifications,
        }
    }
}

/// Field values of one component, keyed by field name
#[derive(Debug, Clone)]
pub struct ComponentState<'s> {
    schema: &'s FieldSchema,
    values: BTreeMap<String, FieldValue>,
}

impl<'s> ComponentState<'s> {
    /// Every field starts at its type's zero value
    pub fn new(schema: &'s FieldSchema) -> Self {
        let values = schema
            .fields()
            .iter()
            .map(|f| (f.name.clone(), FieldValue::zero(&f.value_type)))
            .collect();
        Self { schema, values }
    }

    pub fn get(&self, name: &str) -> GenResult<&FieldValue> {
        self.values
            .get(name)
            .ok_or_else(|| GenError::UnknownField(name.to_string()))
    }

    pub fn values(&self) -> &BTreeMap<String, FieldValue> {
        &self.values
    }

    /// Apply a setter call
    pub fn set(&mut self, name: &str, value: FieldValue) -> GenResult<SetOutcome> {
        let schema = self.schema;
        let field = schema
            .field(name)
            .ok_or_else(|| GenError::UnknownField(name.to_string()))?;
        if field.read_only {
            return Err(GenError::ReadOnlyField(name.to_string()));
        }
        if value.kind() != field.kind() {
            return Err(GenError::Codec(format!(
                "field '{name}' is {} but got a {} value",
                field.kind(),
                value.kind()
            )));
        }

        let value = value.normalized();
        let triggers = schema.downstream().triggers(name);
        let current = self.get(name)?;

        // Plain storage setters assign unconditionally.
        let guarded = field.needs_change_notification || !triggers.is_empty();
        if guarded && field.value_type.change_guard().is_unchanged(current, &value) {
            return Ok(SetOutcome::Unchanged);
        }

        let prior = field
            .change_notification_needs_prior_value
            .then(|| current.clone());
        self.values.insert(name.to_string(), value);

        Ok(SetOutcome::Changed {
            notifications: notifications_for(field, prior, triggers),
        })
    }

    /// Overwrite values without running setters, as a load does
    pub fn load(&mut self, values: BTreeMap<String, FieldValue>) -> GenResult<()> {
        for (name, value) in values {
            let field = self
                .schema
                .field(&name)
                .ok_or_else(|| GenError::UnknownField(name.clone()))?;
            if value.kind() != field.kind() {
                return Err(GenError::Codec(format!(
                    "field '{name}' is {} but got a {} value",
                    field.kind(),
                    value.kind()
                )));
            }
            self.values.insert(name, value);
        }
        Ok(())
    }
}

fn notifications_for(
    field: &FieldDescriptor,
    prior: Option<FieldValue>,
    triggers: &[String],
) -> Vec<Notification> {
    let mut out = Vec::with_capacity(triggers.len() + 1);
    if field.needs_change_notification {
        out.push(Notification::Update {
            field: field.name.clone(),
            prior,
        });
    }
    out.extend(triggers.iter().cloned().map(Notification::Trigger));
    out
}
