//! Value types and their per-behaviour strategy tables
//!
//! Every behaviour a generator needs from a field's type (target type name,
//! script type name, assert helper, change guard, binary encoding) is one
//! exhaustive `match` over [`ValueType`]. Adding a type without filling in a
//! table is a compile error; a table that deliberately has no strategy for a
//! type returns `None`, which generators surface as [`GenError::UnknownType`].

use crate::error::{Behavior, GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance used by float, vector and quaternion change guards
pub const CHANGE_EPSILON: f32 = 1e-4;

/// The closed set of field value types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Integer,
    Float,
    String,
    Vector3,
    Quaternion,
    Color,
    /// Target-language enum, carrying its type name
    Enum(String),
}

/// Payload-free discriminant of [`ValueType`], used for filtering and dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Boolean,
    Integer,
    Float,
    String,
    Vector3,
    Quaternion,
    Color,
    Enum,
}

/// How a setter decides that an incoming value equals the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeGuard {
    /// Plain equality
    Exact,
    /// `|old - new| < CHANGE_EPSILON`
    FloatEpsilon,
    /// Euclidean distance below `CHANGE_EPSILON`
    VectorDistance,
    /// Same rotation after normalizing the incoming quaternion
    QuaternionAngle,
}

/// Binary layout of one persisted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryEncoding {
    Boolean,
    Int32,
    Single,
    Utf16,
    Vector3,
    Quaternion,
    Color,
}

impl ValueType {
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueType::Boolean => ValueKind::Boolean,
            ValueType::Integer => ValueKind::Integer,
            ValueType::Float => ValueKind::Float,
            ValueType::String => ValueKind::String,
            ValueType::Vector3 => ValueKind::Vector3,
            ValueType::Quaternion => ValueKind::Quaternion,
            ValueType::Color => ValueKind::Color,
            ValueType::Enum(_) => ValueKind::Enum,
        }
    }

    /// Type name as written in the C# side of the target files
    pub fn cs_type(&self) -> &str {
        match self {
            ValueType::Boolean => "bool",
            ValueType::Integer => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Vector3 => "Vector3",
            ValueType::Quaternion => "Quaternion",
            ValueType::Color => "Color",
            ValueType::Enum(name) => name,
        }
    }

    /// Type name used in JSDoc annotations
    pub fn jsdoc_type(&self) -> &'static str {
        match self {
            ValueType::Boolean => "boolean",
            ValueType::Integer | ValueType::Float | ValueType::Enum(_) => "number",
            ValueType::String => "string",
            ValueType::Vector3 => "THREE.Vector3",
            ValueType::Quaternion => "THREE.Quaternion",
            ValueType::Color => "THREE.Color",
        }
    }

    /// Script-side argument assertion helper
    pub fn assert_function(&self) -> Option<&'static str> {
        match self {
            ValueType::Boolean => Some("assertBoolean"),
            ValueType::Integer | ValueType::Float => Some("assertNumber"),
            ValueType::String => Some("assertStringOrNull"),
            ValueType::Vector3 => Some("assertVector3"),
            ValueType::Quaternion => Some("assertQuaternion"),
            ValueType::Color => Some("assertColor"),
            ValueType::Enum(_) => None,
        }
    }

    pub fn change_guard(&self) -> ChangeGuard {
        match self {
            ValueType::Boolean
            | ValueType::Integer
            | ValueType::String
            | ValueType::Color
            | ValueType::Enum(_) => ChangeGuard::Exact,
            ValueType::Float => ChangeGuard::FloatEpsilon,
            ValueType::Vector3 => ChangeGuard::VectorDistance,
            ValueType::Quaternion => ChangeGuard::QuaternionAngle,
        }
    }

    pub fn binary_encoding(&self) -> Option<BinaryEncoding> {
        match self {
            ValueType::Boolean => Some(BinaryEncoding::Boolean),
            ValueType::Integer => Some(BinaryEncoding::Int32),
            ValueType::Float => Some(BinaryEncoding::Single),
            ValueType::String => Some(BinaryEncoding::Utf16),
            ValueType::Vector3 => Some(BinaryEncoding::Vector3),
            ValueType::Quaternion => Some(BinaryEncoding::Quaternion),
            ValueType::Color => Some(BinaryEncoding::Color),
            ValueType::Enum(_) => None,
        }
    }

    /// Stem of the host accessor functions (`getActorFloat`, `setActorFloat`, ...)
    pub fn accessor_stem(&self) -> Option<&'static str> {
        self.kind().accessor_stem()
    }

    /// Initializer used when a declaration has no explicit default
    pub fn implicit_default(&self) -> Option<&'static str> {
        match self {
            ValueType::Vector3 => Some("Vector3.zero"),
            ValueType::Quaternion => Some("Quaternion.identity"),
            ValueType::Boolean
            | ValueType::Integer
            | ValueType::Float
            | ValueType::String
            | ValueType::Color
            | ValueType::Enum(_) => None,
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, ValueType::Enum(_))
    }

    /// Resolve a table entry that may be missing into a typed error
    pub fn require<T>(&self, field: &str, behavior: Behavior, entry: Option<T>) -> GenResult<T> {
        entry.ok_or_else(|| GenError::UnknownType {
            field: field.to_string(),
            value_type: self.to_string(),
            behavior,
        })
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Enum(name) => write!(f, "enum {name}"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

impl ValueKind {
    pub const ALL: [ValueKind; 8] = [
        ValueKind::Boolean,
        ValueKind::Integer,
        ValueKind::Float,
        ValueKind::String,
        ValueKind::Vector3,
        ValueKind::Quaternion,
        ValueKind::Color,
        ValueKind::Enum,
    ];

    pub fn accessor_stem(self) -> Option<&'static str> {
        match self {
            ValueKind::Boolean => Some("Boolean"),
            ValueKind::Float => Some("Float"),
            ValueKind::String => Some("String"),
            ValueKind::Vector3 => Some("Vector3"),
            ValueKind::Quaternion => Some("Quaternion"),
            ValueKind::Color => Some("Color"),
            ValueKind::Integer | ValueKind::Enum => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Vector3 => "vector3",
            ValueKind::Quaternion => "quaternion",
            ValueKind::Color => "color",
            ValueKind::Enum => "enum",
        };
        f.write_str(name)
    }
}

impl BinaryEncoding {
    /// Writer method suffix: `writer.Write<suffix>(value)`.
    ///
    /// Booleans and vectors go through the project's own writer extensions.
    pub fn write_suffix(self) -> &'static str {
        match self {
            BinaryEncoding::Boolean => "VoosBoolean",
            BinaryEncoding::Int32 | BinaryEncoding::Single | BinaryEncoding::Quaternion => "",
            BinaryEncoding::Utf16 => "Utf16",
            BinaryEncoding::Vector3 => "VoosVector3",
            BinaryEncoding::Color => "Color",
        }
    }

    /// Reader method suffix: `reader.Read<suffix>()`
    pub fn read_suffix(self) -> &'static str {
        match self {
            BinaryEncoding::Boolean => "VoosBoolean",
            BinaryEncoding::Int32 => "Int32",
            BinaryEncoding::Single => "Single",
            BinaryEncoding::Utf16 => "Utf16",
            BinaryEncoding::Vector3 => "VoosVector3",
            BinaryEncoding::Quaternion => "Quaternion",
            BinaryEncoding::Color => "Color",
        }
    }
}

/// A concrete field value, used by the reference codec and setter model
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Boolean(bool),
    Integer(i32),
    Float(f32),
    String(String),
    Vector3([f32; 3]),
    Quaternion([f32; 4]),
    Color([f32; 4]),
    Enum(i32),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Boolean(_) => ValueKind::Boolean,
            FieldValue::Integer(_) => ValueKind::Integer,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::String(_) => ValueKind::String,
            FieldValue::Vector3(_) => ValueKind::Vector3,
            FieldValue::Quaternion(_) => ValueKind::Quaternion,
            FieldValue::Color(_) => ValueKind::Color,
            FieldValue::Enum(_) => ValueKind::Enum,
        }
    }

    /// Zero value of a type: identity rotation, empty string, zero vector
    pub fn zero(value_type: &ValueType) -> Self {
        match value_type {
            ValueType::Boolean => FieldValue::Boolean(false),
            ValueType::Integer => FieldValue::Integer(0),
            ValueType::Float => FieldValue::Float(0.0),
            ValueType::String => FieldValue::String(String::new()),
            ValueType::Vector3 => FieldValue::Vector3([0.0; 3]),
            ValueType::Quaternion => FieldValue::Quaternion([0.0, 0.0, 0.0, 1.0]),
            ValueType::Color => FieldValue::Color([0.0, 0.0, 0.0, 0.0]),
            ValueType::Enum(_) => FieldValue::Enum(0),
        }
    }

    /// Unit-length copy of a quaternion; other values are returned unchanged
    pub fn normalized(self) -> Self {
        match self {
            FieldValue::Quaternion(q) => {
                let len = q.iter().map(|c| c * c).sum::<f32>().sqrt();
                if len > f32::EPSILON {
                    FieldValue::Quaternion(q.map(|c| c / len))
                } else {
                    FieldValue::Quaternion([0.0, 0.0, 0.0, 1.0])
                }
            }
            other => other,
        }
    }
}

impl ChangeGuard {
    /// Whether `new` counts as the same value as `old`.
    ///
    /// Values of different kinds are never equal.
    pub fn is_unchanged(self, old: &FieldValue, new: &FieldValue) -> bool {
        match (self, old, new) {
            (ChangeGuard::FloatEpsilon, FieldValue::Float(a), FieldValue::Float(b)) => {
                (a - b).abs() < CHANGE_EPSILON
            }
            (ChangeGuard::VectorDistance, FieldValue::Vector3(a), FieldValue::Vector3(b)) => {
                let distance = a
                    .iter()
                    .zip(b)
                    .map(|(x, y)| (x - y) * (x - y))
                    .sum::<f32>()
                    .sqrt();
                distance < CHANGE_EPSILON
            }
            (ChangeGuard::QuaternionAngle, FieldValue::Quaternion(a), FieldValue::Quaternion(b)) => {
                let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
                dot.abs() > 1.0 - CHANGE_EPSILON
            }
            (ChangeGuard::Exact, a, b) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "value/value_tests.rs"]
mod value_tests;
