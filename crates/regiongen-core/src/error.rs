//! Error types for regiongen

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generation operations
#[derive(Error, Debug)]
pub enum GenError {
    /// The field schema failed validation
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A target file contains a BEGIN/END pair that does not line up
    #[error("malformed region '{marker}' in {} at line {line}: {problem}", path.display())]
    MalformedRegion {
        path: PathBuf,
        marker: String,
        line: usize,
        problem: RegionProblem,
    },

    /// A generator has no strategy for a field's value type
    #[error("no {behavior} strategy for field '{field}' of type {value_type}")]
    UnknownType {
        field: String,
        value_type: String,
        behavior: Behavior,
    },

    /// A lookup named a field the schema does not declare
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A setter was requested for a read-only field
    #[error("field is read-only: {0}")]
    ReadOnlyField(String),

    /// Placeholder set could not be compiled
    #[error("template error: {0}")]
    Template(String),

    /// Marker registry construction error
    #[error("registry error: {0}")]
    Registry(String),

    /// Reference codec error (type mismatch, truncated input)
    #[error("codec error: {0}")]
    Codec(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error on a target or configuration file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Schema validation failures, raised before any target file is opened
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A downstream entry depends on a field that is not declared
    #[error(
        "downstream function '{trigger}' in schema '{schema}' depends on undeclared field '{field}'"
    )]
    UnknownDependency {
        schema: String,
        trigger: String,
        field: String,
    },

    /// Two descriptors share a name
    #[error("field '{field}' is declared more than once in schema '{schema}'")]
    DuplicateField { schema: String, field: String },

    /// A descriptor is internally inconsistent
    #[error("field '{field}' in schema '{schema}' is invalid: {reason}")]
    InvalidField {
        schema: String,
        field: String,
        reason: String,
    },

    /// Strict mode: a field lacks an explicit networking annotation
    #[error("field '{field}' in schema '{schema}' has no networking annotation")]
    MissingNetworking { schema: String, field: String },
}

/// The way a marker pair is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionProblem {
    /// End of file reached inside the region
    Unterminated,
    /// The END line names a different marker
    MismatchedEnd { found: String },
    /// A BEGIN line appeared inside an open region
    NestedBegin { found: String },
}

impl fmt::Display for RegionProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionProblem::Unterminated => write!(f, "no matching END marker before end of file"),
            RegionProblem::MismatchedEnd { found } => {
                write!(f, "END marker names '{found}'")
            }
            RegionProblem::NestedBegin { found } => {
                write!(f, "BEGIN marker '{found}' opened before the region was closed")
            }
        }
    }
}

/// Per-type behaviour table a generator consults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Assert,
    BinaryWrite,
    BinaryRead,
    ScriptAccessor,
    Declaration,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Assert => write!(f, "assert"),
            Behavior::BinaryWrite => write!(f, "binary write"),
            Behavior::BinaryRead => write!(f, "binary read"),
            Behavior::ScriptAccessor => write!(f, "script accessor"),
            Behavior::Declaration => write!(f, "declaration"),
        }
    }
}

impl GenError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error must abort the whole run rather than a single file
    pub fn aborts_run(&self) -> bool {
        matches!(
            self,
            GenError::Schema(_) | GenError::Config(_) | GenError::Registry(_)
        )
    }
}
