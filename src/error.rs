//! Typed errors for dyn-fluent-builder.
//!
//! Every failure a caller of `build()` can see is one of the enums below,
//! wrapped by the top-level [`Error`].

use thiserror::Error;

/// Top-level error type for builder operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A setter-style call that is not part of the builder protocol.
    #[error("Call error: {0}")]
    Call(#[from] CallError),

    /// The target type's descriptor is unusable.
    #[error("Descriptor error: {0}")]
    Describe(#[from] DescribeError),

    /// Constructing or post-initializing the target failed.
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error raised while intercepting a setter-style call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CallError {
    /// Method name does not carry the prefix and the argument is not a boolean.
    #[error("No builder method '{method}' accepting {argument}")]
    Unrecognized { method: String, argument: String },
}

/// Error in a type descriptor or the descriptor cache.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DescribeError {
    /// The type registered no constructor.
    #[error("Type '{type_name}' registers no constructor")]
    NoConstructor { type_name: &'static str },

    /// More than one constructor and none designated in the config.
    #[error(
        "Type '{type_name}' registers {count} constructors; designate one with BuilderConfig::constructor"
    )]
    AmbiguousConstructor {
        type_name: &'static str,
        count: usize,
    },

    /// Designated constructor index does not exist.
    #[error("Type '{type_name}' has {count} constructors, index {index} requested")]
    ConstructorOutOfRange {
        type_name: &'static str,
        index: usize,
        count: usize,
    },

    /// Two parameters of one constructor share a name.
    #[error("Type '{type_name}': constructor parameter '{name}' declared twice")]
    DuplicateParameter {
        type_name: &'static str,
        name: String,
    },

    /// Two fields/properties share a name.
    #[error("Type '{type_name}': member '{name}' declared twice")]
    DuplicateMember {
        type_name: &'static str,
        name: String,
    },

    /// A thread panicked while holding the descriptor cache lock.
    #[error("Descriptor cache lock poisoned")]
    CachePoisoned,
}

/// Error while constructing the target or assigning deferred values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConstructionError {
    /// A value cannot be converted to the parameter or member type.
    #[error("Cannot convert value for '{member}' to {expected}: {reason}")]
    Coercion {
        member: String,
        expected: String,
        reason: String,
    },

    /// The constructor pulled more arguments than the descriptor declares.
    #[error("Constructor of '{type_name}' requested argument {position}, only {count} declared")]
    MissingArgument {
        type_name: &'static str,
        position: usize,
        count: usize,
    },

    /// The constructor left declared arguments unread.
    #[error("Constructor of '{type_name}' consumed {consumed} of {expected} arguments")]
    UnconsumedArguments {
        type_name: &'static str,
        expected: usize,
        consumed: usize,
    },

    /// A deferred value names no field or property (strict mode only).
    #[error("Type '{type_name}' has no field or property named '{name}'")]
    UnknownMember {
        type_name: &'static str,
        name: String,
    },
}

/// Result type alias using dyn-fluent-builder's Error.
pub type BuildResult<T> = std::result::Result<T, Error>;
