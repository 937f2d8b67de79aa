//! Builder configuration.

use crate::builder::impl_builder;

/// How the setter prefix is matched and removed from a method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixMatch {
    /// The prefix may appear anywhere in the name and every occurrence is
    /// removed: `ValueWithUnits` is accepted and maps to `valueUnits`.
    #[default]
    Anywhere,

    /// The name must start with the prefix; only that occurrence is removed.
    Leading,
}

/// What to do with a deferred value that names no field or property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Skip it and log at debug level.
    #[default]
    Lenient,

    /// Fail the build with `ConstructionError::UnknownMember`.
    Strict,
}

/// Configuration for a [`DynamicBuilder`](crate::DynamicBuilder).
///
/// ```
/// use dyn_fluent_builder::{BuilderConfig, PrefixMatch, Strictness};
///
/// let config = BuilderConfig::builder()
///     .prefix("Set")
///     .prefix_match(PrefixMatch::Leading)
///     .strictness(Strictness::Strict)
///     .build();
///
/// assert_eq!(config.prefix, "Set");
/// assert_eq!(config.constructor, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BuilderConfig {
    /// Setter prefix for non-boolean calls (default: "With").
    pub prefix: String,

    /// Prefix matching mode (default: `Anywhere`).
    pub prefix_match: PrefixMatch,

    /// Remove the prefix from boolean calls too, so `WithIsTrue(true)` sets
    /// `isTrue` instead of `withIsTrue` (default: false).
    pub strip_boolean_prefix: bool,

    /// Handling of deferred values without a matching member
    /// (default: `Lenient`).
    pub strictness: Strictness,

    /// Index of the constructor to use when the target registers several.
    /// With `None`, exactly one constructor must be registered.
    pub constructor: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            prefix: "With".into(),
            prefix_match: PrefixMatch::Anywhere,
            strip_boolean_prefix: false,
            strictness: Strictness::Lenient,
            constructor: None,
        }
    }
}

impl_builder!(BuilderConfig, BuilderConfigBuilder {
    optional {
        prefix: String,
        prefix_match: PrefixMatch,
        strip_boolean_prefix: bool,
        strictness: Strictness,
    }
    optional_or {
        constructor: usize,
    }
});
