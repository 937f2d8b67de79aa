//! Matching accumulated values to constructor parameters.

use crate::coerce::{coerce, zero_value};
use crate::descriptor::{Arguments, Constructor};
use crate::error::BuildResult;
use crate::naming::to_public_name;
use crate::values::{Accumulator, DeclaredDefaults};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Where a constructor argument's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentSource {
    /// Set by a call on the builder (or seeded from a declared default).
    Accumulated,
    /// A declared default not present among the accumulated values.
    Declared,
    /// The zero value of the parameter's kind.
    Zero,
}

/// A resolved constructor argument.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArgument {
    pub name: String,
    pub value: Value,
    pub source: ArgumentSource,
}

/// Constructor arguments plus the values left for post-construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// One entry per constructor parameter, in declaration order.
    pub arguments: Vec<BoundArgument>,

    /// Accumulated values no parameter consumed, keyed by public name.
    pub deferred: BTreeMap<String, Value>,
}

/// Resolve every parameter of `constructor` and collect the deferred values.
///
/// Per parameter, in order: the accumulated value with the same name, then a
/// declared default with the same name, then the zero value of its kind.
pub fn plan<T>(
    accumulated: &Accumulator,
    constructor: &Constructor<T>,
    declared: &DeclaredDefaults,
) -> BuildResult<Plan> {
    let mut arguments = Vec::with_capacity(constructor.params().len());

    for param in constructor.params() {
        let (value, source) = if let Some(value) = accumulated.get(&param.name) {
            (value.clone(), ArgumentSource::Accumulated)
        } else if let Some(value) = declared.get(&param.name) {
            (value.clone(), ArgumentSource::Declared)
        } else {
            (zero_value(&param.ty)?, ArgumentSource::Zero)
        };

        arguments.push(BoundArgument {
            name: param.name.clone(),
            value,
            source,
        });
    }

    let deferred: BTreeMap<String, Value> = accumulated
        .iter()
        .filter(|(name, _)| !constructor.params().iter().any(|p| &p.name == *name))
        .map(|(name, value)| (to_public_name(name), value.clone()))
        .collect();

    debug!(
        arguments = arguments.len(),
        deferred = deferred.len(),
        "Planned construction"
    );

    Ok(Plan {
        arguments,
        deferred,
    })
}

/// Coerce the planned arguments to their parameter kinds and invoke.
pub fn construct<T>(
    type_name: &'static str,
    constructor: &Constructor<T>,
    arguments: Vec<BoundArgument>,
) -> BuildResult<T> {
    let mut entries = Vec::with_capacity(arguments.len());
    for (param, argument) in constructor.params().iter().zip(arguments) {
        let value = coerce(&param.name, argument.value, &param.ty)?;
        entries.push((argument.name, value));
    }
    constructor.invoke(Arguments::new(type_name, entries))
}
