//! dyn-fluent-builder: name-driven fluent builders for registered types.
//!
//! A [`DynamicBuilder<T>`] accepts setter-style calls by name
//! (`WithMessage("hi")`, or a bare boolean predicate such as `IsTrue(true)`),
//! stores the values, and on [`build`](DynamicBuilder::build) materializes a
//! `T`:
//!
//! 1. Every constructor parameter takes the accumulated value with the same
//!    name, else a builder-declared default, else the zero value of its kind.
//! 2. The constructor is invoked positionally.
//! 3. Accumulated values no parameter consumed are assigned to the
//!    same-named field or property of the new instance.
//!
//! Types opt in by implementing [`Buildable`], which registers their
//! constructor and members in a [`TypeDescriptor`]. Descriptors are computed
//! once per process and shared by every builder of that type.
//!
//! # Quick Start
//!
//! ```ignore
//! use dyn_fluent_builder::*;
//!
//! struct Foo { /* ... */ }
//!
//! impl Buildable for Foo {
//!     fn describe() -> TypeDescriptor<Self> {
//!         TypeDescriptor::builder("Foo")
//!             .constructor([Parameter::new("message", ValueType::Text)], |args| {
//!                 Ok(Foo::new(args.next()?))
//!             })
//!             .field("BooleanField", ValueType::Boolean, |foo, v: bool| foo.boolean_field = v)
//!             .finish()
//!     }
//! }
//!
//! let foo = DynamicBuilder::<Foo>::new()
//!     .with_declared_defaults(DeclaredDefaults::new().with("BooleanField", true))
//!     .call("WithMessage", "hello world")?
//!     .build()?;
//! ```

pub(crate) mod builder;
pub mod coerce;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fluent;
pub mod interceptor;
pub mod naming;
pub mod planner;
pub mod registry;
pub mod setter;
pub mod values;

// Re-export core types for convenience
pub use config::{BuilderConfig, BuilderConfigBuilder, PrefixMatch, Strictness};
pub use descriptor::{
    Arguments, Buildable, Constructor, Member, MemberKind, Parameter, TypeDescriptor,
    TypeDescriptorBuilder, ValueType,
};
pub use error::{BuildResult, CallError, ConstructionError, DescribeError, Error};
pub use fluent::DynamicBuilder;
pub use planner::{ArgumentSource, BoundArgument, Plan};
pub use serde_json::Value;
pub use values::{Accumulator, DeclaredDefaults};
