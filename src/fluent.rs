//! The dynamic fluent builder.
//!
//! # Example
//!
//! ```
//! use dyn_fluent_builder::{Buildable, DynamicBuilder, Parameter, TypeDescriptor, ValueType};
//!
//! #[derive(Debug)]
//! struct Server {
//!     host: Option<String>,
//!     port: u16,
//!     verbose: bool,
//! }
//!
//! impl Buildable for Server {
//!     fn describe() -> TypeDescriptor<Self> {
//!         TypeDescriptor::builder("Server")
//!             .constructor(
//!                 [
//!                     Parameter::new("host", ValueType::Text),
//!                     Parameter::new("port", ValueType::Integer),
//!                 ],
//!                 |args| {
//!                     Ok(Server {
//!                         host: args.next()?,
//!                         port: args.next()?,
//!                         verbose: false,
//!                     })
//!                 },
//!             )
//!             .field("Verbose", ValueType::Boolean, |s, v: bool| s.verbose = v)
//!             .finish()
//!     }
//! }
//!
//! # fn main() -> dyn_fluent_builder::BuildResult<()> {
//! let server = DynamicBuilder::<Server>::new()
//!     .call("WithHost", "localhost")?
//!     .call("WithPort", 8080)?
//!     .call("Verbose", true)?
//!     .build()?;
//!
//! assert_eq!(server.host.as_deref(), Some("localhost"));
//! assert_eq!(server.port, 8080);
//! assert!(server.verbose);
//! # Ok(())
//! # }
//! ```

use crate::config::BuilderConfig;
use crate::descriptor::Buildable;
use crate::error::{BuildResult, CallError};
use crate::interceptor::{describe_kind, resolve_call};
use crate::naming::to_variable_name;
use crate::planner::{self, Plan};
use crate::registry;
use crate::setter::apply_deferred;
use crate::values::{Accumulator, DeclaredDefaults};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Accumulates named values and materializes a `T` from them.
///
/// A builder can keep being mutated and built again after `build()`.
pub struct DynamicBuilder<T: Buildable> {
    values: Accumulator,
    declared: DeclaredDefaults,
    config: BuilderConfig,
    _target: PhantomData<fn() -> T>,
}

impl<T: Buildable> DynamicBuilder<T> {
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            values: Accumulator::default(),
            declared: DeclaredDefaults::new(),
            config,
            _target: PhantomData,
        }
    }

    /// Seed `defaults` as if each had been set before any call.
    ///
    /// Names already set on this builder keep their value, and later calls
    /// with the same name override the defaults.
    pub fn with_declared_defaults(mut self, defaults: DeclaredDefaults) -> Self {
        for (name, value) in defaults.iter() {
            if !self.values.contains(name) {
                self.values.record(name.clone(), value.clone());
            }
        }
        self.declared = defaults;
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn declared_defaults(&self) -> &DeclaredDefaults {
        &self.declared
    }

    /// Try to handle `method(argument)`; returns whether it was accepted.
    pub fn intercept(&mut self, method: &str, argument: impl Into<Value>) -> bool {
        let argument = argument.into();
        match resolve_call(method, &argument, &self.config) {
            Some(field) => {
                trace!(method, field = %field, "Accepted builder call");
                self.values.record(field, argument);
                true
            }
            None => {
                debug!(method, "Rejected builder call");
                false
            }
        }
    }

    /// Handle `method(argument)`, e.g. `call("WithMessage", "hi")` or
    /// `call("IsTrue", true)`.
    pub fn call(&mut self, method: &str, argument: impl Into<Value>) -> BuildResult<&mut Self> {
        let argument = argument.into();
        let kind = describe_kind(&argument);
        if !self.intercept(method, argument) {
            return Err(CallError::Unrecognized {
                method: method.to_string(),
                argument: kind.to_string(),
            }
            .into());
        }
        Ok(self)
    }

    /// Set a value by field name, bypassing the call convention.
    ///
    /// The name is canonicalized, so `set("Message", ..)` and
    /// `set("message", ..)` are the same.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.values.record(to_variable_name(name), value.into());
        self
    }

    /// Like [`set`](Self::set), for any serializable value.
    pub fn set_serialized<S: Serialize + ?Sized>(
        &mut self,
        name: &str,
        value: &S,
    ) -> BuildResult<&mut Self> {
        let value = serde_json::to_value(value)?;
        Ok(self.set(name, value))
    }

    /// The accumulated value for a canonical field name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn values(&self) -> &Accumulator {
        &self.values
    }

    /// Resolve constructor arguments and deferred values without building.
    pub fn plan(&self) -> BuildResult<Plan> {
        let descriptor = registry::describe::<T>()?;
        let constructor = descriptor.constructor(self.config.constructor)?;
        planner::plan(&self.values, constructor, &self.declared)
    }

    /// Construct a `T` and assign the values its constructor did not take.
    pub fn build(&self) -> BuildResult<T> {
        let descriptor = registry::describe::<T>()?;
        let constructor = descriptor.constructor(self.config.constructor)?;
        let plan = planner::plan(&self.values, constructor, &self.declared)?;

        let mut instance = planner::construct(descriptor.type_name(), constructor, plan.arguments)?;
        let assigned = apply_deferred(
            &mut instance,
            plan.deferred,
            descriptor,
            self.config.strictness,
        )?;

        debug!(
            type_name = descriptor.type_name(),
            assigned, "Built instance"
        );
        Ok(instance)
    }
}

impl<T: Buildable> Default for DynamicBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Buildable> Clone for DynamicBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            declared: self.declared.clone(),
            config: self.config.clone(),
            _target: PhantomData,
        }
    }
}

impl<T: Buildable> fmt::Debug for DynamicBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicBuilder")
            .field("target", &std::any::type_name::<T>())
            .field("values", &self.values)
            .field("declared", &self.declared)
            .field("config", &self.config)
            .finish()
    }
}

/// Generate typed setters that forward to `call` with a fixed method name.
///
/// The target type must reach [`DynamicBuilder::call`] through method
/// resolution, typically a newtype implementing `DerefMut`.
///
/// ```ignore
/// dyn_fluent_builder::fluent_setters!(FooBuilder {
///     with_message => "WithMessage": &str,
///     with_number => "WithNumber": i32,
///     is_true => "IsTrue": bool,
/// });
///
/// let foo = FooBuilder::new().with_message("hi")?.is_true(true)?.build()?;
/// ```
#[macro_export]
macro_rules! fluent_setters {
    ($Builder:ty { $( $setter:ident => $method:literal : $ty:ty ),* $(,)? }) => {
        impl $Builder {
            $(
                pub fn $setter(&mut self, value: $ty) -> $crate::BuildResult<&mut Self> {
                    self.call($method, value)?;
                    Ok(self)
                }
            )*
        }
    };
}
