//! Registration-time metadata for buildable types.
//!
//! A [`TypeDescriptor`] lists the constructors of a type (parameter names and
//! value kinds, plus a function that invokes the constructor positionally) and
//! its settable members (fields and properties with typed setters). Types
//! opt in by implementing [`Buildable`].
//!
//! # Example
//!
//! ```
//! use dyn_fluent_builder::{Buildable, Parameter, TypeDescriptor, ValueType};
//!
//! struct Point {
//!     x: i64,
//!     y: i64,
//!     label: Option<String>,
//! }
//!
//! impl Buildable for Point {
//!     fn describe() -> TypeDescriptor<Self> {
//!         TypeDescriptor::builder("Point")
//!             .constructor(
//!                 [
//!                     Parameter::new("x", ValueType::Integer),
//!                     Parameter::new("y", ValueType::Integer),
//!                 ],
//!                 |args| {
//!                     Ok(Point {
//!                         x: args.next()?,
//!                         y: args.next()?,
//!                         label: None,
//!                     })
//!                 },
//!             )
//!             .field("Label", ValueType::Text, |point, label: Option<String>| {
//!                 point.label = label
//!             })
//!             .finish()
//!     }
//! }
//! ```

use crate::coerce::extract;
use crate::error::{BuildResult, ConstructionError, DescribeError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// A type whose instances a [`DynamicBuilder`](crate::DynamicBuilder) can
/// materialize.
pub trait Buildable: Sized + 'static {
    /// Describe the constructors and settable members of `Self`.
    ///
    /// Called at most once per process; the result is cached.
    ///
    /// Runs while the process-wide descriptor cache is write-locked, so it
    /// must only register metadata. Building another `Buildable` or calling
    /// [`registry::describe`](crate::registry::describe) from here deadlocks.
    /// `ValueType::record` is fine: it stores a function that runs at build
    /// time, outside the lock.
    fn describe() -> TypeDescriptor<Self>;
}

/// Produces the zero value of a nested record type.
pub type ZeroFn = fn() -> BuildResult<Value>;

/// The closed set of value kinds a parameter or member can declare.
///
/// The kind picks the zero value used for unset constructor parameters and
/// the coercions applied before a value reaches a typed setter.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum ValueType {
    /// Text. Zero value is `null` (absent), never an empty string.
    Text,
    /// Signed or unsigned integer. Zero value is `0`.
    Integer,
    /// Floating point. Zero value is `0.0`.
    Float,
    /// Boolean. Zero value is `false`.
    Boolean,
    /// Sequence. Zero value is `[]`.
    List,
    /// String-keyed map. Zero value is `{}`.
    Map,
    /// Nested buildable type. Zero value is built recursively.
    Record {
        type_name: &'static str,
        zero: ZeroFn,
    },
    /// Anything. Zero value is `null` and no coercion is applied.
    Any,
}

impl ValueType {
    /// Kind for a nested type whose zero value is an empty build of `U`.
    pub fn record<U>() -> Self
    where
        U: Buildable + serde::Serialize,
    {
        ValueType::Record {
            type_name: std::any::type_name::<U>(),
            zero: crate::coerce::zero_record::<U>,
        }
    }

    /// Human-readable name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Boolean => "boolean",
            ValueType::List => "list",
            ValueType::Map => "map",
            ValueType::Record { type_name, .. } => *type_name,
            ValueType::Any => "any",
        }
    }
}

/// A named constructor parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// Parameter name in variable form (`isTrue`).
    pub name: String,
    pub ty: ValueType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Positional cursor over resolved constructor arguments.
///
/// Each call to [`next`](Arguments::next) converts the next argument to the
/// requested Rust type.
#[derive(Debug)]
pub struct Arguments {
    type_name: &'static str,
    entries: Vec<(String, Value)>,
    position: usize,
}

impl Arguments {
    pub(crate) fn new(type_name: &'static str, entries: Vec<(String, Value)>) -> Self {
        Self {
            type_name,
            entries,
            position: 0,
        }
    }

    /// Take the next argument as a `V`.
    pub fn next<V: DeserializeOwned>(&mut self) -> BuildResult<V> {
        let count = self.entries.len();
        let (name, value) =
            self.entries
                .get_mut(self.position)
                .ok_or(ConstructionError::MissingArgument {
                    type_name: self.type_name,
                    position: self.position,
                    count,
                })?;
        self.position += 1;
        Ok(extract(name.as_str(), std::mem::take(value))?)
    }

    /// Number of arguments not yet taken.
    pub fn remaining(&self) -> usize {
        self.entries.len() - self.position
    }

    pub(crate) fn consumed(&self) -> usize {
        self.position
    }
}

type Invoke<T> = Box<dyn Fn(&mut Arguments) -> BuildResult<T> + Send + Sync>;
type Assign<T> = Box<dyn Fn(&mut T, Value) -> BuildResult<()> + Send + Sync>;

/// A registered constructor.
pub struct Constructor<T> {
    params: Vec<Parameter>,
    invoke: Invoke<T>,
}

impl<T> Constructor<T> {
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Invoke with already-resolved arguments in declaration order.
    ///
    /// Fails if the constructor leaves any argument unread.
    pub fn invoke(&self, mut args: Arguments) -> BuildResult<T> {
        let instance = (self.invoke)(&mut args)?;
        if args.remaining() > 0 {
            return Err(ConstructionError::UnconsumedArguments {
                type_name: args.type_name,
                expected: args.entries.len(),
                consumed: args.consumed(),
            }
            .into());
        }
        Ok(instance)
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Whether a member is a plain field or a property with a setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Property,
}

/// A settable field or property.
pub struct Member<T> {
    name: String,
    kind: MemberKind,
    ty: ValueType,
    assign: Assign<T>,
}

impl<T> Member<T> {
    /// Member name in public form (`BooleanField`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn ty(&self) -> ValueType {
        self.ty
    }

    /// Convert `value` to the member's Rust type and store it on `target`.
    pub fn assign(&self, target: &mut T, value: Value) -> BuildResult<()> {
        (self.assign)(target, value)
    }
}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("ty", &self.ty)
            .finish_non_exhaustive()
    }
}

/// Constructors and members of a buildable type.
pub struct TypeDescriptor<T> {
    type_name: &'static str,
    constructors: Vec<Constructor<T>>,
    fields: Vec<Member<T>>,
    properties: Vec<Member<T>>,
}

impl<T: 'static> TypeDescriptor<T> {
    pub fn builder(type_name: &'static str) -> TypeDescriptorBuilder<T> {
        TypeDescriptorBuilder {
            descriptor: TypeDescriptor {
                type_name,
                constructors: Vec::new(),
                fields: Vec::new(),
                properties: Vec::new(),
            },
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn constructors(&self) -> &[Constructor<T>] {
        &self.constructors
    }

    pub fn fields(&self) -> &[Member<T>] {
        &self.fields
    }

    pub fn properties(&self) -> &[Member<T>] {
        &self.properties
    }

    /// Pick the constructor to use.
    ///
    /// With no designated index the type must register exactly one.
    pub fn constructor(&self, designated: Option<usize>) -> Result<&Constructor<T>, DescribeError> {
        let count = self.constructors.len();
        match designated {
            Some(index) => {
                self.constructors
                    .get(index)
                    .ok_or(DescribeError::ConstructorOutOfRange {
                        type_name: self.type_name,
                        index,
                        count,
                    })
            }
            None => match self.constructors.as_slice() {
                [] => Err(DescribeError::NoConstructor {
                    type_name: self.type_name,
                }),
                [only] => Ok(only),
                _ => Err(DescribeError::AmbiguousConstructor {
                    type_name: self.type_name,
                    count,
                }),
            },
        }
    }

    /// Find a member by exact public name, checking fields before properties.
    pub fn find_member(&self, name: &str) -> Option<&Member<T>> {
        self.fields
            .iter()
            .chain(self.properties.iter())
            .find(|member| member.name == name)
    }

    /// Check that names are unique within each constructor and across members.
    pub(crate) fn validate(&self) -> Result<(), DescribeError> {
        for constructor in &self.constructors {
            let mut seen = HashSet::new();
            for param in &constructor.params {
                if !seen.insert(param.name.as_str()) {
                    return Err(DescribeError::DuplicateParameter {
                        type_name: self.type_name,
                        name: param.name.clone(),
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for member in self.fields.iter().chain(self.properties.iter()) {
            if !seen.insert(member.name.as_str()) {
                return Err(DescribeError::DuplicateMember {
                    type_name: self.type_name,
                    name: member.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("constructors", &self.constructors)
            .field("fields", &self.fields)
            .field("properties", &self.properties)
            .finish()
    }
}

/// Registration API returned by [`TypeDescriptor::builder`].
pub struct TypeDescriptorBuilder<T> {
    descriptor: TypeDescriptor<T>,
}

impl<T: 'static> TypeDescriptorBuilder<T> {
    /// Register a constructor taking `params` in order.
    pub fn constructor<F>(mut self, params: impl IntoIterator<Item = Parameter>, invoke: F) -> Self
    where
        F: Fn(&mut Arguments) -> BuildResult<T> + Send + Sync + 'static,
    {
        self.descriptor.constructors.push(Constructor {
            params: params.into_iter().collect(),
            invoke: Box::new(invoke),
        });
        self
    }

    /// Register a field, named in public form.
    pub fn field<V, F>(self, name: impl Into<String>, ty: ValueType, set: F) -> Self
    where
        V: DeserializeOwned,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.member(MemberKind::Field, name.into(), ty, set)
    }

    /// Register a property, named in public form.
    pub fn property<V, F>(self, name: impl Into<String>, ty: ValueType, set: F) -> Self
    where
        V: DeserializeOwned,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.member(MemberKind::Property, name.into(), ty, set)
    }

    fn member<V, F>(mut self, kind: MemberKind, name: String, ty: ValueType, set: F) -> Self
    where
        V: DeserializeOwned,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let member_name = name.clone();
        let assign = move |target: &mut T, value: Value| -> BuildResult<()> {
            let typed: V = extract(&member_name, value)?;
            set(target, typed);
            Ok(())
        };
        let member = Member {
            name,
            kind,
            ty,
            assign: Box::new(assign),
        };
        match kind {
            MemberKind::Field => self.descriptor.fields.push(member),
            MemberKind::Property => self.descriptor.properties.push(member),
        }
        self
    }

    pub fn finish(self) -> TypeDescriptor<T> {
        self.descriptor
    }
}
