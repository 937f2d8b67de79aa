//! Tests for a builder over a type with constructor parameters, plain fields
//! and a builder-declared default.

use dyn_fluent_builder::*;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq)]
struct Foo {
    boolean_field: bool,
    is_true: bool,
    message: Option<String>,
    number: i32,
    set_by_default_in_builder: Option<String>,
}

impl Foo {
    fn new(message: Option<String>, number: i32, is_true: bool) -> Self {
        Foo {
            boolean_field: false,
            is_true,
            message,
            number,
            set_by_default_in_builder: None,
        }
    }

    fn number(&self) -> i32 {
        self.number
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Buildable for Foo {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::builder("Foo")
            .constructor(
                [
                    Parameter::new("message", ValueType::Text),
                    Parameter::new("number", ValueType::Integer),
                    Parameter::new("isTrue", ValueType::Boolean),
                ],
                |args| Ok(Foo::new(args.next()?, args.next()?, args.next()?)),
            )
            .field("BooleanField", ValueType::Boolean, |foo, value: bool| {
                foo.boolean_field = value
            })
            .field("IsTrue", ValueType::Boolean, |foo, value: bool| {
                foo.is_true = value
            })
            .field("Number", ValueType::Integer, |foo, value: i32| {
                foo.number = value
            })
            .field(
                "SetByDefaultInBuilder",
                ValueType::Text,
                |foo, value: Option<String>| foo.set_by_default_in_builder = value,
            )
            .finish()
    }
}

const BUILDER_DEFAULT: &str = "Dynamic code is fun code.";

struct FooBuilder(DynamicBuilder<Foo>);

impl FooBuilder {
    fn new() -> Self {
        FooBuilder(
            DynamicBuilder::new().with_declared_defaults(
                DeclaredDefaults::new().with("SetByDefaultInBuilder", BUILDER_DEFAULT),
            ),
        )
    }

    /// Sets both booleans through the regular call path.
    fn with_booleans_of_value(
        &mut self,
        is_true: bool,
        boolean_field: bool,
    ) -> BuildResult<&mut Self> {
        self.call("IsTrue", is_true)?
            .call("BooleanField", boolean_field)?;
        Ok(self)
    }
}

impl Deref for FooBuilder {
    type Target = DynamicBuilder<Foo>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for FooBuilder {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

dyn_fluent_builder::fluent_setters!(FooBuilder {
    with_message => "WithMessage": &str,
    with_number => "WithNumber": i32,
    is_true => "IsTrue": bool,
    boolean_field => "BooleanField": bool,
});

#[test]
fn test_build_succeeds() {
    let result = FooBuilder::new().build();
    assert!(result.is_ok(), "Build failed: {:?}", result.err());
}

#[test]
fn test_build_sets_constructor_defaults() {
    let foo = FooBuilder::new().build().unwrap();

    assert!(!foo.is_true);
    assert_eq!(foo.number(), 0);
    assert_eq!(foo.message(), None);
}

#[test]
fn test_build_sets_field_defaults() {
    let foo = FooBuilder::new().build().unwrap();
    assert!(!foo.boolean_field);
}

#[test]
fn test_with_string_parameter() {
    let foo = FooBuilder::new()
        .call("WithMessage", "hello world")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(foo.message(), Some("hello world"));
    assert_eq!(foo.number(), 0);
    assert!(!foo.is_true);
}

#[test]
fn test_with_each_parameter() {
    let foo = FooBuilder::new()
        .call("WithMessage", "hello there!")
        .and_then(|b| b.call("WithNumber", 1337))
        .and_then(|b| b.call("IsTrue", true))
        .and_then(|b| b.build())
        .unwrap();

    assert!(foo.is_true);
    assert_eq!(foo.number(), 1337);
    assert_eq!(foo.message(), Some("hello there!"));
}

#[test]
fn test_with_non_constructor_boolean() {
    let foo = FooBuilder::new()
        .call("BooleanField", true)
        .unwrap()
        .build()
        .unwrap();

    assert!(foo.boolean_field);
    assert!(!foo.is_true);
}

#[test]
fn test_build_sets_builder_declared_default() {
    let builder = FooBuilder::new();
    let foo = builder.build().unwrap();

    let declared = builder
        .declared_defaults()
        .get("setByDefaultInBuilder")
        .and_then(Value::as_str);
    assert_eq!(declared, Some(BUILDER_DEFAULT));
    assert_eq!(foo.set_by_default_in_builder.as_deref(), Some(BUILDER_DEFAULT));
}

#[test]
fn test_explicit_call_overrides_declared_default() {
    let foo = FooBuilder::new()
        .call("WithSetByDefaultInBuilder", "overridden")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(foo.set_by_default_in_builder.as_deref(), Some("overridden"));
}

#[test]
fn test_declared_defaults_do_not_override_earlier_calls() {
    let mut builder = DynamicBuilder::<Foo>::new();
    builder.call("WithNumber", 42).unwrap();
    builder.call("WithMessage", "explicit").unwrap();

    let builder = builder.with_declared_defaults(
        DeclaredDefaults::new()
            .with("Number", 7)
            .with("message", "declared")
            .with("SetByDefaultInBuilder", BUILDER_DEFAULT),
    );
    let foo = builder.build().unwrap();

    assert_eq!(foo.number(), 42);
    assert_eq!(foo.message(), Some("explicit"));
    assert_eq!(foo.set_by_default_in_builder.as_deref(), Some(BUILDER_DEFAULT));
}

#[test]
fn test_prefixed_boolean_call_keeps_its_name() {
    let mut builder = FooBuilder::new();
    builder.call("WithIsTrue", true).unwrap();

    assert_eq!(builder.value("withIsTrue"), Some(&Value::Bool(true)));
    assert!(builder.value("isTrue").is_none());
    assert!(!builder.build().unwrap().is_true);
}

#[test]
fn test_build_with_custom_method() {
    let mut builder = FooBuilder::new();
    let foo = builder
        .with_booleans_of_value(true, true)
        .unwrap()
        .build()
        .unwrap();

    assert!(foo.boolean_field);
    assert!(foo.is_true);
}

#[test]
fn test_typed_setters() {
    let mut builder = FooBuilder::new();
    builder
        .with_message("typed")
        .and_then(|b| b.with_number(7))
        .and_then(|b| b.is_true(true))
        .and_then(|b| b.boolean_field(true))
        .unwrap();

    let foo = builder.build().unwrap();
    assert_eq!(foo.message(), Some("typed"));
    assert_eq!(foo.number(), 7);
    assert!(foo.is_true);
    assert!(foo.boolean_field);
}

#[test]
fn test_last_write_wins() {
    let mut builder = FooBuilder::new();
    builder.call("WithNumber", 1).unwrap();
    builder.call("WithNumber", 2).unwrap();

    assert_eq!(builder.build().unwrap().number(), 2);
}

#[test]
fn test_unrecognized_call_is_rejected() {
    let mut builder = FooBuilder::new();
    let err = builder.call("Message", "no prefix").err().unwrap();

    assert!(
        matches!(err, Error::Call(CallError::Unrecognized { ref method, .. }) if method == "Message"),
        "Expected unrecognized call error, got: {err}"
    );
    assert!(builder.value("message").is_none());
    assert!(!builder.intercept("Number", 5));
}

#[test]
fn test_builder_can_be_rebuilt() {
    let mut builder = FooBuilder::new();
    let first = builder.build().unwrap();
    builder.call("WithNumber", 9).unwrap();
    let second = builder.build().unwrap();

    assert_eq!(first.number(), 0);
    assert_eq!(second.number(), 9);
}

#[test]
fn test_plan_separates_arguments_and_deferred() {
    let mut builder = FooBuilder::new();
    builder
        .call("WithMessage", "planned")
        .and_then(|b| b.call("BooleanField", true))
        .unwrap();

    let plan = builder.plan().unwrap();
    let names: Vec<_> = plan.arguments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["message", "number", "isTrue"]);
    assert_eq!(plan.arguments[0].source, ArgumentSource::Accumulated);
    assert_eq!(plan.arguments[1].source, ArgumentSource::Zero);

    let deferred: Vec<_> = plan.deferred.keys().map(String::as_str).collect();
    assert_eq!(deferred, vec!["BooleanField", "SetByDefaultInBuilder"]);
}

#[test]
fn test_number_type_mismatch_is_fatal() {
    let err = FooBuilder::new()
        .call("WithNumber", "not a number")
        .unwrap()
        .build()
        .unwrap_err();

    assert!(
        matches!(err, Error::Construction(ConstructionError::Coercion { ref member, .. }) if member == "number"),
        "Expected coercion error, got: {err}"
    );
}

#[test]
fn test_number_out_of_range_is_fatal() {
    let err = FooBuilder::new()
        .call("WithNumber", i64::from(i32::MAX) + 1)
        .unwrap()
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("'number'"), "got: {err}");
}
