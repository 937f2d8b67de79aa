//! Zero values and value coercion.
//!
//! Coercion is limited to numeric widening/narrowing between integers and
//! floats. Every other kind must already match; typed extraction then goes
//! through `serde_json::from_value`, which enforces integer ranges.

use crate::descriptor::{Buildable, ValueType};
use crate::error::{BuildResult, ConstructionError};
use crate::fluent::DynamicBuilder;
use crate::interceptor::describe_kind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// The value an unset constructor parameter of kind `ty` receives.
pub fn zero_value(ty: &ValueType) -> BuildResult<Value> {
    Ok(match ty {
        ValueType::Text | ValueType::Any => Value::Null,
        ValueType::Integer => Value::from(0),
        ValueType::Float => Value::from(0.0),
        ValueType::Boolean => Value::Bool(false),
        ValueType::List => Value::Array(Vec::new()),
        ValueType::Map => Value::Object(Map::new()),
        ValueType::Record { zero, .. } => zero()?,
    })
}

/// Build `U` with no calls and serialize it.
pub(crate) fn zero_record<U>() -> BuildResult<Value>
where
    U: Buildable + Serialize,
{
    let instance = DynamicBuilder::<U>::new().build()?;
    Ok(serde_json::to_value(instance)?)
}

/// Normalize `value` to the kind `ty` declares.
pub fn coerce(member: &str, value: Value, ty: &ValueType) -> Result<Value, ConstructionError> {
    match (ty, value) {
        (ValueType::Any, value) => Ok(value),
        (ValueType::Text, value @ (Value::String(_) | Value::Null)) => Ok(value),
        (ValueType::Boolean, value @ Value::Bool(_)) => Ok(value),
        (ValueType::List, value @ Value::Array(_)) => Ok(value),
        (ValueType::Map, value @ Value::Object(_)) => Ok(value),
        (ValueType::Record { .. }, value @ (Value::Object(_) | Value::Null)) => Ok(value),
        (ValueType::Integer, Value::Number(number)) => integer(member, number),
        (ValueType::Float, Value::Number(number)) => float(member, number),
        (ty, value) => Err(mismatch(member, ty.name(), describe_kind(&value))),
    }
}

fn integer(member: &str, number: Number) -> Result<Value, ConstructionError> {
    if number.is_i64() || number.is_u64() {
        return Ok(Value::Number(number));
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(Value::from(f as i64))
        }
        _ => Err(ConstructionError::Coercion {
            member: member.to_string(),
            expected: "integer".to_string(),
            reason: format!("{number} has a fractional part or is out of range"),
        }),
    }
}

fn float(member: &str, number: Number) -> Result<Value, ConstructionError> {
    number
        .as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| ConstructionError::Coercion {
            member: member.to_string(),
            expected: "float".to_string(),
            reason: format!("{number} is not representable as a float"),
        })
}

fn mismatch(member: &str, expected: &str, found: &str) -> ConstructionError {
    ConstructionError::Coercion {
        member: member.to_string(),
        expected: expected.to_string(),
        reason: format!("got {found}"),
    }
}

/// Convert `value` into the Rust type `V`.
pub fn extract<V: DeserializeOwned>(member: &str, value: Value) -> Result<V, ConstructionError> {
    serde_json::from_value(value).map_err(|e| ConstructionError::Coercion {
        member: member.to_string(),
        expected: std::any::type_name::<V>().to_string(),
        reason: e.to_string(),
    })
}
