//! Type assertions and conversions.
//!
//! The assertion and conversion operators take a list of candidate values
//! that the evaluator tries in order, so they are all variadic.

use crate::expression::Expression;
use crate::types::Argument;
use serde_json::Value;

/// Wraps an array or object so the evaluator reads it as data, not as an
/// expression.
pub fn literal(value: impl Into<Value>) -> Expression {
    Expression::new("literal", [Argument::Literal(value.into())])
}

/// Asserts an array, optionally with an item type and length:
/// `array([value])`, `array([type, value])` or `array([type, length, value])`.
pub fn array(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("array", arguments.into_iter().map(Into::into))
}

pub fn type_of(value: impl Into<Argument>) -> Expression {
    Expression::new("typeof", [value.into()])
}

pub fn string(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("string", arguments.into_iter().map(Into::into))
}

pub fn number(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("number", arguments.into_iter().map(Into::into))
}

pub fn bool(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("boolean", arguments.into_iter().map(Into::into))
}

pub fn object(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("object", arguments.into_iter().map(Into::into))
}

/// Colors convert to `rgba(r,g,b,a)`; other values follow JSON stringification.
pub fn to_string(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("to-string", arguments.into_iter().map(Into::into))
}

pub fn to_number(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("to-number", arguments.into_iter().map(Into::into))
}

pub fn to_bool(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("to-boolean", arguments.into_iter().map(Into::into))
}

pub fn to_color(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("to-color", arguments.into_iter().map(Into::into))
}
