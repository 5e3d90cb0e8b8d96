//! Feature data access.
//!
//! The `_in` variants take an explicit object expression instead of the
//! current feature's properties.

use crate::expression::Expression;
use crate::types::{Argument, StringArg};

/// The feature's properties object.
pub fn properties() -> Expression {
    Expression::nullary("properties")
}

/// One of `Point`, `MultiPoint`, `LineString`, `MultiLineString`, `Polygon`, `MultiPolygon`.
pub fn geometry_type() -> Expression {
    Expression::nullary("geometry-type")
}

pub fn id() -> Expression {
    Expression::nullary("id")
}

pub fn get(key: impl StringArg) -> Expression {
    Expression::new("get", [key.into()])
}

pub fn get_in(key: impl StringArg, object: Expression) -> Expression {
    Expression::new("get", [key.into(), Argument::from(object)])
}

pub fn has(key: impl StringArg) -> Expression {
    Expression::new("has", [key.into()])
}

pub fn has_in(key: impl StringArg, object: Expression) -> Expression {
    Expression::new("has", [key.into(), Argument::from(object)])
}

/// Length of a string or of an array-producing expression.
pub fn length(value: impl StringArg) -> Expression {
    Expression::new("length", [value.into()])
}
