//! Comparison and branching operators.
//!
//! `all`, `any`, `case`, `match` and `coalesce` are evaluated in operand
//! order downstream, so operands are emitted exactly as given.

use crate::expression::Expression;
use crate::types::{Argument, BoolArg, OrderedArg, ScalarArg};

pub fn eq(left: impl ScalarArg, right: impl ScalarArg) -> Expression {
    Expression::new("==", [left.into(), right.into()])
}

pub fn neq(left: impl ScalarArg, right: impl ScalarArg) -> Expression {
    Expression::new("!=", [left.into(), right.into()])
}

pub fn gt(left: impl OrderedArg, right: impl OrderedArg) -> Expression {
    Expression::new(">", [left.into(), right.into()])
}

pub fn lt(left: impl OrderedArg, right: impl OrderedArg) -> Expression {
    Expression::new("<", [left.into(), right.into()])
}

pub fn gte(left: impl OrderedArg, right: impl OrderedArg) -> Expression {
    Expression::new(">=", [left.into(), right.into()])
}

pub fn lte(left: impl OrderedArg, right: impl OrderedArg) -> Expression {
    Expression::new("<=", [left.into(), right.into()])
}

pub fn all(operands: impl IntoIterator<Item = impl BoolArg>) -> Expression {
    Expression::new("all", operands.into_iter().map(Into::into))
}

pub fn any(operands: impl IntoIterator<Item = impl BoolArg>) -> Expression {
    Expression::new("any", operands.into_iter().map(Into::into))
}

pub fn not(operand: impl BoolArg) -> Expression {
    Expression::new("!", [operand.into()])
}

/// `case`: alternating `condition, output` pairs followed by a fallback.
pub fn switch_case(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("case", arguments.into_iter().map(Into::into))
}

/// `match`: an input, then `label, output` pairs, then a fallback. A label may
/// be a single literal or a JSON array of literals.
pub fn match_(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("match", arguments.into_iter().map(Into::into))
}

/// The first operand that does not evaluate to `null`.
pub fn coalesce(arguments: impl IntoIterator<Item = impl Into<Argument>>) -> Expression {
    Expression::new("coalesce", arguments.into_iter().map(Into::into))
}
