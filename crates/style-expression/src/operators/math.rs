//! Arithmetic operators and constants.

use crate::expression::Expression;
use crate::types::NumberArg;

/// The natural logarithm of 2.
pub fn ln2() -> Expression {
    Expression::nullary("ln2")
}

pub fn pi() -> Expression {
    Expression::nullary("pi")
}

/// Euler's number.
pub fn e() -> Expression {
    Expression::nullary("e")
}

pub fn sum(operands: impl IntoIterator<Item = impl NumberArg>) -> Expression {
    Expression::new("+", operands.into_iter().map(Into::into))
}

pub fn product(operands: impl IntoIterator<Item = impl NumberArg>) -> Expression {
    Expression::new("*", operands.into_iter().map(Into::into))
}

pub fn subtract(minuend: impl NumberArg, subtrahend: impl NumberArg) -> Expression {
    Expression::new("-", [minuend.into(), subtrahend.into()])
}

/// Single-operand `-`, which the evaluator reads as negation.
pub fn negate(operand: impl NumberArg) -> Expression {
    Expression::new("-", [operand.into()])
}

pub fn division(dividend: impl NumberArg, divisor: impl NumberArg) -> Expression {
    Expression::new("/", [dividend.into(), divisor.into()])
}

pub fn mod_(dividend: impl NumberArg, divisor: impl NumberArg) -> Expression {
    Expression::new("%", [dividend.into(), divisor.into()])
}

pub fn pow(base: impl NumberArg, exponent: impl NumberArg) -> Expression {
    Expression::new("^", [base.into(), exponent.into()])
}

pub fn sqrt(operand: impl NumberArg) -> Expression {
    Expression::new("sqrt", [operand.into()])
}

pub fn log10(operand: impl NumberArg) -> Expression {
    Expression::new("log10", [operand.into()])
}

pub fn ln(operand: impl NumberArg) -> Expression {
    Expression::new("ln", [operand.into()])
}

pub fn log2(operand: impl NumberArg) -> Expression {
    Expression::new("log2", [operand.into()])
}

pub fn sin(operand: impl NumberArg) -> Expression {
    Expression::new("sin", [operand.into()])
}

pub fn cos(operand: impl NumberArg) -> Expression {
    Expression::new("cos", [operand.into()])
}

pub fn tan(operand: impl NumberArg) -> Expression {
    Expression::new("tan", [operand.into()])
}

pub fn asin(operand: impl NumberArg) -> Expression {
    Expression::new("asin", [operand.into()])
}

pub fn acos(operand: impl NumberArg) -> Expression {
    Expression::new("acos", [operand.into()])
}

pub fn atan(operand: impl NumberArg) -> Expression {
    Expression::new("atan", [operand.into()])
}

pub fn min(operands: impl IntoIterator<Item = impl NumberArg>) -> Expression {
    Expression::new("min", operands.into_iter().map(Into::into))
}

pub fn max(operands: impl IntoIterator<Item = impl NumberArg>) -> Expression {
    Expression::new("max", operands.into_iter().map(Into::into))
}
