//! String operators.

use crate::expression::Expression;
use crate::types::StringArg;

/// Uppercase per the Unicode default case conversion, with no locale rules.
pub fn upcase(operand: impl StringArg) -> Expression {
    Expression::new("upcase", [operand.into()])
}

pub fn downcase(operand: impl StringArg) -> Expression {
    Expression::new("downcase", [operand.into()])
}

pub fn concat(operands: impl IntoIterator<Item = impl StringArg>) -> Expression {
    Expression::new("concat", operands.into_iter().map(Into::into))
}
