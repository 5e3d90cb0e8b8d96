use crate::expression::Expression;
use crate::types::{Argument, NumberArg};

/// Item `index` of the array produced by `array`.
pub fn at(index: impl NumberArg, array: Expression) -> Expression {
    Expression::new("at", [index.into(), Argument::from(array)])
}
