use crate::expression::Expression;

/// Current zoom level. Valid only as the input of a top-level `step` or
/// `interpolate`.
pub fn zoom() -> Expression {
    Expression::nullary("zoom")
}
