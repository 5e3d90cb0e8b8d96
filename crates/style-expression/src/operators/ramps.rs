//! Ramps, scales and interpolation curves.
//!
//! `step` and `interpolate` take a fixed prefix followed by stop pairs. Stops
//! are emitted in the order given; ascending inputs are the evaluator's
//! concern.

use crate::expression::Expression;
use crate::types::{Argument, NumberArg};
use crate::util::{flatten_stops, join};

pub use crate::util::{stop, Stop};

/// Piecewise-constant function of `input`.
///
/// Serializes as `["step", input, stop_input1, output1, ...]`.
pub fn step<S: Into<Stop>>(input: impl NumberArg, stops: impl IntoIterator<Item = S>) -> Expression {
    Expression::new("step", join([input.into()], flatten_stops(stops)))
}

/// Continuous function of `input`, shaped by `interpolation` (see [`linear`],
/// [`exponential`] and [`cubic_bezier`]).
///
/// Serializes as `["interpolate", interpolation, input, stop_input1, output1, ...]`.
pub fn interpolate<S: Into<Stop>>(
    interpolation: Expression,
    input: impl NumberArg,
    stops: impl IntoIterator<Item = S>,
) -> Expression {
    Expression::new(
        "interpolate",
        join([Argument::from(interpolation), input.into()], flatten_stops(stops)),
    )
}

pub fn linear() -> Expression {
    Expression::nullary("linear")
}

/// Exponential interpolation; `base` near 1 is close to linear, larger values
/// push the output towards the high end.
pub fn exponential(base: impl NumberArg) -> Expression {
    Expression::new("exponential", [base.into()])
}

/// Interpolation along the cubic bezier with control points `(x1, y1)` and
/// `(x2, y2)`, each coordinate in `0..=1`.
pub fn cubic_bezier(
    x1: impl NumberArg,
    y1: impl NumberArg,
    x2: impl NumberArg,
    y2: impl NumberArg,
) -> Expression {
    Expression::new("cubic-bezier", [x1.into(), y1.into(), x2.into(), y2.into()])
}
