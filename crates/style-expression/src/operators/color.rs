//! Color operators.

use crate::expression::Expression;
use crate::types::{Argument, ColorArg, NumberArg};

/// Color from red, green and blue channels in `0..=255`, with alpha 1.
pub fn rgb(red: impl NumberArg, green: impl NumberArg, blue: impl NumberArg) -> Expression {
    Expression::new("rgb", [red.into(), green.into(), blue.into()])
}

/// Color from red, green and blue channels in `0..=255` and alpha in `0..=1`.
pub fn rgba(
    red: impl NumberArg,
    green: impl NumberArg,
    blue: impl NumberArg,
    alpha: impl NumberArg,
) -> Expression {
    Expression::new("rgba", [red.into(), green.into(), blue.into(), alpha.into()])
}

/// `rgba` applied to a single expression that yields the four channels.
pub fn rgba_from(expression: Expression) -> Expression {
    Expression::new("rgba", [Argument::from(expression)])
}

/// The `[r, g, b, a]` components of a color.
pub fn to_rgba(color: impl ColorArg) -> Expression {
    Expression::new("to-rgba", [color.into()])
}

/// Formats a packed ARGB color as the `rgba(r,g,b,a)` string expressions use.
pub fn color(argb: u32) -> String {
    style_color::color_to_rgba_string(argb)
}
