//! Typed construction of style expressions.
//!
//! # Overview
//!
//! A style expression describes how to compute a color, number, string or
//! boolean from feature data and camera state. Expressions are exchanged as
//! JSON arrays of the form `[operator, ...arguments]`, nested arbitrarily.
//! This crate builds those arrays from Rust values: [`Expression`] holds one
//! operator application, the functions in [`operators`] constrain argument
//! shapes per operator, and [`Expression::serialize`] produces the nested
//! array form. Evaluating expressions is left to the consumer of that form.
//!
//! # Example
//!
//! ```
//! use style_expression::operators::*;
//! use serde_json::json;
//!
//! let density = interpolate(
//!     linear(),
//!     zoom(),
//!     [stop(0, rgb(0, 0, 255)), stop(10, rgb(255, 0, 0))],
//! );
//! assert_eq!(
//!     density.serialize(),
//!     json!(["interpolate", ["linear"], ["zoom"], 0, ["rgb", 0, 0, 255], 10, ["rgb", 255, 0, 0]])
//! );
//!
//! let is_point = not(eq(get("type"), "Point"));
//! assert_eq!(is_point.to_string(), r#"["!",["==",["get","type"],"Point"]]"#);
//! ```

pub mod error;
pub mod expression;
pub mod operators;
pub mod types;
pub mod util;

// Re-export the core public API
pub use error::ExpressionError;
pub use expression::Expression;
pub use style_color::Color;
pub use types::{Argument, BoolArg, ColorArg, NumberArg, OrderedArg, ScalarArg, StringArg};
pub use util::{stop, Stop};

/// Builds a `Vec<Argument>` from values of mixed kinds.
///
/// ```
/// use style_expression::{args, operators::{coalesce, get}};
/// use serde_json::json;
///
/// let expr = coalesce(args![get("name"), get("ref"), "unnamed"]);
/// assert_eq!(expr.serialize(), json!(["coalesce", ["get", "name"], ["get", "ref"], "unnamed"]));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Argument>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Argument::from($arg)),+]
    };
}
