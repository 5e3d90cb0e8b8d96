//! Operator constructors, grouped by category.
//!
//! Every function returns an [`Expression`](crate::Expression) whose operator
//! is the name the evaluator expects (`sum` builds `"+"`, `switch_case`
//! builds `"case"`, ...). Functions whose names clash with Rust keywords carry
//! a trailing underscore.

pub mod color;
pub mod decision;
pub mod feature_data;
pub mod heatmap;
pub mod lookup;
pub mod math;
pub mod ramps;
pub mod string;
pub mod type_ops;
pub mod variable_binding;
pub mod zoom;

pub use color::*;
pub use decision::*;
pub use feature_data::*;
pub use heatmap::*;
pub use lookup::*;
pub use math::*;
pub use ramps::*;
pub use string::*;
pub use type_ops::*;
pub use variable_binding::*;
pub use zoom::*;
