//! Color values for style expressions.
//!
//! Colors are packed 32-bit ARGB integers. Style expressions carry colors as
//! strings of the form `rgba(r,g,b,a)` where `r`, `g` and `b` range over
//! `0..=255` and `a` over `0..=1`; [`color_to_rgba_string`] produces that form.
//!
//! # Example
//!
//! ```
//! use style_color::{color_to_rgba_string, Color};
//!
//! assert_eq!(color_to_rgba_string(0xff00_ff00), "rgba(0,255,0,1)");
//!
//! let teal: Color = "#00808080".parse().unwrap();
//! assert_eq!(teal.to_string(), "rgba(0,128,128,0.502)");
//! ```

pub mod color;

pub use color::{color_to_rgba_string, Color};

use thiserror::Error;

/// Errors raised while parsing a hex color string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
