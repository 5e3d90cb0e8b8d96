use crate::expression::Expression;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};
use style_color::Color;

/// One positional argument of an [`Expression`]: either a nested expression or
/// a literal value that is emitted unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A nested operator application.
    Expression(Expression),
    /// A literal: number, string, boolean, `null`, or a JSON array/object
    /// carried verbatim (as the operand of `literal`).
    Literal(Value),
}

impl Argument {
    pub fn null() -> Self {
        Argument::Literal(Value::Null)
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, Argument::Expression(_))
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Argument::Expression(expr) => Some(expr),
            Argument::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Argument::Expression(_) => None,
            Argument::Literal(value) => Some(value),
        }
    }

    /// Nested expressions become their own arrays; literals pass through.
    pub fn serialize(&self) -> Value {
        match self {
            Argument::Expression(expr) => expr.to_value(),
            Argument::Literal(value) => value.clone(),
        }
    }
}

impl Serialize for Argument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Argument::Expression(expr) => Serialize::serialize(expr, serializer),
            Argument::Literal(value) => Serialize::serialize(value, serializer),
        }
    }
}

/// JSON has no NaN or infinities, so those become `null`.
fn number_literal(n: f64) -> Value {
    match Number::from_f64(n) {
        Some(number) => Value::Number(number),
        None => {
            log::warn!("non-finite number {n} has no JSON form, emitting null");
            Value::Null
        }
    }
}

impl From<Expression> for Argument {
    fn from(expr: Expression) -> Self {
        Argument::Expression(expr)
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Literal(value)
    }
}

impl From<bool> for Argument {
    fn from(b: bool) -> Self {
        Argument::Literal(Value::Bool(b))
    }
}

impl From<f64> for Argument {
    fn from(n: f64) -> Self {
        Argument::Literal(number_literal(n))
    }
}

impl From<f32> for Argument {
    fn from(n: f32) -> Self {
        Argument::Literal(number_literal(f64::from(n)))
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::Literal(Value::String(s))
    }
}

impl From<&String> for Argument {
    fn from(s: &String) -> Self {
        Argument::Literal(Value::String(s.clone()))
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::Literal(Value::String(s.to_string()))
    }
}

/// Colors are carried in their `rgba(r,g,b,a)` string form.
impl From<Color> for Argument {
    fn from(color: Color) -> Self {
        Argument::Literal(Value::String(color.to_string()))
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Argument::null, Into::into)
    }
}

// ------------------------------------------------------------ Argument shapes
//
// Each operator function states which literal kinds it accepts at each
// position. A nested `Expression` is accepted anywhere, and `Argument` is the
// untyped escape hatch for dynamically assembled lists.

/// A numeric literal or an expression producing a number.
pub trait NumberArg: Into<Argument> {}

/// A string literal or an expression producing a string.
pub trait StringArg: Into<Argument> {}

/// A boolean literal or an expression producing a boolean.
pub trait BoolArg: Into<Argument> {}

/// Operand of `==` / `!=`: number, string or boolean.
pub trait ScalarArg: Into<Argument> {}

/// Operand of `<`, `>`, `<=`, `>=`: number or string.
pub trait OrderedArg: Into<Argument> {}

/// A color string, a [`Color`], or an expression producing a color.
pub trait ColorArg: Into<Argument> {}

macro_rules! impl_argument_shapes {
    (@one $t:ty => [$($shape:ident),*]) => {
        $( impl $shape for $t {} )*
    };
    ($($t:ty),* => $shapes:tt) => {
        $( impl_argument_shapes!(@one $t => $shapes); )*
    };
}

macro_rules! impl_integer_argument {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Argument {
                fn from(n: $t) -> Self {
                    Argument::Literal(Value::from(n))
                }
            }
        )*
        impl_argument_shapes!($($t),* => [NumberArg, ScalarArg, OrderedArg]);
    };
}

impl_integer_argument!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl_argument_shapes!(f32, f64 => [NumberArg, ScalarArg, OrderedArg]);
impl_argument_shapes!(&str, String, &String => [StringArg, ScalarArg, OrderedArg, ColorArg]);
impl_argument_shapes!(bool => [BoolArg, ScalarArg]);
impl_argument_shapes!(Color => [ColorArg]);
impl_argument_shapes!(Expression, Argument => [NumberArg, StringArg, BoolArg, ScalarArg, OrderedArg, ColorArg]);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_conversions() {
        assert_eq!(Argument::from(3), Argument::Literal(json!(3)));
        assert_eq!(Argument::from(2.5), Argument::Literal(json!(2.5)));
        assert_eq!(Argument::from(0.5f32), Argument::Literal(json!(0.5)));
        assert_eq!(Argument::from("a"), Argument::Literal(json!("a")));
        assert_eq!(Argument::from(String::from("b")), Argument::Literal(json!("b")));
        assert_eq!(Argument::from(true), Argument::Literal(json!(true)));
        assert_eq!(Argument::from(u64::MAX), Argument::Literal(json!(u64::MAX)));
    }

    #[test]
    fn test_option_is_null_when_absent() {
        assert_eq!(Argument::from(None::<i32>), Argument::null());
        assert_eq!(Argument::from(Some("x")), Argument::Literal(json!("x")));
    }

    #[test]
    fn test_non_finite_numbers_become_null() {
        assert_eq!(Argument::from(f64::NAN), Argument::null());
        assert_eq!(Argument::from(f64::INFINITY), Argument::null());
        assert_eq!(Argument::from(f32::NEG_INFINITY), Argument::null());
    }

    #[test]
    fn test_color_is_converted_to_string() {
        let arg = Argument::from(Color::from_argb(0xff00_00ff));
        assert_eq!(arg, Argument::Literal(json!("rgba(0,0,255,1)")));
    }

    #[test]
    fn test_accessors() {
        let nested = Argument::from(Expression::nullary("zoom"));
        assert!(nested.is_expression());
        assert_eq!(nested.as_expression().map(Expression::operator), Some("zoom"));
        assert_eq!(nested.as_literal(), None);

        let literal = Argument::from(1);
        assert!(!literal.is_expression());
        assert_eq!(literal.as_literal(), Some(&json!(1)));
    }

    #[test]
    fn test_argument_serialize() {
        assert_eq!(Argument::from("x").serialize(), json!("x"));
        assert_eq!(Argument::null().serialize(), Value::Null);
        assert_eq!(Argument::from(Expression::nullary("pi")).serialize(), json!(["pi"]));
    }
}
