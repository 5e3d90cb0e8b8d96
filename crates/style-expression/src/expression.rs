//! The expression node and its serialization.

use crate::error::ExpressionError;
use crate::types::Argument;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// One operator application: an operator name and its ordered arguments.
///
/// Nodes are built bottom-up and never mutated, so an expression is always a
/// finite tree. No arity or type checks happen here; the typed functions in
/// [`crate::operators`] constrain shapes at the call site and everything else
/// is left to the evaluator that consumes the serialized form.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    operator: Cow<'static, str>,
    arguments: Vec<Argument>,
}

impl Expression {
    /// Builds a node from an operator name and any arguments, unvalidated.
    ///
    /// ```
    /// use style_expression::{args, Expression};
    /// use serde_json::json;
    ///
    /// let expr = Expression::new("+", args![1, 2]);
    /// assert_eq!(expr.serialize(), json!(["+", 1, 2]));
    /// ```
    pub fn new(
        operator: impl Into<Cow<'static, str>>,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> Self {
        Expression {
            operator: operator.into(),
            arguments: arguments.into_iter().collect(),
        }
    }

    /// Builds a zero-argument node such as `zoom` or `pi`.
    pub fn nullary(operator: impl Into<Cow<'static, str>>) -> Self {
        Expression {
            operator: operator.into(),
            arguments: Vec::new(),
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Converts the tree into nested `[operator, ...arguments]` arrays.
    ///
    /// Arguments keep their construction order. Nested expressions are
    /// replaced by their own arrays; literals, `null` included, are copied
    /// unchanged.
    pub fn serialize(&self) -> Value {
        log::trace!(
            "serializing \"{}\" expression with {} arguments",
            self.operator,
            self.arguments.len()
        );
        self.to_value()
    }

    pub(crate) fn to_value(&self) -> Value {
        let mut array = Vec::with_capacity(self.arguments.len() + 1);
        array.push(Value::String(self.operator.to_string()));
        array.extend(self.arguments.iter().map(|argument| argument.serialize()));
        Value::Array(array)
    }

    /// Encodes the expression as compact JSON text.
    pub fn to_json_string(&self) -> Result<String, ExpressionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, ExpressionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.arguments.len() + 1))?;
        seq.serialize_element(self.operator())?;
        for argument in &self.arguments {
            seq.serialize_element(argument)?;
        }
        seq.end()
    }
}

impl From<Expression> for Value {
    fn from(expr: Expression) -> Self {
        expr.serialize()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
