//! `let` / `var`.

use crate::expression::Expression;
use crate::types::{Argument, StringArg};
use crate::util::join;
use serde_json::Value;

/// Binds each `(name, value)` in order, then evaluates `body`.
///
/// Serializes as `["let", name1, value1, name2, value2, ..., body]`.
pub fn let_<N, V>(bindings: impl IntoIterator<Item = (N, V)>, body: impl Into<Argument>) -> Expression
where
    N: Into<String>,
    V: Into<Argument>,
{
    let pairs = bindings
        .into_iter()
        .flat_map(|(name, value)| [Argument::Literal(Value::String(name.into())), value.into()]);
    Expression::new("let", join(pairs, [body.into()]))
}

/// References a name bound by an enclosing `let`.
pub fn var(name: impl StringArg) -> Expression {
    Expression::new("var", [name.into()])
}
