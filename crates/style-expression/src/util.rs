//! Argument list helpers shared by the operator functions.

use crate::types::{Argument, NumberArg};

/// Concatenates a fixed-position prefix with a variadic suffix, keeping order.
pub fn join(
    prefix: impl IntoIterator<Item = Argument>,
    suffix: impl IntoIterator<Item = Argument>,
) -> Vec<Argument> {
    prefix.into_iter().chain(suffix).collect()
}

/// An `(input, output)` pair of a `step` or `interpolate` ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub input: Argument,
    pub output: Argument,
}

pub fn stop(input: impl NumberArg, output: impl Into<Argument>) -> Stop {
    Stop {
        input: input.into(),
        output: output.into(),
    }
}

impl<I: NumberArg, O: Into<Argument>> From<(I, O)> for Stop {
    fn from((input, output): (I, O)) -> Self {
        stop(input, output)
    }
}

/// Expands stops into `input, output, input, output, ...` in caller order.
///
/// Stops are neither sorted nor checked for ascending inputs.
pub fn flatten_stops<S: Into<Stop>>(stops: impl IntoIterator<Item = S>) -> Vec<Argument> {
    stops
        .into_iter()
        .flat_map(|s| {
            let Stop { input, output } = s.into();
            [input, output]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(arguments: &[Argument]) -> Vec<serde_json::Value> {
        arguments.iter().map(Argument::serialize).collect()
    }

    #[test]
    fn test_join_keeps_order() {
        let joined = join(
            vec![Argument::from("a"), Argument::from("b")],
            vec![Argument::from(1), Argument::from(2)],
        );
        assert_eq!(values(&joined), vec![json!("a"), json!("b"), json!(1), json!(2)]);
    }

    #[test]
    fn test_join_empty_sides() {
        assert!(join(Vec::new(), Vec::new()).is_empty());
        assert_eq!(values(&join(vec![Argument::from(1)], Vec::new())), vec![json!(1)]);
        assert_eq!(values(&join(Vec::new(), vec![Argument::from(1)])), vec![json!(1)]);
    }

    #[test]
    fn test_flatten_stops_unsorted() {
        let flat = flatten_stops([(10, "b"), (0, "a")]);
        assert_eq!(values(&flat), vec![json!(10), json!("b"), json!(0), json!("a")]);
    }

    #[test]
    fn test_flatten_no_stops() {
        assert!(flatten_stops(Vec::<Stop>::new()).is_empty());
    }
}
