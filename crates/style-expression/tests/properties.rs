//! Property tests: serialization is deterministic and keeps argument order.

use proptest::prelude::*;
use serde_json::{json, Value};
use style_expression::operators::{step, stop};
use style_expression::{Argument, Expression};

fn literal_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn expression_strategy() -> impl Strategy<Value = Expression> {
    let leaf = ("[a-z+*/-]{1,6}", prop::collection::vec(literal_strategy(), 0..4)).prop_map(
        |(operator, literals)| Expression::new(operator, literals.into_iter().map(Argument::from)),
    );
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            "[a-z+*/-]{1,6}",
            prop::collection::vec(
                prop_oneof![
                    inner.prop_map(Argument::from),
                    literal_strategy().prop_map(Argument::from),
                ],
                0..4,
            ),
        )
            .prop_map(|(operator, arguments)| Expression::new(operator, arguments))
    })
}

/// Reference shape: `[operator, s(a1), ..., s(an)]`.
fn expected_shape(expr: &Expression) -> Value {
    let mut array = vec![Value::from(expr.operator())];
    for argument in expr.arguments() {
        array.push(match argument {
            Argument::Expression(nested) => expected_shape(nested),
            Argument::Literal(value) => value.clone(),
        });
    }
    Value::Array(array)
}

proptest! {
    #[test]
    fn serialize_is_deterministic(expr in expression_strategy()) {
        prop_assert_eq!(expr.serialize(), expr.serialize());
    }

    #[test]
    fn serialize_matches_reference_shape(expr in expression_strategy()) {
        prop_assert_eq!(expr.serialize(), expected_shape(&expr));
    }

    #[test]
    fn serde_and_value_forms_agree(expr in expression_strategy()) {
        let text = expr.to_json_string().unwrap();
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(reparsed, expr.serialize());
    }

    #[test]
    fn step_flattens_stops_in_order(pairs in prop::collection::vec((any::<i32>(), "[a-z]{1,4}"), 0..8)) {
        let expr = step(0, pairs.iter().map(|(input, output)| stop(*input, output.as_str())));
        let mut expected = vec![json!("step"), json!(0)];
        for (input, output) in &pairs {
            expected.push(json!(input));
            expected.push(json!(output));
        }
        prop_assert_eq!(expr.serialize(), Value::Array(expected));
    }
}
