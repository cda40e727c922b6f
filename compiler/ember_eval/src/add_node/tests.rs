use super::*;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

fn node() -> AddNode {
    AddNode::new(NodeId::new(1))
}

fn big(n: &str) -> Value {
    match n.parse::<BigInt>() {
        Ok(n) => Value::big_number(n),
        Err(e) => panic!("bad literal {n}: {e}"),
    }
}

fn add(node: &AddNode, left: Value, right: Value) -> Value {
    match node.evaluate(left, right) {
        Ok(v) => v,
        Err(e) => panic!("unexpected type error: {e}"),
    }
}

// Integer fast path

#[test]
fn small_integers_take_fast_path() {
    let n = node();
    let result = add(&n, Value::integer(2), Value::integer(3));
    assert!(result.is_same_representation(&Value::integer(5)));
    assert_eq!(n.state(), SpecializationState::CommittedInteger);
    assert!(!n.integer_path_excluded());
}

#[test]
fn monomorphic_site_stays_on_fast_path() {
    let n = node();
    for i in 0..100 {
        let result = add(&n, Value::integer(i), Value::integer(i));
        assert!(result.is_same_representation(&Value::integer(i * 2)));
    }
    assert_eq!(n.state(), SpecializationState::CommittedInteger);

    let profile = n.profile();
    assert_eq!(profile.integer_fast_path, 100);
    assert_eq!(profile.slow_path_entries, 1, "only the first call re-dispatches");
    assert_eq!(profile.transitions, 1);
}

// Overflow

#[test]
fn overflow_widens_to_big_number() {
    let n = node();
    add(&n, Value::integer(1), Value::integer(1));

    let result = add(&n, Value::integer(i64::MAX), Value::integer(1));
    assert!(result.is_same_representation(&big("9223372036854775808")));
    assert_eq!(n.state(), SpecializationState::CommittedBigNumber);
    assert!(n.integer_path_excluded());
}

#[test]
fn overflow_on_first_call() {
    let n = node();
    let result = add(&n, Value::integer(i64::MIN), Value::integer(-1));
    assert!(result.is_same_representation(&big("-9223372036854775809")));
    assert_eq!(n.state(), SpecializationState::CommittedBigNumber);
    assert!(n.integer_path_excluded());
}

#[test]
fn overflow_both_directions_is_exact() {
    let n = node();
    assert_eq!(
        add(&n, Value::integer(i64::MAX), Value::integer(i64::MAX)),
        big("18446744073709551614")
    );
    assert_eq!(
        add(&n, Value::integer(i64::MIN), Value::integer(i64::MIN)),
        big("-18446744073709551616")
    );
}

#[test]
fn results_stay_correct_after_overflow() {
    let n = node();

    let first = add(&n, Value::integer(20), Value::integer(22));
    assert!(first.is_same_representation(&Value::integer(42)));

    let second = add(&n, Value::integer(i64::MAX), Value::integer(2));
    assert_eq!(second, big("9223372036854775809"));

    // Fast path is gone for this node; the value is still right.
    let third = add(&n, Value::integer(20), Value::integer(22));
    assert_eq!(third, Value::integer(42));
    assert!(third.is_same_representation(&Value::big_number(42_i64)));

    assert_eq!(n.state(), SpecializationState::CommittedBigNumber);
    assert_eq!(n.profile().slow_path_entries, 2);
}

// Arbitrary precision

#[test]
fn big_numbers_add_exactly() {
    let n = node();
    let a = big("123456789012345678901234567890");
    let b = big("987654321098765432109876543210");
    assert_eq!(
        add(&n, a.clone(), b.clone()),
        big("1111111110111111111011111111100")
    );
    assert_eq!(add(&n, a.clone(), b.clone()), add(&n, b, a));
    assert_eq!(n.state(), SpecializationState::CommittedBigNumber);
    assert!(!n.integer_path_excluded());
}

#[test]
fn integer_is_widened_for_big_number_operand() {
    let n = node();
    let result = add(&n, Value::integer(1), big("99999999999999999999"));
    assert!(result.is_same_representation(&big("100000000000000000000")));

    let result = add(&n, big("-99999999999999999999"), Value::integer(-1));
    assert!(result.is_same_representation(&big("-100000000000000000000")));
}

#[test]
fn big_number_result_is_never_narrowed() {
    let n = node();
    let result = add(&n, Value::big_number(2_i64), Value::integer(3));
    assert!(result.is_same_representation(&Value::big_number(5_i64)));
}

#[test]
fn committed_integer_widens_on_big_operand() {
    let n = node();
    add(&n, Value::integer(1), Value::integer(2));
    assert_eq!(n.state(), SpecializationState::CommittedInteger);

    add(&n, Value::integer(1), Value::big_number(2_i64));
    assert_eq!(n.state(), SpecializationState::CommittedBigNumber);
    assert!(!n.integer_path_excluded());
}

#[test]
fn big_number_commitment_keeps_small_integer_results() {
    let n = node();
    add(&n, Value::big_number(1_i64), Value::big_number(2_i64));
    assert_eq!(n.state(), SpecializationState::CommittedBigNumber);

    let sum = add(&n, Value::integer(1), Value::integer(2));
    let fresh = add(&node(), Value::integer(1), Value::integer(2));
    let generic = AddNode::builder(NodeId::new(2))
        .mode(DispatchMode::Generic)
        .build();
    let from_generic = add(&generic, Value::integer(1), Value::integer(2));

    assert!(sum.is_same_representation(&Value::integer(3)));
    assert!(sum.is_same_representation(&fresh));
    assert!(sum.is_same_representation(&from_generic));
    assert_eq!(n.state(), SpecializationState::CommittedBigNumber);
    assert_eq!(n.profile().integer_fast_path, 1);
    assert_eq!(n.profile().transitions, 1);
}

#[test]
fn big_number_commitment_overflow_excludes_integer_path() {
    let n = node();
    add(&n, Value::integer(1), Value::big_number(2_i64));

    assert_eq!(
        add(&n, Value::integer(i64::MAX), Value::integer(1)),
        big("9223372036854775808")
    );
    assert_eq!(n.state(), SpecializationState::CommittedBigNumber);
    assert!(n.integer_path_excluded());

    let later = add(&n, Value::integer(1), Value::integer(2));
    assert!(later.is_same_representation(&Value::big_number(3_i64)));
}

// String concatenation

#[test]
fn text_concatenates_in_order() {
    let n = node();
    assert_eq!(add(&n, Value::text("a"), Value::integer(1)), Value::text("a1"));
    assert_eq!(add(&n, Value::integer(1), Value::text("a")), Value::text("1a"));
    assert_eq!(add(&n, Value::text("ab"), Value::text("cd")), Value::text("abcd"));
    assert_eq!(add(&n, Value::text(""), Value::text("")), Value::text(""));
    assert_eq!(n.state(), SpecializationState::CommittedString);
}

#[test]
fn text_renders_big_numbers_and_negatives() {
    let n = node();
    assert_eq!(
        add(&n, Value::text("n="), big("-100000000000000000000")),
        Value::text("n=-100000000000000000000")
    );
    assert_eq!(
        add(&n, Value::integer(-5), Value::text("!")),
        Value::text("-5!")
    );
}

#[test]
fn text_renders_opaque_operand() {
    let n = node();
    assert_eq!(
        add(&n, Value::text("flag: "), Value::boolean(true)),
        Value::text("flag: true")
    );
    assert_eq!(add(&n, Value::null(), Value::text("?")), Value::text("NULL?"));
    assert_eq!(
        add(&n, Value::function("main"), Value::text("()")),
        Value::text("main()")
    );
    assert_eq!(n.state(), SpecializationState::CommittedString);
}

#[test]
fn committed_string_serves_all_text_combinations() {
    let n = node();
    add(&n, Value::text("a"), Value::text("b"));
    add(&n, Value::text("a"), Value::integer(1));
    add(&n, Value::big_number(1_i64), Value::text("b"));
    add(&n, Value::text("a"), Value::null());
    assert_eq!(n.state(), SpecializationState::CommittedString);
    assert_eq!(n.profile().slow_path_entries, 1);
    assert_eq!(n.profile().string_path, 4);
}

// Widening to Generic

#[test]
fn numeric_commitment_meets_text() {
    let n = node();
    add(&n, Value::integer(1), Value::integer(2));
    assert_eq!(add(&n, Value::text("x"), Value::integer(2)), Value::text("x2"));
    assert_eq!(n.state(), SpecializationState::Generic);
}

#[test]
fn big_number_commitment_meets_text() {
    let n = node();
    add(&n, Value::big_number(1_i64), Value::integer(2));
    add(&n, Value::integer(2), Value::text("y"));
    assert_eq!(n.state(), SpecializationState::Generic);
}

#[test]
fn string_commitment_meets_numbers() {
    let n = node();
    add(&n, Value::text("x"), Value::text("y"));
    let sum = add(&n, Value::integer(2), Value::integer(2));
    assert!(sum.is_same_representation(&Value::integer(4)));
    assert_eq!(n.state(), SpecializationState::Generic);
}

#[test]
fn string_commitment_meets_overflow() {
    let n = node();
    add(&n, Value::text("x"), Value::text("y"));
    assert_eq!(
        add(&n, Value::integer(i64::MAX), Value::integer(i64::MAX)),
        big("18446744073709551614")
    );
    assert_eq!(n.state(), SpecializationState::Generic);
    assert!(n.integer_path_excluded());
}

#[test]
fn generic_is_absorbing_and_correct() {
    let n = node();
    add(&n, Value::integer(1), Value::integer(1));
    add(&n, Value::text("a"), Value::integer(1));
    assert_eq!(n.state(), SpecializationState::Generic);
    let transitions = n.profile().transitions;

    let small = add(&n, Value::integer(3), Value::integer(4));
    assert!(small.is_same_representation(&Value::integer(7)));
    assert_eq!(add(&n, big("10"), Value::integer(4)), Value::integer(14));
    assert_eq!(add(&n, Value::text("a"), Value::text("b")), Value::text("ab"));
    assert_eq!(add(&n, Value::boolean(false), Value::text("!")), Value::text("false!"));
    assert!(n.evaluate(Value::null(), Value::null()).is_err());

    assert_eq!(n.state(), SpecializationState::Generic);
    assert_eq!(n.profile().transitions, transitions);
}

#[test]
fn generic_overflow_excludes_fast_path_without_leaving_generic() {
    let n = node();
    add(&n, Value::integer(1), Value::integer(1));
    add(&n, Value::text("a"), Value::integer(1));

    assert_eq!(
        add(&n, Value::integer(i64::MAX), Value::integer(1)),
        big("9223372036854775808")
    );
    assert_eq!(n.state(), SpecializationState::Generic);
    assert!(n.integer_path_excluded());

    let later = add(&n, Value::integer(1), Value::integer(1));
    assert!(later.is_same_representation(&Value::big_number(2_i64)));
}

// Type errors

#[test]
fn unsupported_pair_is_a_type_error() {
    let n = node();
    let Err(err) = n.evaluate(Value::null(), Value::boolean(true)) else {
        panic!("expected type error");
    };
    assert_eq!(err.operation, "+");
    assert_eq!(err.node, NodeId::new(1));
    assert_eq!(err.operands(), &[Value::null(), Value::boolean(true)]);
    assert_eq!(n.state(), SpecializationState::Uncommitted);
    assert_eq!(n.profile().type_errors, 1);
    assert_eq!(n.profile().transitions, 0);
}

#[test]
fn opaque_with_number_is_a_type_error() {
    let n = node();
    assert!(n.evaluate(Value::boolean(true), Value::integer(1)).is_err());
    assert!(n.evaluate(Value::integer(1), Value::function("f")).is_err());
    assert!(n.evaluate(Value::big_number(1_i64), Value::null()).is_err());
}

#[test]
fn type_error_does_not_change_commitment() {
    let n = node();
    add(&n, Value::integer(1), Value::integer(1));
    assert!(n.evaluate(Value::null(), Value::null()).is_err());
    assert_eq!(n.state(), SpecializationState::CommittedInteger);

    let s = node();
    add(&s, Value::text("a"), Value::text("b"));
    assert!(s.evaluate(Value::boolean(true), Value::integer(1)).is_err());
    assert_eq!(s.state(), SpecializationState::CommittedString);
}

#[test]
fn type_error_reports_location() {
    let n = AddNode::builder(NodeId::new(9))
        .location(SourceLocation::new("calc.em", 4, 12))
        .build();
    let Err(err) = n.evaluate(Value::boolean(true), Value::null()) else {
        panic!("expected type error");
    };
    assert_eq!(
        err.to_string(),
        "Type error at calc.em line 4 col 12: operation \"+\" not defined for Boolean true, NULL"
    );
    assert_eq!(err.location.as_ref(), n.location());
}

// Builder and modes

#[test]
fn builder_defaults() {
    let n = AddNode::builder(NodeId::new(3)).build();
    assert_eq!(n.id(), NodeId::new(3));
    assert_eq!(n.mode(), DispatchMode::Adaptive);
    assert!(n.location().is_none());
    assert_eq!(n.state(), SpecializationState::Uncommitted);
    assert!(!n.state().is_committed());
}

#[test]
fn generic_mode_never_commits() {
    let n = AddNode::builder(NodeId::new(2))
        .mode(DispatchMode::Generic)
        .build();
    assert_eq!(n.state(), SpecializationState::Generic);

    let small = add(&n, Value::integer(1), Value::integer(2));
    assert!(small.is_same_representation(&Value::integer(3)));
    assert_eq!(add(&n, Value::text("a"), Value::integer(2)), Value::text("a2"));

    assert_eq!(n.state(), SpecializationState::Generic);
    assert_eq!(n.profile().transitions, 0);
    assert_eq!(n.profile().slow_path_entries, 2);
}

#[test]
fn node_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AddNode>();
}
