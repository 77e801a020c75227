//! Integration tests for the aggregation utilities.
//!
//! Short-circuiting aggregations must stop pulling inputs at the stopping
//! element, while `try_all_results` must always evaluate every input.

use std::cell::RefCell;

use rstest::rstest;
use totality::prelude::*;

// =============================================================================
// all_optionals
// =============================================================================

#[rstest]
fn all_optionals_collects_in_order() {
    assert_eq!(all_optionals([present(1), present(2)]), present(vec![1, 2]));
}

#[rstest]
fn all_optionals_returns_absent_at_first_absence() {
    assert_eq!(all_optionals([present(1), absent(), present(2)]), absent());
}

#[rstest]
fn all_optionals_of_nothing_is_present_empty() {
    assert_eq!(all_optionals(Vec::<Optional<i32>>::new()), present(vec![]));
}

#[rstest]
fn all_optionals_evaluates_left_to_right_and_stops() {
    let produced = RefCell::new(Vec::new());
    let inputs = [present(1), absent(), present(3)]
        .into_iter()
        .enumerate()
        .map(|(index, optional)| {
            produced.borrow_mut().push(index);
            optional
        });
    assert_eq!(all_optionals(inputs), absent());
    assert_eq!(*produced.borrow(), vec![0, 1]);
}

#[rstest]
fn all_optionals_tuple_mixes_types() {
    let config = (present("localhost"), present(5432_u16), present(true)).all_optionals();
    assert_eq!(config, present(("localhost", 5432, true)));
}

// =============================================================================
// any_optionals
// =============================================================================

#[rstest]
#[case(vec![absent(), present(2), present(3)], present(2))]
#[case(vec![absent(), absent()], absent())]
#[case(vec![], absent())]
fn any_optionals_returns_first_present(#[case] inputs: Vec<Optional<i32>>, #[case] expected: Optional<i32>) {
    assert_eq!(any_optionals(inputs), expected);
}

#[rstest]
fn any_optionals_tuple() {
    assert_eq!((absent::<char>(), present('b'), present('c')).any_optionals(), present('b'));
    assert_eq!((absent::<char>(), absent()).any_optionals(), absent());
}

// =============================================================================
// all_results
// =============================================================================

#[rstest]
fn all_results_returns_first_failure_only() {
    let outcome = all_results([success(1), failure("first"), failure("second")]);
    assert_eq!(outcome, failure("first"));
}

#[rstest]
fn all_results_collects_successes() {
    assert_eq!(all_results([success::<i32, ()>(1), success(2)]), success(vec![1, 2]));
}

#[rstest]
fn all_results_stops_pulling_after_failure() {
    let produced = RefCell::new(0);
    let inputs = (0..10).map(|n| {
        *produced.borrow_mut() += 1;
        if n == 2 { failure(n) } else { success(n) }
    });
    assert_eq!(all_results(inputs), failure(2));
    assert_eq!(*produced.borrow(), 3);
}

#[rstest]
fn all_results_tuple_keeps_value_types() {
    let outcome = (success::<i32, &str>(1), success::<String, &str>("two".to_string())).all_results();
    assert_eq!(outcome, success((1, "two".to_string())));
}

// =============================================================================
// any_results
// =============================================================================

#[rstest]
fn any_results_collects_every_failure_in_order() {
    assert_eq!(
        any_results([failure::<i32, &str>("a"), failure("b")]),
        failure(vec!["a", "b"])
    );
}

#[rstest]
fn any_results_returns_first_success() {
    assert_eq!(any_results([failure("a"), success(2)]), success(2));
}

#[rstest]
fn any_results_of_nothing_is_empty_failure() {
    assert_eq!(any_results(Vec::<Fallible<i32, &str>>::new()), failure(vec![]));
}

#[rstest]
fn any_results_tuple_keeps_error_types() {
    let outcome = (failure::<u8, &str>("dns"), failure::<u8, u16>(503)).any_results();
    assert_eq!(outcome, failure(("dns", 503)));
}

// =============================================================================
// try_all_results
// =============================================================================

#[rstest]
fn try_all_results_marks_every_failed_slot() {
    assert_eq!(
        try_all_results([success(1), failure("x"), failure("y")]),
        failure(vec![absent(), present("x"), present("y")])
    );
}

#[rstest]
fn try_all_results_evaluates_every_input() {
    let produced = RefCell::new(Vec::new());
    let inputs = [success(1), failure("x"), failure("y")]
        .into_iter()
        .enumerate()
        .map(|(index, result)| {
            produced.borrow_mut().push(index);
            result
        });
    let _ = try_all_results(inputs);
    assert_eq!(*produced.borrow(), vec![0, 1, 2]);
}

#[rstest]
fn try_all_results_succeeds_when_nothing_fails() {
    assert_eq!(try_all_results([success::<i32, ()>(1), success(2)]), success(vec![1, 2]));
}

#[rstest]
fn try_all_results_tuple_reports_per_slot() {
    let outcome = (
        success::<&str, &str>("alice"),
        failure::<u8, &str>("age out of range"),
        failure::<bool, u32>(7),
    )
        .try_all_results();
    assert_eq!(
        outcome,
        failure((absent(), present("age out of range"), present(7)))
    );
}

#[rstest]
fn try_all_results_tuple_success() {
    let outcome = (success::<i32, ()>(1), success::<char, ()>('c')).try_all_results();
    assert_eq!(outcome, success((1, 'c')));
}

// =============================================================================
// Unbounded Lazy Inputs
// =============================================================================

#[rstest]
fn all_optionals_ignores_huge_size_hint() {
    let inputs = std::iter::repeat(absent::<u64>()).take(usize::MAX);
    assert_eq!(all_optionals(inputs), absent());
}

#[rstest]
fn all_results_ignores_huge_size_hint() {
    let inputs = (0..usize::MAX).map(|n| if n == 0 { failure(n) } else { success::<u64, usize>(1) });
    assert_eq!(all_results(inputs), failure(0));
}

#[rstest]
fn any_results_ignores_huge_size_hint() {
    assert_eq!(any_results((0..usize::MAX).map(success::<usize, u64>)), success(0));
}
