//! Integration tests for `Optional<T>`.
//!
//! Covers discriminants, extraction, conversion to `Fallible`, the boolean
//! combinators and the laziness of every fallback closure.

use std::cell::Cell;

use rstest::rstest;
use totality::prelude::*;

// =============================================================================
// Construction and Discriminants
// =============================================================================

#[rstest]
#[case(present(0))]
#[case(present(-1))]
fn present_is_never_absent(#[case] value: Optional<i32>) {
    assert!(value.is_present());
    assert!(!value.is_absent());
}

#[rstest]
fn falsy_payloads_are_present() {
    assert!(present(false).is_present());
    assert!(present(String::new()).is_present());
    assert!(present(()).is_present());
    assert!(present(Vec::<u8>::new()).is_present());
}

#[rstest]
fn absent_is_absent() {
    let value: Optional<String> = absent();
    assert!(value.is_absent());
    assert!(!value.is_present());
}

#[rstest]
fn optional_from_treats_none_as_absent() {
    assert_eq!(optional_from(Some(3)), present(3));
    assert_eq!(optional_from::<i32>(None), absent());
    assert_eq!(optional_from(Some(Option::<i32>::None)), present(None));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn unwrap_returns_present_value() {
    assert_eq!(present("x").unwrap(), "x");
}

#[rstest]
#[should_panic(expected = "database url must be set")]
fn expect_raises_caller_message() {
    let url: Optional<String> = absent();
    let _ = url.expect("database url must be set");
}

#[rstest]
fn unwrap_raises_absent_value_error() {
    let outcome = wrap(|| absent::<u8>().unwrap());
    let panic = outcome.unwrap_failure();
    assert_eq!(panic.downcast_ref::<AbsentValueError>(), Some(&AbsentValueError));
}

#[rstest]
fn unwrap_or_variants() {
    assert_eq!(present(1).unwrap_or(9), 1);
    assert_eq!(absent().unwrap_or(9), 9);
    assert_eq!(absent::<u32>().unwrap_or_default(), 0);
    assert_eq!(absent::<u32>().into_option(), None);
    assert_eq!(present(4).into_option(), Some(4));
}

#[rstest]
fn unwrap_or_else_is_lazy_on_present() {
    let calls = Cell::new(0);
    let value = present(5).unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        0
    });
    assert_eq!(value, 5);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn unwrap_or_else_runs_once_on_absent() {
    let calls = Cell::new(0);
    let value = absent().unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        7
    });
    assert_eq!(value, 7);
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Conversion to Fallible
// =============================================================================

#[rstest]
fn ok_or_maps_presence_to_success() {
    assert_eq!(present(1).ok_or("missing"), success(1));
    assert_eq!(absent::<i32>().ok_or("missing"), failure("missing"));
}

#[rstest]
fn ok_or_else_is_lazy() {
    let calls = Cell::new(0);
    let converted: Fallible<i32, &str> = present(1).ok_or_else(|| {
        calls.set(calls.get() + 1);
        "missing"
    });
    assert_eq!(converted, success(1));
    assert_eq!(calls.get(), 0);

    let converted: Fallible<i32, &str> = absent().ok_or_else(|| {
        calls.set(calls.get() + 1);
        "missing"
    });
    assert_eq!(converted, failure("missing"));
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn map_never_runs_on_absent() {
    let calls = Cell::new(0);
    let mapped = absent::<i32>().map(|n| {
        calls.set(calls.get() + 1);
        n + 1
    });
    assert_eq!(mapped, absent());
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(present(4), present(4))]
#[case(present(3), absent())]
#[case(absent(), absent())]
fn filter_keeps_even(#[case] input: Optional<i32>, #[case] expected: Optional<i32>) {
    assert_eq!(input.filter(|n| n % 2 == 0), expected);
}

#[rstest]
fn filter_skips_predicate_on_absent() {
    let calls = Cell::new(0);
    let kept = absent::<i32>().filter(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert_eq!(kept, absent());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn zip_pairs_present_values() {
    assert_eq!(present(1).zip(present("a")), present((1, "a")));
    assert_eq!(present(1).zip(absent::<&str>()), absent());
    assert_eq!(absent::<i32>().zip(present("a")), absent());
}

#[rstest]
fn flatten_removes_one_level() {
    assert_eq!(present(absent::<i32>()).flatten(), absent());
    assert_eq!(present(present(3)).flatten(), present(3));
    assert_eq!(absent::<Optional<i32>>().flatten(), absent());
    assert_eq!(present(present(present(1))).flatten(), present(present(1)));
}

#[rstest]
fn map_or_and_fold() {
    assert_eq!(present(2).map_or(0, |n| n * 10), 20);
    assert_eq!(absent::<i32>().map_or_else(|| -1, |n| n * 10), -1);
    assert_eq!(present("abc").fold(|| 0, str::len), 3);
}

// =============================================================================
// Boolean Combinators
// =============================================================================

#[rstest]
#[case(present(1), present(2), present(2))]
#[case(present(1), absent(), absent())]
#[case(absent(), present(2), absent())]
#[case(absent(), absent(), absent())]
fn and_truth_table(
    #[case] left: Optional<i32>,
    #[case] right: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(left.and(right), expected);
}

#[rstest]
#[case(present(1), present(2), present(1))]
#[case(present(1), absent(), present(1))]
#[case(absent(), present(2), present(2))]
#[case(absent(), absent(), absent())]
fn or_truth_table(
    #[case] left: Optional<i32>,
    #[case] right: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(left.or(right), expected);
}

#[rstest]
#[case(present(1), present(2), absent())]
#[case(present(1), absent(), present(1))]
#[case(absent(), present(2), present(2))]
#[case(absent(), absent(), absent())]
#[case(present(1), present(1), absent())]
fn xor_truth_table(
    #[case] left: Optional<i32>,
    #[case] right: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(left.xor(right), expected);
}

#[rstest]
fn and_then_binds_present() {
    let halve = |n: i32| if n % 2 == 0 { present(n / 2) } else { absent() };
    assert_eq!(present(8).and_then(halve), present(4));
    assert_eq!(present(3).and_then(halve), absent());
    assert_eq!(absent().and_then(halve), absent());
}

#[rstest]
fn or_else_is_lazy_on_present() {
    let calls = Cell::new(0);
    let value = present(1).or_else(|| {
        calls.set(calls.get() + 1);
        present(2)
    });
    assert_eq!(value, present(1));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Async Combinators
// =============================================================================

#[cfg(feature = "async")]
#[rstest]
#[tokio::test]
async fn and_then_async_binds_present() {
    let value = present(2).and_then_async(|n| async move { present(n * 21) }).await;
    assert_eq!(value, present(42));
}

#[cfg(feature = "async")]
#[rstest]
#[tokio::test]
async fn and_then_async_skips_absent() {
    let calls = Cell::new(0);
    let value = absent::<i32>()
        .and_then_async(|n| {
            calls.set(calls.get() + 1);
            async move { present(n) }
        })
        .await;
    assert_eq!(value, absent());
    assert_eq!(calls.get(), 0);
}

#[cfg(feature = "async")]
#[rstest]
#[tokio::test]
async fn or_else_async_recovers_absent_after_suspension() {
    let value = absent()
        .or_else_async(|| async {
            tokio::task::yield_now().await;
            present("fallback")
        })
        .await;
    assert_eq!(value, present("fallback"));
}

#[cfg(feature = "async")]
#[rstest]
#[tokio::test]
async fn or_else_async_skips_present() {
    let calls = Cell::new(0);
    let value = present("primary")
        .or_else_async(|| {
            calls.set(calls.get() + 1);
            async { present("fallback") }
        })
        .await;
    assert_eq!(value, present("primary"));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Interop
// =============================================================================

#[rstest]
fn iterates_over_present_value() {
    let collected: Vec<_> = present(3).into_iter().chain(absent::<i32>()).collect();
    assert_eq!(collected, vec![3]);
    assert_eq!(present(3).iter().count(), 1);
}

#[rstest]
fn std_option_round_trip() {
    let optional: Optional<i32> = Some(1).into();
    let option: Option<i32> = optional.into();
    assert_eq!(option, Some(1));
    assert_eq!(Optional::<i32>::default(), absent());
}
