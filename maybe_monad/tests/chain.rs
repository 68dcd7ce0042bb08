use maybe_monad::{EmptyAccess, Maybe, MaybeMonad};
use std::cell::Cell;

#[test]
fn chain_of_binds_and_predicate_produces_value() {
    let result = MaybeMonad::new(5)
        .bind(|n| n + 2)
        .bind(|n| Maybe::new(n + 1))
        .predicate(|n| *n > 0)
        .extract();

    assert!(result.has_value());
    assert_eq!(result.get(), 8);
}

#[test]
fn extract_without_steps_is_identity() {
    let result = MaybeMonad::new(5).extract();
    assert!(result.has_value());
    assert_eq!(result.get(), 5);
}

#[test]
fn failed_predicate_empties_chain() {
    let result = MaybeMonad::new(1)
        .bind(|n| n + 1)
        .predicate(|n| *n > 10)
        .extract();
    assert!(result.is_empty());
    assert_eq!(result.try_get(), Err(EmptyAccess));
}

#[test]
fn empty_chain_stays_empty() {
    let result = MaybeMonad::<i32>::empty().extract();
    assert!(result.is_empty());

    let result = MaybeMonad::<i32>::empty()
        .bind(|n| n + 1)
        .predicate(|_| true)
        .bind(Maybe::new)
        .extract();
    assert!(result.is_empty());
}

#[test]
fn bind_returning_empty_skips_remaining_binds() {
    let mut calls = 0;
    let result = MaybeMonad::new(5)
        .bind(|n| {
            calls += 1;
            n + 2
        })
        .bind(|_| {
            calls += 1;
            Maybe::<i32>::empty()
        })
        .bind(|n| {
            calls += 1;
            n + 1
        })
        .extract();

    assert!(result.is_empty());
    assert_eq!(calls, 2, "only two of the bindings should be called");
}

#[test]
fn no_step_runs_after_the_first_failure() {
    // the predicate sits at index 2 and always passes
    for fail_at in [0, 1, 3, 4] {
        let calls = Cell::new(0);
        let step = |n: i32, index: usize| -> Maybe<i32> {
            calls.set(calls.get() + 1);
            if index == fail_at {
                Maybe::empty()
            } else {
                Maybe::new(n + 1)
            }
        };

        let result = MaybeMonad::new(0)
            .bind(|n| step(n, 0))
            .bind(|n| step(n, 1))
            .predicate(|n| {
                calls.set(calls.get() + 1);
                *n >= 0
            })
            .bind(|n| step(n, 3))
            .bind(|n| step(n, 4))
            .extract();

        assert!(result.is_empty());
        assert_eq!(calls.get(), fail_at + 1, "failing at step {fail_at}");
    }
}

#[test]
fn chain_works_with_owned_non_copy_values() {
    let result = MaybeMonad::new(String::from("hello"))
        .bind(|s| s + ", world")
        .predicate(|s| s.starts_with("hello"))
        .bind(|s| Maybe::new(s.to_uppercase()))
        .extract();

    assert_eq!(result, Maybe::new(String::from("HELLO, WORLD")));
}

#[test]
fn chain_from_existing_maybe_copies_it() {
    let start = Maybe::new(10);
    let result = MaybeMonad::from_maybe(start.clone())
        .bind(|n| n * 2)
        .extract();

    assert_eq!(start.get(), 10);
    assert_eq!(result.get(), 20);
}

#[test]
fn round_trip_through_maybe_preserves_value() {
    for value in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert_eq!(Maybe::new(value).get(), value);
        assert_eq!(MaybeMonad::new(value).extract().get(), value);
    }
}
