#![cfg(feature = "compose")]
//! Integration tests for the composition utilities and their use with the
//! type class operations.

use adequate::compose::{constant, flip, identity};
use adequate::typeclass::pointfree::{fmap, fmap_vec};
use adequate::typeclass::{Functor, Monad};
use adequate::{compose, pipe};
use proptest::prelude::*;
use rstest::rstest;

fn add_one(n: i64) -> i64 {
    n.wrapping_add(1)
}

fn double(n: i64) -> i64 {
    n.wrapping_mul(2)
}

fn square(n: i64) -> i64 {
    n.wrapping_mul(n)
}

#[rstest]
fn compose_and_pipe_read_in_opposite_directions() {
    let composed = compose!(add_one, double);
    assert_eq!(composed(5), 11);
    assert_eq!(pipe!(5, add_one, double), 12);
    assert_eq!(pipe!(5, double, add_one), composed(5));
}

#[rstest]
fn constant_ignores_its_argument() {
    let always_seven = constant::<i32, &str>(7);
    assert_eq!(always_seven("anything"), 7);
    assert_eq!(Some("x").fmap(constant::<char, &str>('k')), Some('k'));
}

#[rstest]
fn flip_swaps_arguments() {
    let divide = |numerator: i32, denominator: i32| numerator / denominator;
    assert_eq!(flip(divide)(2, 10), 5);
}

#[rstest]
fn pointfree_operations_compose() {
    let lengths_then_first = compose!(
        |lengths: Vec<usize>| lengths.into_iter().next(),
        fmap_vec(str::len),
    );
    assert_eq!(lengths_then_first(vec!["fooo", "foo"]), Some(4));

    let shout = compose!(fmap::<Option<String>, _, _>(|text: String| text + "!"));
    assert_eq!(shout(Some(String::from("hey"))), Some(String::from("hey!")));
}

#[rstest]
fn pipe_through_monadic_steps() {
    let parsed = pipe!(
        Some("21"),
        |text: Option<&str>| text.flat_map(|t| t.parse::<i64>().ok()),
        |number: Option<i64>| number.fmap(double),
    );
    assert_eq!(parsed, Some(42));
}

proptest! {
    #[test]
    fn prop_compose_is_associative(value in any::<i64>()) {
        let left = compose!(compose!(square, double), add_one);
        let right = compose!(square, compose!(double, add_one));
        prop_assert_eq!(left(value), right(value));
    }

    #[test]
    fn prop_identity_is_neutral(value in any::<i64>()) {
        prop_assert_eq!(compose!(identity, add_one)(value), add_one(value));
        prop_assert_eq!(compose!(add_one, identity)(value), add_one(value));
    }

    #[test]
    fn prop_flip_twice_is_original(left in any::<i32>(), right in any::<i32>()) {
        let subtract = |a: i32, b: i32| a.wrapping_sub(b);
        prop_assert_eq!(flip(flip(subtract))(left, right), subtract(left, right));
    }
}
