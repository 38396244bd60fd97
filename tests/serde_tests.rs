#![cfg(feature = "serde")]
//! Serialization of the typeclass wrapper types.
//!
//! Wrappers are newtypes, so they serialize as the value they wrap.

use adequate::typeclass::{All, First, Identity, Last, Max, Min, Monoid, Product, Sum};
use rstest::rstest;

#[rstest]
fn newtypes_serialize_as_their_payload() {
    assert_eq!(serde_json::to_string(&Identity(3)).unwrap(), "3");
    assert_eq!(serde_json::to_string(&Sum(10)).unwrap(), "10");
    assert_eq!(serde_json::to_string(&All(false)).unwrap(), "false");
    assert_eq!(serde_json::to_string(&First(Some("a"))).unwrap(), "\"a\"");
    assert_eq!(serde_json::to_string(&Last::<i32>(None)).unwrap(), "null");
}

#[rstest]
fn identity_json_roundtrip() {
    let value = Identity(vec![String::from("x"), String::from("y")]);
    let json = serde_json::to_string(&value).unwrap();
    let restored: Identity<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn deserialized_values_still_combine() {
    let totals: Vec<Sum<i64>> = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(Sum::combine_all(totals), Sum(6));

    let factors: Vec<Product<u32>> = serde_json::from_str("[2, 5]").unwrap();
    assert_eq!(Product::combine_all(factors), Product(10));

    let extremes: Vec<Max<i8>> = serde_json::from_str("[-4, 9, 0]").unwrap();
    assert_eq!(Max::combine_all(extremes), Max(9));

    let lowest: Min<u8> = serde_json::from_str("7").unwrap();
    assert_eq!(lowest, Min(7));
}
