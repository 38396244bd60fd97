//! Property-based tests for the Semigroup and Monoid laws.
//!
//! - **Associativity**: `a.combine(b).combine(c) == a.combine(b.combine(c))`
//! - **Left identity**: `empty().combine(a) == a`
//! - **Right identity**: `a.combine(empty()) == a`

use adequate::typeclass::{All, Any, First, Last, Max, Min, Monoid, Product, Semigroup, Sum};
use proptest::prelude::*;

fn empty_like<T: Monoid>(_: &T) -> T {
    T::empty()
}

macro_rules! monoid_laws {
    ($module:ident, $strategy:expr) => {
        mod $module {
            use super::*;

            proptest! {
                #[test]
                fn associativity(a in $strategy, b in $strategy, c in $strategy) {
                    let left = a.clone().combine(b.clone()).combine(c.clone());
                    let right = a.combine(b.combine(c));
                    prop_assert_eq!(left, right);
                }

                #[test]
                fn left_identity(a in $strategy) {
                    prop_assert_eq!(empty_like(&a).combine(a.clone()), a);
                }

                #[test]
                fn right_identity(a in $strategy) {
                    let empty = empty_like(&a);
                    prop_assert_eq!(a.clone().combine(empty), a);
                }
            }
        }
    };
}

monoid_laws!(string, any::<String>());
monoid_laws!(vec_u8, prop::collection::vec(any::<u8>(), 0..10));
monoid_laws!(option_string, any::<Option<String>>());
monoid_laws!(sum, any::<i32>().prop_map(|n| Sum(i64::from(n))));
monoid_laws!(product, (-1000i64..1000).prop_map(Product));
monoid_laws!(max, any::<i32>().prop_map(Max));
monoid_laws!(min, any::<u16>().prop_map(Min));
monoid_laws!(all, any::<bool>().prop_map(All));
monoid_laws!(any_bool, any::<bool>().prop_map(Any));
monoid_laws!(first, any::<Option<u8>>().prop_map(First));
monoid_laws!(last, any::<Option<u8>>().prop_map(Last));
monoid_laws!(
    tuple,
    (any::<String>(), any::<bool>().prop_map(All))
);

proptest! {
    /// `combine_all` equals a left fold from `empty`.
    #[test]
    fn prop_combine_all_is_fold(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let wrapped: Vec<Sum<i64>> = values.iter().map(|n| Sum(i64::from(*n))).collect();
        let expected: i64 = values.iter().map(|n| i64::from(*n)).sum();
        prop_assert_eq!(Sum::combine_all(wrapped), Sum(expected));
    }

    /// `combine_n` agrees with combining `count` copies.
    #[test]
    fn prop_combine_n_matches_repetition(text in "[a-z]{0,4}", count in 1usize..6) {
        prop_assert_eq!(text.clone().combine_n(count), Some(text.repeat(count)));
    }
}
