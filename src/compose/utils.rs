//! Small combinators.

/// Returns its argument unchanged (the I combinator).
///
/// ```
/// use adequate::compose::identity;
/// use adequate::typeclass::Functor;
///
/// assert_eq!(Some(3).fmap(identity), Some(3));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its input and returns `value` (the K combinator).
///
/// ```
/// use adequate::compose::constant;
///
/// let always_zero = constant::<_, &str>(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function (the C combinator).
///
/// ```
/// use adequate::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-12)]
    fn identity_returns_input(#[case] value: i64) {
        assert_eq!(identity(value), value);
    }

    #[rstest]
    fn constant_ignores_input() {
        let always = constant::<_, i32>(String::from("same"));
        assert_eq!(always(1), "same");
        assert_eq!(always(2), "same");
    }

    #[rstest]
    fn flip_twice_is_original() {
        let concat = |a: String, b: &str| a + b;
        let flipped_twice = flip(flip(concat));
        assert_eq!(flipped_twice(String::from("ab"), "cd"), "abcd");
    }
}
