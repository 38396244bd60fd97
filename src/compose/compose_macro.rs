//! The `compose!` macro.

/// Composes functions right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. A single argument is returned
/// unchanged. Every function is moved into the resulting closure.
///
/// ```
/// use adequate::compose;
///
/// let head = |words: Vec<&'static str>| words.first().copied();
/// let words = |text: &'static str| text.split(' ').collect::<Vec<_>>();
///
/// let first_word = compose!(head, words);
/// assert_eq!(first_word("jumpkick roundhouse uppercut"), Some("jumpkick"));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($rest),+);
        move |input| outer(inner(input))
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;
    use rstest::rstest;

    fn add_one(number: i32) -> i32 {
        number + 1
    }

    fn double(number: i32) -> i32 {
        number * 2
    }

    #[rstest]
    fn applies_rightmost_first() {
        assert_eq!(compose!(add_one, double)(5), 11);
        assert_eq!(compose!(double, add_one)(5), 12);
    }

    #[rstest]
    fn is_associative() {
        let left = compose!(add_one, compose!(double, add_one));
        let right = compose!(compose!(add_one, double), add_one);
        for value in -3..3 {
            assert_eq!(left(value), right(value));
        }
        assert_eq!(compose!(add_one, double, add_one)(1), 5);
    }

    #[rstest]
    fn identity_is_neutral() {
        assert_eq!(compose!(identity, double)(4), double(4));
        assert_eq!(compose!(double, identity)(4), double(4));
        assert_eq!(compose!(double)(4), 8);
    }
}
