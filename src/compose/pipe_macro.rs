//! The `pipe!` macro.

/// Threads a value through functions left to right.
///
/// `pipe!(x, f, g)` is `g(f(x))`.
///
/// ```
/// use adequate::pipe;
///
/// let trimmed_length = pipe!("  padded  ", str::trim, str::len);
/// assert_eq!(trimmed_length, 6);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($rest),+)
    };
}
