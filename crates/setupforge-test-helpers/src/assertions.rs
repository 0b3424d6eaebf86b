//! Assertion macros for setup values.

/// Assert that two floating-point values are approximately equal.
///
/// ```rust
/// use setupforge_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(0.1 + 0.2, 0.3, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a value lies in an inclusive range.
///
/// ```rust
/// use setupforge_test_helpers::assert_in_range;
///
/// assert_in_range!(23.0, 18.0, 60.0);
/// ```
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr $(,)?) => {
        let value = $value;
        let min = $min;
        let max = $max;
        if !(min <= value && value <= max) {
            panic!(
                "assertion failed: `{:?}` not in `{:?}..={:?}`",
                value, min, max
            );
        }
    };
    ($value:expr, $min:expr, $max:expr, $($arg:tt)+) => {
        let value = $value;
        let min = $min;
        let max = $max;
        if !(min <= value && value <= max) {
            panic!(
                "assertion failed: `{:?}` not in `{:?}..={:?}`: {}",
                value, min, max, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that two setups populate exactly the same fields.
///
/// Prints the paths present on only one side.
#[macro_export]
macro_rules! assert_same_shape {
    ($left:expr, $right:expr $(,)?) => {
        let left = $left.field_paths();
        let right = $right.field_paths();
        if left != right {
            let only_left: Vec<_> = left.difference(&right).collect();
            let only_right: Vec<_> = right.difference(&left).collect();
            panic!(
                "assertion failed: setups differ in shape\n  only left: {:?}\n only right: {:?}",
                only_left, only_right
            );
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_approx_eq_within_tolerance() {
        assert_approx_eq!(950.0 * 0.88, 836.0, 1e-9);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn test_approx_eq_outside_tolerance() {
        assert_approx_eq!(1.0, 1.1, 0.01);
    }

    #[test]
    fn test_in_range() {
        assert_in_range!(19.0, 19.0, 60.0);
        assert_in_range!(0.7, 0.0, 1.0, "confidence");
    }

    #[test]
    #[should_panic(expected = "not in")]
    fn test_out_of_range() {
        assert_in_range!(17.9, 18.0, 60.0);
    }
}
