//! Value-to-safe-integer conversions.
//!
//! Three entry points layered from strict to lenient: [`is_safe_integer`]
//! answers the membership question, [`as_safe_integer`] casts a value that
//! already is one, and [`to_safe_integer`] coerces whatever it reasonably
//! can. None of them ever panic on their own; only a caller-supplied
//! `valueOf` function can, and its panic propagates untouched.

use crate::integer::SafeInteger;
use crate::parse::parse_safe_integer;
use crate::value::{Object, Value};

/// True when `value` is a number that is an integer within the safe range.
///
/// Numeric-looking strings and objects are not numbers; they are `false`
/// here even when [`to_safe_integer`] would coerce them.
#[inline]
pub fn is_safe_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => SafeInteger::from_f64(*n).is_some(),
        _ => false,
    }
}

/// Casts `value` to a safe integer without any coercion.
///
/// The strict counterpart of [`to_safe_integer`]: only a `Number` that
/// already satisfies [`is_safe_integer`] comes back `Some`.
#[inline]
pub fn as_safe_integer(value: &Value) -> Option<SafeInteger> {
    match value {
        Value::Number(n) => SafeInteger::from_f64(*n),
        _ => None,
    }
}

/// Coerces `value` to a safe integer on a best-effort basis.
///
/// The conversion by category:
///
/// - `Number`: finite values are rounded half-up, then range-checked;
///   `NaN` and the infinities are absent.
/// - `String`: parsed with [`parse_safe_integer`] and no explicit radix.
/// - `Object`: a callable `valueOf` member is invoked with the object as
///   receiver; a numeric result takes the `Number` path above (including
///   rounding), anything else is absent. A missing or non-callable
///   `valueOf` is absent.
/// - `Bool`, `Null`, `Undefined`, `Array`, `Function`: always absent.
///
/// A panic raised inside a `valueOf` function is not caught here.
pub fn to_safe_integer(value: &Value) -> Option<SafeInteger> {
    match value {
        Value::Number(n) => number_to_safe_integer(*n),
        Value::String(s) => parse_safe_integer(s, None),
        Value::Object(obj) => object_to_safe_integer(obj),
        Value::Bool(_) | Value::Null | Value::Undefined | Value::Array(_) | Value::Function(_) => {
            None
        }
    }
}

/// Rounds to the nearest integer with ties toward positive infinity.
///
/// `f64::round` breaks ties away from zero, which is wrong for negative
/// halves: `-2.5` must round to `-2`, not `-3`. The comparison below is
/// exact because any `x` whose distance to its rounding is exactly 0.5 is
/// representable, as is the corrected result.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    let rounded = x.round();
    if x - rounded == 0.5 { rounded + 1.0 } else { rounded }
}

fn number_to_safe_integer(value: f64) -> Option<SafeInteger> {
    if value.is_finite() {
        SafeInteger::from_f64(round_half_up(value))
    } else {
        None
    }
}

fn object_to_safe_integer(obj: &Object) -> Option<SafeInteger> {
    match obj.value_of()? {
        Value::Number(n) => number_to_safe_integer(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerced(value: &Value) -> Option<i64> {
        to_safe_integer(value).map(SafeInteger::get)
    }

    #[test]
    fn test_is_safe_integer_numbers() {
        assert!(is_safe_integer(&Value::Number(0.0)));
        assert!(is_safe_integer(&Value::Number(-0.0)));
        assert!(is_safe_integer(&Value::Number(9_007_199_254_740_991.0)));
        assert!(is_safe_integer(&Value::Number(-9_007_199_254_740_991.0)));
        assert!(!is_safe_integer(&Value::Number(9_007_199_254_740_992.0)));
        assert!(!is_safe_integer(&Value::Number(0.5)));
        assert!(!is_safe_integer(&Value::Number(f64::NAN)));
        assert!(!is_safe_integer(&Value::Number(f64::INFINITY)));
    }

    #[test]
    fn test_is_safe_integer_rejects_other_categories() {
        assert!(!is_safe_integer(&Value::from("1")));
        assert!(!is_safe_integer(&Value::Bool(true)));
        assert!(!is_safe_integer(&Value::Null));
        assert!(!is_safe_integer(&Value::Undefined));
        assert!(!is_safe_integer(&Value::Object(Object::new())));
    }

    #[test]
    fn test_as_safe_integer_is_strict() {
        assert_eq!(as_safe_integer(&Value::Number(3.0)), SafeInteger::new(3));
        assert_eq!(as_safe_integer(&Value::Number(3.14)), None);
        assert_eq!(as_safe_integer(&Value::Number(f64::NAN)), None);
        // No coercion: an integer-looking string stays absent.
        assert_eq!(as_safe_integer(&Value::from("3")), None);
        assert_eq!(
            as_safe_integer(&Value::Object(Object::new().with("valueOf", 3.0))),
            None
        );
    }

    #[test]
    fn test_to_rounds_numbers() {
        assert_eq!(coerced(&Value::Number(0.999)), Some(1));
        assert_eq!(coerced(&Value::Number(3.14)), Some(3));
        assert_eq!(coerced(&Value::Number(-3.14)), Some(-3));
        assert_eq!(coerced(&Value::Number(42.0)), Some(42));
    }

    #[test]
    fn test_to_rounds_ties_toward_positive_infinity() {
        assert_eq!(coerced(&Value::Number(0.5)), Some(1));
        assert_eq!(coerced(&Value::Number(-0.5)), Some(0));
        assert_eq!(coerced(&Value::Number(2.5)), Some(3));
        assert_eq!(coerced(&Value::Number(-2.5)), Some(-2));
        assert_eq!(coerced(&Value::Number(1.5)), Some(2));
    }

    #[test]
    fn test_to_rounding_is_exact_just_below_half() {
        // Largest f64 below 0.5; its sum with 0.5 rounds up to exactly 1.0,
        // so a rounder folded as `(x + 0.5).floor()` would report 1 here.
        let below_half = 0.499_999_999_999_999_94_f64;
        assert_eq!((below_half + 0.5).floor(), 1.0);
        assert_eq!(round_half_up(below_half), 0.0);
        assert_eq!(round_half_up(-below_half), 0.0);
        assert_eq!(coerced(&Value::Number(below_half)), Some(0));
        assert_eq!(coerced(&Value::Number(-below_half)), Some(0));
    }

    #[test]
    fn test_to_rejects_non_finite_numbers() {
        assert_eq!(coerced(&Value::Number(f64::NAN)), None);
        assert_eq!(coerced(&Value::Number(f64::INFINITY)), None);
        assert_eq!(coerced(&Value::Number(f64::NEG_INFINITY)), None);
    }

    #[test]
    fn test_to_range_boundaries_after_rounding() {
        // Half-integers do not exist between 2^52 and 2^53 (f64 spacing is 1
        // there), so these literals are already the out-of-range 2^53.
        assert_eq!(coerced(&Value::Number(9_007_199_254_740_991.5)), None);
        assert_eq!(coerced(&Value::Number(-9_007_199_254_740_991.5)), None);
        assert_eq!(coerced(&Value::Number(9_007_199_254_740_992.0)), None);
        assert_eq!(
            coerced(&Value::Number(9_007_199_254_740_991.0)),
            Some(9_007_199_254_740_991)
        );
        // The largest representable halves still round within range.
        assert_eq!(
            coerced(&Value::Number(4_503_599_627_370_495.5)),
            Some(4_503_599_627_370_496)
        );
        assert_eq!(
            coerced(&Value::Number(-4_503_599_627_370_495.5)),
            Some(-4_503_599_627_370_495)
        );
    }

    #[test]
    fn test_to_parses_strings() {
        assert_eq!(coerced(&Value::from("1")), Some(1));
        assert_eq!(coerced(&Value::from(" -7 ")), Some(-7));
        assert_eq!(coerced(&Value::from("3.14")), Some(3));
        assert_eq!(coerced(&Value::from("0x10")), Some(16));
        assert_eq!(coerced(&Value::from("deadbeef")), None);
        assert_eq!(coerced(&Value::from("")), None);
    }

    #[test]
    fn test_to_invokes_callable_value_of() {
        let obj = Object::new()
            .with("inner", 1.0)
            .with(
                Object::VALUE_OF,
                Value::function(|receiver: &Object| {
                    receiver.get("inner").cloned().unwrap_or(Value::Undefined)
                }),
            );
        assert_eq!(coerced(&Value::Object(obj)), Some(1));
    }

    #[test]
    fn test_to_rounds_value_of_results() {
        let obj = Object::new().with(Object::VALUE_OF, Value::function(|_| Value::Number(3.14)));
        assert_eq!(coerced(&Value::Object(obj)), Some(3));
    }

    #[test]
    fn test_to_rejects_non_numeric_value_of_results() {
        let stringy = Object::new().with(Object::VALUE_OF, Value::function(|_| Value::from("1")));
        assert_eq!(coerced(&Value::Object(stringy)), None);

        let nested = Object::new().with(
            Object::VALUE_OF,
            Value::function(|_| Value::Object(Object::new())),
        );
        assert_eq!(coerced(&Value::Object(nested)), None);
    }

    #[test]
    fn test_to_rejects_non_callable_value_of() {
        let obj = Object::new().with(Object::VALUE_OF, 0.0);
        assert_eq!(coerced(&Value::Object(obj)), None);
        assert_eq!(coerced(&Value::Object(Object::new())), None);
    }

    #[test]
    fn test_to_rejects_remaining_categories() {
        assert_eq!(coerced(&Value::Null), None);
        assert_eq!(coerced(&Value::Undefined), None);
        assert_eq!(coerced(&Value::Bool(true)), None);
        assert_eq!(coerced(&Value::Bool(false)), None);
        assert_eq!(coerced(&Value::Array(vec![Value::Number(1.0)])), None);
        assert_eq!(coerced(&Value::function(|_| Value::Number(1.0))), None);
    }

    #[test]
    fn test_to_is_idempotent_on_safe_integers() {
        for value in [0, 1, -1, 9_007_199_254_740_991, -9_007_199_254_740_991] {
            assert_eq!(coerced(&Value::Number(value as f64)), Some(value));
        }
    }

    #[test]
    #[should_panic(expected = "valueOf exploded")]
    fn test_value_of_panics_propagate() {
        let obj = Object::new().with(
            Object::VALUE_OF,
            Value::function(|_| panic!("valueOf exploded")),
        );
        let _ = to_safe_integer(&Value::Object(obj));
    }
}
