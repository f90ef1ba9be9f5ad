//! Small strongly-typed helpers over numbers, strings, and sequences.

use crate::domain::model::Number;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn concat(str1: &str, str2: &str) -> String {
    let mut out = String::with_capacity(str1.len() + str2.len());
    out.push_str(str1);
    out.push_str(str2);
    out
}

/// Integer part of `a`, truncating toward zero (`-1.5` becomes `-1`).
///
/// NaN maps to 0 and out-of-range values saturate at the `i64` bounds.
pub fn floor(a: f64) -> i64 {
    a.trunc() as i64
}

/// Float text that always carries a fractional part, e.g. `"2.0"`.
pub fn to_str(n: f64) -> String {
    format!("{:?}", n)
}

pub fn sum_list(input_list: &[f64]) -> f64 {
    input_list.iter().sum()
}

pub fn sum_mixed_list(mxd_lst: &[Number]) -> f64 {
    mxd_lst.iter().map(|n| n.as_f64()).sum()
}

/// Pairs `k` with the square of `v`.
pub fn to_kv(k: &str, v: Number) -> (String, f64) {
    let v = v.as_f64();
    (k.to_string(), v * v)
}

pub fn make_multiplier(multiplier: f64) -> impl Fn(f64) -> f64 {
    move |x| x * multiplier
}

/// Each element paired with its length in characters.
pub fn element_length<S: AsRef<str>>(lst: &[S]) -> Vec<(&S, usize)> {
    lst.iter().map(|s| (s, s.as_ref().chars().count())).collect()
}

pub fn safe_first_element<T>(lst: &[T]) -> Option<&T> {
    lst.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(1.11, 2.22), 1.11 + 2.22);
        assert_eq!(add(-1.0, 1.0), 0.0);
    }

    #[test]
    fn test_concat() {
        assert_eq!(concat("egg", "shell"), "eggshell");
        assert_eq!(concat("", "x"), "x");
    }

    #[test]
    fn test_floor_truncates_toward_zero() {
        assert_eq!(floor(3.14), 3);
        assert_eq!(floor(-1.5), -1);
        assert_eq!(floor(0.999), 0);
        assert_eq!(floor(f64::NAN), 0);
        assert_eq!(floor(f64::INFINITY), i64::MAX);
    }

    #[test]
    fn test_to_str_keeps_fraction() {
        assert_eq!(to_str(3.14), "3.14");
        assert_eq!(to_str(2.0), "2.0");
    }

    #[test]
    fn test_sum_list_and_mixed() {
        assert_eq!(sum_list(&[3.14, 1.11, 2.22]), 3.14 + 1.11 + 2.22);
        assert_eq!(sum_list(&[]), 0.0);

        let mixed = [Number::Int(5), Number::Float(4.5), Number::Int(3)];
        assert_eq!(sum_mixed_list(&mixed), 12.5);
    }

    #[test]
    fn test_to_kv_squares_value() {
        assert_eq!(to_kv("eggs", Number::Int(3)), ("eggs".to_string(), 9.0));
        assert_eq!(to_kv("school", Number::Float(0.02)).1, 0.02 * 0.02);
    }

    #[test]
    fn test_make_multiplier() {
        let times_two = make_multiplier(2.0);
        assert_eq!(times_two(2.22), 4.44);
        assert_eq!(times_two(0.0), 0.0);
    }

    #[test]
    fn test_element_length_counts_chars() {
        let words = ["hi", "héllo", ""];
        let lengths = element_length(&words);
        assert_eq!(lengths, vec![(&"hi", 2), (&"héllo", 5), (&"", 0)]);
    }

    #[test]
    fn test_safe_first_element() {
        assert_eq!(safe_first_element(&[1, 2, 3]), Some(&1));
        assert_eq!(safe_first_element::<u8>(&[]), None);
    }
}
