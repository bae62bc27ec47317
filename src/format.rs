//! Pluggable rendering of deque values for printing.

use crate::deque::Deque;
use std::fmt;

// Significant digits used by `General`, as C's `%g` does by default.
const PRECISION: usize = 6;

/// Renders a single value of a deque when it is printed.
pub trait ValueFormat<T> {
    fn fmt_value(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Formats values with their `Display` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl<T: fmt::Display> ValueFormat<T> for Plain {
    fn fmt_value(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(value, f)
    }
}

/// Formats numbers the way C's `%g` conversion does: six significant
/// digits, scientific notation for very large or very small
/// magnitudes, and no trailing zeros.
///
/// # Examples
///
/// ```
/// use sentinel_deque::{Deque, General};
///
/// let d: Deque<f64> = vec![0.0001, 123456789.0, 3.0].into_iter().collect();
/// assert_eq!("0.0001 1.23457e+08 3 \n", d.display_with(&General).to_string());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct General;

impl<T: Copy + Into<f64>> ValueFormat<T> for General {
    fn fmt_value(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_general((*value).into(), f)
    }
}

/// Adapts a closure into a [`ValueFormat`].
///
/// # Examples
///
/// ```
/// use sentinel_deque::{Deque, FormatFn};
/// use std::fmt;
///
/// fn hex(v: &u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///     write!(f, "{:#x}", v)
/// }
///
/// let d: Deque<u8> = (1..=3).collect();
/// assert_eq!("0x1 0x2 0x3 \n", d.display_with(&FormatFn(hex)).to_string());
/// ```
///
/// [`ValueFormat`]: trait.ValueFormat.html
#[derive(Debug, Clone, Copy)]
pub struct FormatFn<F>(pub F);

impl<T, F> ValueFormat<T> for FormatFn<F>
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    fn fmt_value(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(value, f)
    }
}

/// A `Display` view of a whole deque, front to back: each value
/// followed by a space, then a newline. It is constructed from the
/// [`display_with`] method on `Deque`.
///
/// [`display_with`]: struct.Deque.html#method.display_with
pub struct Sequence<'l, T, F> {
    target: &'l Deque<T>,
    format: &'l F,
}

impl<'l, T, F> Sequence<'l, T, F> {
    pub(crate) fn new(target: &'l Deque<T>, format: &'l F) -> Self {
        Self { target, format }
    }
}

impl<'l, T, F> fmt::Display for Sequence<'l, T, F>
where
    F: ValueFormat<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.target.iter() {
            self.format.fmt_value(v, f)?;
            f.write_str(" ")?;
        }
        f.write_str("\n")
    }
}

fn fmt_general(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str(if x.is_sign_negative() { "-nan" } else { "nan" });
    }
    if x.is_infinite() {
        return f.write_str(if x < 0.0 { "-inf" } else { "inf" });
    }
    if 0.0 == x {
        return f.write_str(if x.is_sign_negative() { "-0" } else { "0" });
    }

    // Round to the target precision first; the exponent of the
    // rounded value picks the notation.
    let sci = format!("{:.*e}", PRECISION - 1, x);
    let (mantissa, exp) = sci.split_at(sci.find('e').ok_or(fmt::Error)?);
    let exp: i32 = exp[1..].parse().map_err(|_| fmt::Error)?;

    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        f.write_str(trim_zeros(&format!("{:.*}", decimals, x)))
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct G(f64);

    impl fmt::Display for G {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_general(self.0, f)
        }
    }

    fn g(x: f64) -> String {
        G(x).to_string()
    }

    #[test]
    fn general_fixed_notation() {
        assert_eq!("1.5", g(1.5));
        assert_eq!("3", g(3.0));
        assert_eq!("-2.25", g(-2.25));
        assert_eq!("100000", g(100000.0));
        assert_eq!("0.0001", g(0.0001));
        assert_eq!("3.14159", g(3.14159265));
    }

    #[test]
    fn general_scientific_notation() {
        assert_eq!("1e+06", g(1e6));
        assert_eq!("1.23457e+08", g(123456789.0));
        assert_eq!("1e-05", g(0.00001));
        assert_eq!("-1.5e-07", g(-1.5e-7));
        assert_eq!("1e+100", g(1e100));
    }

    #[test]
    fn general_rounding_can_bump_the_exponent() {
        assert_eq!("1e+06", g(999999.7));
    }

    #[test]
    fn general_special_values() {
        assert_eq!("0", g(0.0));
        assert_eq!("-0", g(-0.0));
        assert_eq!("inf", g(f64::INFINITY));
        assert_eq!("-inf", g(f64::NEG_INFINITY));
        assert_eq!("nan", g(f64::NAN));
    }

    #[test]
    fn general_accepts_integers() {
        let d: Deque<i32> = vec![1, -2, 3_000_000].into_iter().collect();
        assert_eq!("1 -2 3e+06 \n", d.display_with(&General).to_string());
    }

    #[test]
    fn plain_uses_display() {
        let d: Deque<&str> = vec!["a", "b"].into_iter().collect();
        assert_eq!("a b \n", d.display_with(&Plain).to_string());
    }

    #[test]
    fn empty_sequence_is_only_a_newline() {
        let d: Deque<f64> = Deque::new();
        assert_eq!("\n", d.display_with(&General).to_string());
    }
}
