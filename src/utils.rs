//! Numeric primitives shared by the counters.
//!
//! Everything here is bounded by the decimal width of `i64`: the power-of-ten
//! table stops at 10^18, and anything past it reads back as `0` so callers can
//! treat it as "contributes nothing" instead of overflowing.

/// Largest decimal digit length the counters examine.
pub const MAX_DIGITS: u32 = 18;

const POW10: [i64; MAX_DIGITS as usize + 1] = {
    let mut table = [1i64; MAX_DIGITS as usize + 1];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// Return 10^`exp`, or `0` when `exp` is past the end of the table.
#[inline]
pub fn pow10(exp: u32) -> i64 {
    POW10.get(exp as usize).copied().unwrap_or(0)
}

/// Decimal digit count of `|x|`; zero has one digit.
#[inline]
pub fn count_digits(x: i64) -> u32 {
    x.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

/// Ceiling of `a / b` for `b > 0`, for either sign of `a`.
#[inline]
pub fn ceil_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "ceil_div requires a positive divisor");
    let q = a / b;
    if a % b > 0 {
        q + 1
    } else {
        q
    }
}

/// Floor of `a / b` for `b > 0`, for either sign of `a`.
#[inline]
pub fn floor_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0, "floor_div requires a positive divisor");
    a.div_euclid(b)
}

/// Positive divisors of `n` in strictly ascending order.
///
/// Returns an empty list for `n == 0`.
pub fn divisors(n: u32) -> Vec<u32> {
    let mut out = Vec::new();
    let mut i = 1;
    while i <= n / i {
        if n % i == 0 {
            out.push(i);
            if i != n / i {
                out.push(n / i);
            }
        }
        i += 1;
    }
    out.sort_unstable();
    out
}
