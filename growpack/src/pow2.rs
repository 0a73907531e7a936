/// Returns the smallest power of two that is greater than or equal to
/// `value`, or zero if `value` is zero.
///
/// The result is widened to `u64` so that every `u32` input has an answer.
///
/// ```
/// use growpack::pow2;
///
/// assert_eq!(pow2(0), 0);
/// assert_eq!(pow2(5), 8);
/// assert_eq!(pow2(8), 8);
/// ```
#[inline]
pub fn pow2(value: u32) -> u64 {
    next_pow2(u64::from(value))
}

/// Distance from `value` up to the next power of two.
///
/// Growth heuristics call this with sums of two `u32` dimensions, which is why
/// it operates on `u64`.
pub(crate) fn pow2_diff(value: u64) -> u64 {
    next_pow2(value) - value
}

fn next_pow2(value: u64) -> u64 {
    if value == 0 {
        0
    } else {
        value.next_power_of_two()
    }
}
