use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Promotes an integer literal of any size to `f64`.
///
/// Values above `2^53` are rounded to the nearest representable `f64`. Values
/// beyond the `f64` range become positive infinity.
///
/// ## Parameters
/// - `value`: The integer to convert.
///
/// ## Returns
/// The closest `f64` to `value`.
///
/// ## Example
/// ```
/// use lexcalc::util::num::biguint_to_f64;
/// use num_bigint::BigUint;
///
/// assert_eq!(biguint_to_f64(&BigUint::from(1234u32)), 1234.0);
/// assert_eq!(biguint_to_f64(&BigUint::from(u64::MAX)), 18_446_744_073_709_551_615.0);
///
/// let huge = BigUint::from(10u32).pow(400);
/// assert_eq!(biguint_to_f64(&huge), f64::INFINITY);
/// ```
#[must_use]
pub fn biguint_to_f64(value: &BigUint) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}
