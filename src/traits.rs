/// Maps a floating-point score onto an unsigned integer domain whose natural ordering is a
/// total order over every possible input, NaN included.
///
/// Ordering the keys gives the same result as standard numeric ordering whenever neither
/// score is NaN. `-0.0` and `+0.0` share a key. Every NaN, regardless of sign bit or payload,
/// maps to `u32::MAX`, which places all NaNs together after `+inf`.
///
/// # Examples
///
/// ```
/// use topk_select::traits::TotalOrderKey;
///
/// assert!((-1.5_f32).total_key() < 0.0_f32.total_key());
/// assert!(0.25_f32.total_key() < 0.5_f32.total_key());
/// assert!(f32::INFINITY.total_key() < f32::NAN.total_key());
/// assert_eq!((-0.0_f32).total_key(), 0.0_f32.total_key());
/// ```
pub trait TotalOrderKey {
    /// Returns the order-preserving key for this value.
    ///
    /// # Returns
    ///
    /// A `u32` such that `a.total_key() < b.total_key()` exactly when `a < b` for non-NaN
    /// inputs, and `a.total_key() == b.total_key()` when `a == b` or both are NaN.
    fn total_key(&self) -> u32;
}

impl TotalOrderKey for f32 {
    fn total_key(&self) -> u32 {
        const SIGN_MASK: u32 = 1 << 31;

        if self.is_nan() {
            return u32::MAX;
        }

        // fold -0.0 into +0.0
        let bits = if *self == 0.0 { 0 } else { self.to_bits() };

        if bits & SIGN_MASK != 0 {
            !bits
        } else {
            bits | SIGN_MASK
        }
    }
}
