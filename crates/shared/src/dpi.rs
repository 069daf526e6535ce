use derive_more::{Deref, Display, Into};

use crate::error::DpiError;

/// Device resolution in steps per inch. Dividing a raw plotter step count
/// by this value yields inches.
#[derive(Debug, Copy, Clone, Display, Into, PartialEq, PartialOrd, Deref)]
pub struct Dpi(f64);

impl Dpi {
    /// NaN, infinities, zero, and negatives are all rejected: every
    /// conversion downstream divides by this value.
    pub fn new(v: f64) -> Result<Self, DpiError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(DpiError::NotStrictlyPositive(v));
        }
        Ok(Dpi(v))
    }
}
