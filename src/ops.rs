use crate::error::ConfigurationError;

/// Round the ratio up to a whole number of units.
///
/// Non-positive and `NaN` ratios give zero units. A count that does not fit into `u32`
/// is an error rather than a saturated value, so that the sized capacity never falls short.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ceil_count(ratio: f64, what: &'static str) -> Result<u32, ConfigurationError> {
    if ratio.is_nan() || ratio <= 0.0 {
        return Ok(0);
    }
    let count = ratio.ceil();
    if count <= f64::from(u32::MAX) {
        Ok(count as u32)
    } else {
        Err(ConfigurationError::CountOutOfRange { what })
    }
}

/// Multiply two unit counts, rejecting an overflow.
pub fn checked_count(lhs: u32, rhs: u32, what: &'static str) -> Result<u32, ConfigurationError> {
    lhs.checked_mul(rhs).ok_or(ConfigurationError::CountOutOfRange { what })
}
