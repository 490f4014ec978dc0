use crate::quantity::{power::Kilowatts, time::Hours};

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 1);

quantity!(
    /// Monthly energy yield per kilowatt-peak of installed capacity.
    ///
    /// Folds the average daily irradiance and the number of days in a month into one factor.
    SpecificYield, via: f64, suffix: "kWh/kWp", precision: 0
);

implement_mul!(Kilowatts, Hours, KilowattHours);
implement_mul!(Kilowatts, SpecificYield, KilowattHours);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_average_power() {
        let power: Kilowatts = KilowattHours(720.0) / Hours(720.0);
        assert_abs_diff_eq!(power.0, 1.0);
    }

    #[test]
    fn test_required_capacity() {
        let capacity: Kilowatts = KilowattHours(240.0) / SpecificYield(150.0);
        assert_abs_diff_eq!(capacity.0, 1.6);
    }
}
