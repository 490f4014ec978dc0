use crate::quantity::{cost::Cost, distance::Litres, energy::KilowattHours, power::Kilowatts};

quantity!(
    /// Price of one kilowatt-hour.
    KilowattHourPrice, via: f64, suffix: "BRL/kWh", precision: 2
);

quantity!(
    /// Installed system price per kilowatt-peak.
    KilowattPrice, via: f64, suffix: "BRL/kWp", precision: 0
);

quantity!(LitrePrice, via: f64, suffix: "BRL/L", precision: 2);

implement_mul!(KilowattHourPrice, KilowattHours, Cost);
implement_mul!(KilowattPrice, Kilowatts, Cost);
implement_mul!(LitrePrice, Litres, Cost);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_average_price() {
        let price: KilowattHourPrice = Cost(160.0) / KilowattHours(200.0);
        assert_abs_diff_eq!(price.0, 0.8);
    }

    #[test]
    fn test_energy_cost() {
        assert_abs_diff_eq!((KilowattHours(30.0) * KilowattHourPrice(0.8)).0, 24.0);
    }
}
