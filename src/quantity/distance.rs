use std::ops::Mul;

use crate::quantity::energy::KilowattHours;

quantity!(Kilometres, via: f64, suffix: "km", precision: 0);
quantity!(Litres, via: f64, suffix: "L", precision: 1);
quantity!(KilometresPerLitre, via: f64, suffix: "km/L", precision: 1);

quantity!(
    /// Electric vehicle energy intensity, in kilowatt-hours per 100 kilometres.
    KilowattHoursPer100Km, via: f64, suffix: "kWh/100km", precision: 1
);

implement_mul!(Litres, KilometresPerLitre, Kilometres);

impl Mul<KilowattHoursPer100Km> for Kilometres {
    type Output = KilowattHours;

    fn mul(self, intensity: KilowattHoursPer100Km) -> Self::Output {
        KilowattHours(self.0 * intensity.0 / 100.0)
    }
}
