use serde::{Deserialize, Serialize};

use crate::{
    core::household::HouseholdProfile,
    prelude::*,
    quantity::price::KilowattHourPrice,
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffAssumptions {
    /// Used when the bill and consumption do not allow the average price to be derived.
    #[serde(rename = "fallback_price_per_kwh")]
    pub fallback_price: KilowattHourPrice,
}

impl Default for TariffAssumptions {
    fn default() -> Self {
        Self { fallback_price: KilowattHourPrice(0.80) }
    }
}

/// Average price per kilowatt-hour the household currently pays.
///
/// Zero consumption or a non-positive bill resolve to the fallback price instead of failing.
pub fn estimate(
    household: &HouseholdProfile,
    assumptions: &TariffAssumptions,
) -> KilowattHourPrice {
    if household.monthly_consumption.is_positive() && household.monthly_bill.is_positive() {
        household.monthly_bill / household.monthly_consumption
    } else {
        debug!(fallback_price = %assumptions.fallback_price, "using the fallback tariff");
        assumptions.fallback_price
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::connection::ConnectionPhase,
        quantity::{cost::Cost, energy::KilowattHours},
    };

    fn household(consumption: f64, bill: f64) -> HouseholdProfile {
        HouseholdProfile {
            monthly_consumption: KilowattHours(consumption),
            monthly_bill: Cost(bill),
            connection_phase: ConnectionPhase::SinglePhase,
        }
    }

    #[test]
    fn test_average_price() {
        let price = estimate(&household(200.0, 160.0), &TariffAssumptions::default());
        assert_abs_diff_eq!(price.0, 0.8);
    }

    #[test]
    fn test_zero_consumption_falls_back() {
        let assumptions = TariffAssumptions { fallback_price: KilowattHourPrice(0.95) };
        assert_eq!(estimate(&household(0.0, 160.0), &assumptions), KilowattHourPrice(0.95));
    }

    #[test]
    fn test_non_positive_bill_falls_back() {
        let assumptions = TariffAssumptions::default();
        assert_eq!(estimate(&household(200.0, 0.0), &assumptions), KilowattHourPrice(0.8));
        assert_eq!(estimate(&household(200.0, -10.0), &assumptions), KilowattHourPrice(0.8));
        assert_eq!(estimate(&household(f64::NAN, 100.0), &assumptions), KilowattHourPrice(0.8));
    }
}
