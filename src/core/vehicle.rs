use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    core::assumptions::{require_fraction, require_positive},
    error::ConfigurationError,
    prelude::*,
    quantity::{
        cost::Cost,
        distance::{KilometresPerLitre, Kilometres, KilowattHoursPer100Km, Litres},
        energy::KilowattHours,
        price::{KilowattHourPrice, LitrePrice},
    },
};

/// Electric vehicle owned or planned by the household.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct VehicleProfile {
    pub is_owned: bool,

    /// Vehicle catalog identifier, only resolved when the vehicle is owned.
    #[builder(into)]
    pub model_id: String,

    #[serde(rename = "monthly_distance_km")]
    pub monthly_distance: Kilometres,

    /// Overrides the catalog energy intensity.
    #[serde(default, rename = "consumption_override_kwh_per_100km")]
    pub consumption_override: Option<KilowattHoursPer100Km>,
}

impl VehicleProfile {
    pub fn not_owned() -> Self {
        Self {
            is_owned: false,
            model_id: String::new(),
            monthly_distance: Kilometres::ZERO,
            consumption_override: None,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VehicleAssumptions {
    /// Share of the vehicle energy charged at home, `0.0..=1.0`.
    pub home_charging_share: f64,

    /// Efficiency of the combustion vehicle being replaced.
    #[serde(rename = "fuel_efficiency_km_per_litre")]
    pub fuel_efficiency: KilometresPerLitre,

    #[serde(rename = "fuel_price_per_litre")]
    pub fuel_price: LitrePrice,
}

impl Default for VehicleAssumptions {
    fn default() -> Self {
        Self {
            home_charging_share: 0.9,
            fuel_efficiency: KilometresPerLitre(12.0),
            fuel_price: LitrePrice(5.50),
        }
    }
}

impl VehicleAssumptions {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        require_fraction("vehicle.home_charging_share", self.home_charging_share)?;
        require_positive("vehicle.fuel_efficiency_km_per_litre", self.fuel_efficiency.0)
    }
}

/// Vehicle demand and savings derived from [`VehicleProfile`].
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct VehicleLoad {
    /// Energy intensity actually used, `None` without a vehicle.
    pub consumption_rate: Option<KilowattHoursPer100Km>,

    /// Incremental household consumption from charging at home.
    pub monthly_consumption: KilowattHours,

    /// Avoided fuel cost minus the added electricity cost.
    pub monthly_savings: Cost,
}

impl VehicleLoad {
    pub const NONE: Self = Self {
        consumption_rate: None,
        monthly_consumption: KilowattHours::ZERO,
        monthly_savings: Cost::ZERO,
    };
}

/// Derive the vehicle load from the profile at the current average tariff.
pub fn estimate(
    profile: &VehicleProfile,
    catalog: &Catalog,
    tariff: KilowattHourPrice,
    assumptions: &VehicleAssumptions,
) -> Result<VehicleLoad, ConfigurationError> {
    if !profile.is_owned {
        return Ok(VehicleLoad::NONE);
    }

    let model = catalog.vehicle(&profile.model_id)?;
    let consumption_rate = profile.consumption_override.unwrap_or(model.consumption);
    let monthly_consumption =
        profile.monthly_distance * consumption_rate * assumptions.home_charging_share;

    let fuel: Litres = profile.monthly_distance / assumptions.fuel_efficiency;
    let monthly_savings = fuel * assumptions.fuel_price - monthly_consumption * tariff;

    debug!(
        model = %model.name,
        %consumption_rate,
        %monthly_consumption,
        %monthly_savings,
        "estimated the vehicle load",
    );
    Ok(VehicleLoad {
        consumption_rate: Some(consumption_rate),
        monthly_consumption,
        monthly_savings,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_not_owned() {
        let load = estimate(
            &VehicleProfile::not_owned(),
            &Catalog::default(),
            KilowattHourPrice(0.8),
            &VehicleAssumptions::default(),
        )
        .unwrap();
        assert_eq!(load, VehicleLoad::NONE);
        assert_eq!(load.monthly_consumption, KilowattHours::ZERO);
        assert_eq!(load.monthly_savings, Cost::ZERO);
    }

    #[test]
    fn test_not_owned_ignores_the_model() {
        let profile = VehicleProfile::builder()
            .is_owned(false)
            .model_id("zeppelin")
            .monthly_distance(Kilometres(1000.0))
            .build();
        let load = estimate(
            &profile,
            &Catalog::default(),
            KilowattHourPrice(0.8),
            &VehicleAssumptions::default(),
        );
        assert_eq!(load, Ok(VehicleLoad::NONE));
    }

    #[test]
    fn test_catalog_consumption() {
        let profile = VehicleProfile::builder()
            .is_owned(true)
            .model_id("compact-hatch")
            .monthly_distance(Kilometres(1000.0))
            .build();
        let load = estimate(
            &profile,
            &Catalog::default(),
            KilowattHourPrice(0.8),
            &VehicleAssumptions::default(),
        )
        .unwrap();
        assert_eq!(load.consumption_rate, Some(KilowattHoursPer100Km(13.5)));
        // 1000 km × 13.5 kWh / 100 km × 90 %:
        assert_abs_diff_eq!(load.monthly_consumption.0, 121.5, epsilon = 1e-9);
        // 1000 km / 12 km/L × 5.50 − 121.5 kWh × 0.80:
        assert_abs_diff_eq!(load.monthly_savings.0, 1000.0 / 12.0 * 5.5 - 97.2, epsilon = 1e-9);
    }

    #[test]
    fn test_consumption_override() {
        let profile = VehicleProfile::builder()
            .is_owned(true)
            .model_id("pickup")
            .monthly_distance(Kilometres(500.0))
            .consumption_override(KilowattHoursPer100Km(20.0))
            .build();
        let load = estimate(
            &profile,
            &Catalog::default(),
            KilowattHourPrice(1.0),
            &VehicleAssumptions::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(load.monthly_consumption.0, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_model() {
        let profile = VehicleProfile::builder()
            .is_owned(true)
            .model_id("zeppelin")
            .monthly_distance(Kilometres(100.0))
            .build();
        let result = estimate(
            &profile,
            &Catalog::default(),
            KilowattHourPrice(0.8),
            &VehicleAssumptions::default(),
        );
        assert_eq!(result, Err(ConfigurationError::UnknownVehicleModel { id: "zeppelin".into() }));
    }
}
