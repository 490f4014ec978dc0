use serde::{Deserialize, Serialize};

use crate::{
    core::assumptions::{require_non_negative, require_positive},
    error::ConfigurationError,
    ops::ceil_count,
    prelude::*,
    quantity::{
        area::SquareMetres,
        energy::{KilowattHours, SpecificYield},
        power::Kilowatts,
    },
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationAssumptions {
    /// Safety margin for wiring, soiling, temperature and inverter losses.
    pub loss_factor: f64,

    /// Average daily irradiance over a 30-day month, per kilowatt-peak.
    #[serde(rename = "monthly_yield_kwh_per_kwp")]
    pub monthly_yield: SpecificYield,

    #[serde(rename = "panel_rating_kw")]
    pub panel_rating: Kilowatts,

    #[serde(rename = "panel_area_m2")]
    pub panel_area: SquareMetres,
}

impl Default for GenerationAssumptions {
    fn default() -> Self {
        Self {
            loss_factor: 1.2,
            monthly_yield: SpecificYield(150.0),
            panel_rating: Kilowatts(0.665),
            panel_area: SquareMetres(2.8),
        }
    }
}

/// Photovoltaic array sized for the monthly demand.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Generation {
    /// Baseline plus vehicle consumption.
    pub total_demand: KilowattHours,

    /// Capacity needed to cover the demand, before rounding to whole panels.
    pub required_capacity: Kilowatts,

    pub panel_count: u32,

    /// Whole number of panels, never below the required capacity.
    pub installed_capacity: Kilowatts,

    pub monthly_generation: KilowattHours,
    pub area: SquareMetres,
}

impl GenerationAssumptions {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        require_positive("generation.loss_factor", self.loss_factor)?;
        require_positive("generation.monthly_yield_kwh_per_kwp", self.monthly_yield.0)?;
        require_positive("generation.panel_rating_kw", self.panel_rating.0)?;
        require_non_negative("generation.panel_area_m2", self.panel_area.0)
    }
}

impl Generation {
    pub fn size(
        total_demand: KilowattHours,
        assumptions: &GenerationAssumptions,
    ) -> Result<Self, ConfigurationError> {
        let required_capacity = total_demand * assumptions.loss_factor / assumptions.monthly_yield;
        let panel_count = ceil_count(required_capacity / assumptions.panel_rating, "panels")?;
        let installed_capacity = assumptions.panel_rating * f64::from(panel_count);
        let this = Self {
            total_demand,
            required_capacity,
            panel_count,
            installed_capacity,
            monthly_generation: installed_capacity * assumptions.monthly_yield,
            area: assumptions.panel_area * f64::from(panel_count),
        };
        debug!(
            %this.required_capacity,
            this.panel_count,
            %this.installed_capacity,
            "sized the array",
        );
        Ok(this)
    }
}
