//! Battery reserve and recharge array for the off-grid topology.
//!
//! Sized independently of the grid-tied array: the reserve covers the autonomy days,
//! and the supplemental panels recharge it.

use serde::{Deserialize, Serialize};

use crate::{
    core::assumptions::{require_fraction, require_non_negative, require_positive},
    error::ConfigurationError,
    ops::ceil_count,
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        time::{Days, Hours},
    },
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OffGridAssumptions {
    /// Reserve margin on top of the autonomy energy.
    pub safety_factor: f64,

    /// Capacity of the reference battery unit.
    #[serde(rename = "unit_capacity_kwh")]
    pub unit_capacity: KilowattHours,

    /// Safe depth of discharge of the reference unit.
    pub unit_max_depth_of_discharge: f64,

    /// Recharge power budgeted per battery unit.
    #[serde(rename = "unit_recharge_power_kw")]
    pub unit_recharge_power: Kilowatts,

    pub unit_cost: Cost,
    pub panel_cost: Cost,

    /// Charge controller and off-grid inverter.
    pub controller_cost: Cost,
}

impl Default for OffGridAssumptions {
    fn default() -> Self {
        Self {
            safety_factor: 1.3,
            unit_capacity: KilowattHours(5.12),
            unit_max_depth_of_discharge: 1.0,
            unit_recharge_power: Kilowatts(0.5),
            unit_cost: Cost(8500.0),
            panel_cost: Cost(800.0),
            controller_cost: Cost(7000.0),
        }
    }
}

impl OffGridAssumptions {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        require_positive("off_grid.safety_factor", self.safety_factor)?;
        require_positive("off_grid.unit_capacity_kwh", self.unit_capacity.0)?;
        require_fraction("off_grid.unit_max_depth_of_discharge", self.unit_max_depth_of_discharge)?;
        require_positive("off_grid.unit_recharge_power_kw", self.unit_recharge_power.0)?;
        require_non_negative("off_grid.unit_cost", self.unit_cost.0)?;
        require_non_negative("off_grid.panel_cost", self.panel_cost.0)?;
        require_non_negative("off_grid.controller_cost", self.controller_cost.0)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct OffGridConfig {
    /// Days without sun the reserve must cover.
    #[serde(rename = "autonomy_days")]
    pub autonomy: Days,

    /// Requested depth of discharge, clamped to the reference unit maximum.
    pub depth_of_discharge: f64,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct OffGridBank {
    pub effective_depth_of_discharge: f64,

    /// Energy the bank must hold, including the safety margin.
    pub reserve: KilowattHours,

    pub battery_count: u32,

    /// Panels added on top of the main array to recharge the bank.
    pub supplemental_panel_count: u32,

    pub battery_cost: Cost,
    pub panel_cost: Cost,
    pub controller_cost: Cost,

    /// Everything above combined.
    pub cost: Cost,
}

impl OffGridBank {
    #[instrument(skip_all, fields(autonomy = %config.autonomy))]
    pub fn size(
        config: &OffGridConfig,
        monthly_consumption: KilowattHours,
        panel_rating: Kilowatts,
        assumptions: &OffGridAssumptions,
    ) -> Result<Self, ConfigurationError> {
        let effective_depth_of_discharge =
            config.depth_of_discharge.min(assumptions.unit_max_depth_of_discharge);

        let average_load: Kilowatts = monthly_consumption / Hours::from(Days::ONE_MONTH);
        let reserve = average_load * Hours::from(config.autonomy) * assumptions.safety_factor;

        let unit_usable_capacity = assumptions.unit_capacity * effective_depth_of_discharge;
        let battery_count = if unit_usable_capacity.is_positive() {
            ceil_count(reserve / unit_usable_capacity, "batteries")?
        } else {
            warn!(effective_depth_of_discharge, "the reference unit has no usable capacity");
            0
        };

        let recharge_power = assumptions.unit_recharge_power * f64::from(battery_count);
        let supplemental_panel_count =
            ceil_count(recharge_power / panel_rating, "supplemental panels")?;

        let battery_cost = assumptions.unit_cost * f64::from(battery_count);
        let panel_cost = assumptions.panel_cost * f64::from(supplemental_panel_count);
        let this = Self {
            effective_depth_of_discharge,
            reserve,
            battery_count,
            supplemental_panel_count,
            battery_cost,
            panel_cost,
            controller_cost: assumptions.controller_cost,
            cost: battery_cost + panel_cost + assumptions.controller_cost,
        };
        info!(
            %this.reserve,
            this.battery_count,
            this.supplemental_panel_count,
            %this.cost,
            "sized the off-grid bank",
        );
        Ok(this)
    }
}
