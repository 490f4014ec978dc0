use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigurationError,
    quantity::{cost::Cost, energy::KilowattHours, time::Years, voltage::Volts},
};

/// Battery unit datasheet.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatteryChemistry {
    pub name: String,

    /// Nominal energy capacity of one unit.
    #[serde(rename = "capacity_kwh")]
    pub capacity: KilowattHours,

    /// Nominal voltage of one unit.
    #[serde(rename = "voltage_volts")]
    pub voltage: Volts,

    /// Maximum safe depth of discharge, `0.0..=1.0`.
    pub max_depth_of_discharge: f64,

    /// Round-trip efficiency, `0.0..=1.0`.
    pub efficiency: f64,

    #[serde(rename = "unit_cost")]
    pub cost: Cost,

    /// Rated cycle life.
    pub cycles: u32,

    #[serde(rename = "warranty_years")]
    pub warranty: Years,
}

impl BatteryChemistry {
    /// Requested depth of discharge, limited by the safe maximum.
    #[must_use]
    pub fn effective_depth_of_discharge(&self, requested: f64) -> f64 {
        requested.min(self.max_depth_of_discharge)
    }

    pub(super) fn validate(&self, id: &str) -> Result<(), ConfigurationError> {
        let invalid = |reason| {
            Err(ConfigurationError::InvalidBatteryChemistry { id: id.to_string(), reason })
        };
        if !self.capacity.is_positive() {
            return invalid("capacity must be positive");
        }
        if !self.voltage.is_positive() {
            return invalid("voltage must be positive");
        }
        if !(self.max_depth_of_discharge > 0.0 && self.max_depth_of_discharge <= 1.0) {
            return invalid("maximum depth of discharge must be within `(0, 1]`");
        }
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return invalid("efficiency must be within `(0, 1]`");
        }
        if self.cost < Cost::ZERO {
            return invalid("unit cost must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_effective_depth_of_discharge_is_clamped() {
        let catalog = Catalog::default();
        let lithium = catalog.battery("lithium").unwrap();
        assert_eq!(lithium.effective_depth_of_discharge(0.95), 0.9);
        assert_eq!(lithium.effective_depth_of_discharge(0.8), 0.8);
    }

    #[test]
    fn test_zero_voltage_is_invalid() {
        let mut chemistry = Catalog::default().battery("agm").unwrap().clone();
        chemistry.voltage = Volts::ZERO;
        assert!(chemistry.validate("agm").is_err());
    }
}
