//! Battery bank for the hybrid topology.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    error::ConfigurationError,
    ops::{ceil_count, checked_count},
    prelude::*,
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        time::{Days, Hours},
        voltage::Volts,
    },
};

/// Bank voltages the automatic mode picks from: the first threshold exceeded wins.
const AUTOMATIC_VOLTAGES: [(KilowattHours, Volts); 2] =
    [(KilowattHours(10.0), Volts(48.0)), (KilowattHours(5.0), Volts(24.0))];

/// Automatic mode voltage for small banks.
const LOWEST_VOLTAGE: Volts = Volts(12.0);

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
pub enum VoltageMode {
    /// Pick the voltage from the required backup energy.
    #[default]
    #[serde(rename = "auto")]
    #[value(name = "auto")]
    Automatic,

    #[serde(rename = "12v")]
    #[value(name = "12v")]
    Fixed12,

    #[serde(rename = "24v")]
    #[value(name = "24v")]
    Fixed24,

    #[serde(rename = "48v")]
    #[value(name = "48v")]
    Fixed48,
}

impl VoltageMode {
    pub fn system_voltage(self, required_energy: KilowattHours) -> Volts {
        match self {
            Self::Automatic => AUTOMATIC_VOLTAGES
                .iter()
                .find(|(threshold, _)| required_energy > *threshold)
                .map_or(LOWEST_VOLTAGE, |(_, voltage)| *voltage),
            Self::Fixed12 => Volts(12.0),
            Self::Fixed24 => Volts(24.0),
            Self::Fixed48 => Volts(48.0),
        }
    }
}

impl Display for VoltageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Automatic => write!(f, "auto"),
            Self::Fixed12 => write!(f, "12 V"),
            Self::Fixed24 => write!(f, "24 V"),
            Self::Fixed48 => write!(f, "48 V"),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct BatteryBankConfig {
    /// How long the bank must carry the backup load.
    #[serde(rename = "autonomy_hours")]
    pub autonomy: Hours,

    /// Share of the average household load kept running on backup, `0.0..=1.0`.
    pub backup_load_fraction: f64,

    #[builder(into)]
    pub chemistry_id: String,

    /// Requested depth of discharge, clamped to the chemistry maximum.
    pub depth_of_discharge: f64,

    #[serde(default)]
    #[builder(default)]
    pub voltage_mode: VoltageMode,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatteryBank {
    pub chemistry_id: String,
    pub chemistry_name: String,
    pub effective_depth_of_discharge: f64,

    /// Energy the bank must deliver, corrected by the round-trip efficiency.
    pub required_energy: KilowattHours,

    pub system_voltage: Volts,

    /// Units wired in series in one string.
    pub units_per_string: u32,

    /// Strings wired in parallel.
    pub strings: u32,

    pub unit_count: u32,
    pub total_capacity: KilowattHours,
    pub usable_capacity: KilowattHours,
    pub cost: Cost,
}

impl BatteryBank {
    /// Size the bank for the household baseline consumption.
    #[instrument(skip_all, fields(chemistry_id = %config.chemistry_id))]
    pub fn size(
        config: &BatteryBankConfig,
        catalog: &Catalog,
        monthly_consumption: KilowattHours,
    ) -> Result<Self, ConfigurationError> {
        let chemistry = catalog.battery(&config.chemistry_id)?;
        let effective_depth_of_discharge =
            chemistry.effective_depth_of_discharge(config.depth_of_discharge);

        let average_load: Kilowatts = monthly_consumption / Hours::from(Days::ONE_MONTH);
        let backup_energy = average_load * config.autonomy * config.backup_load_fraction;
        let required_energy = backup_energy / chemistry.efficiency;

        let unit_usable_capacity = chemistry.capacity * effective_depth_of_discharge;
        let system_voltage = config.voltage_mode.system_voltage(required_energy);
        let units_per_string = if chemistry.voltage < system_voltage {
            ceil_count(system_voltage / chemistry.voltage, "units per string")?
        } else {
            1
        };

        let string_usable_capacity = unit_usable_capacity * f64::from(units_per_string);
        let strings = if string_usable_capacity.is_positive() {
            ceil_count(required_energy / string_usable_capacity, "strings")?
        } else {
            warn!(effective_depth_of_discharge, "the bank has no usable capacity");
            0
        };
        let unit_count = checked_count(strings, units_per_string, "battery units")?;

        let this = Self {
            chemistry_id: config.chemistry_id.clone(),
            chemistry_name: chemistry.name.clone(),
            effective_depth_of_discharge,
            required_energy,
            system_voltage,
            units_per_string,
            strings,
            unit_count,
            total_capacity: chemistry.capacity * f64::from(unit_count),
            usable_capacity: unit_usable_capacity * f64::from(unit_count),
            cost: chemistry.cost * f64::from(unit_count),
        };
        info!(
            %this.required_energy,
            %this.system_voltage,
            this.strings,
            this.units_per_string,
            %this.cost,
            "sized the battery bank",
        );
        Ok(this)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn config(chemistry_id: &str) -> BatteryBankConfig {
        BatteryBankConfig::builder()
            .autonomy(Hours(8.0))
            .backup_load_fraction(0.55)
            .chemistry_id(chemistry_id)
            .depth_of_discharge(0.95)
            .build()
    }

    #[test]
    fn test_lithium_bank() {
        let bank =
            BatteryBank::size(&config("lithium"), &Catalog::default(), KilowattHours(350.0))
                .unwrap();
        assert_abs_diff_eq!(bank.effective_depth_of_discharge, 0.9);

        let expected_energy = 350.0 / 30.0 / 24.0 * 8.0 * 0.55 / 0.95;
        assert_abs_diff_eq!(bank.required_energy.0, expected_energy, epsilon = 1e-9);

        // ≈2.25 kWh is below every automatic threshold, and the 48 V unit needs no series:
        assert_eq!(bank.system_voltage, Volts(12.0));
        assert_eq!(bank.units_per_string, 1);
        assert_eq!(bank.strings, 1);
        assert_eq!(bank.unit_count, 1);
        assert_abs_diff_eq!(bank.usable_capacity.0, 5.12 * 0.9, epsilon = 1e-9);
        assert_eq!(bank.cost, Cost(8500.0));
    }

    #[test]
    fn test_series_wiring() {
        let config = BatteryBankConfig { voltage_mode: VoltageMode::Fixed48, ..config("agm") };
        let bank = BatteryBank::size(&config, &Catalog::default(), KilowattHours(350.0)).unwrap();
        assert_abs_diff_eq!(bank.effective_depth_of_discharge, 0.5);
        assert_eq!(bank.system_voltage, Volts(48.0));
        assert_eq!(bank.units_per_string, 4);

        // One string stores 4 × 1.8 × 0.5 = 3.6 kWh, and ≈2.52 kWh is required:
        assert_eq!(bank.strings, 1);
        assert_eq!(bank.unit_count, 4);
        assert_eq!(bank.cost, Cost(6000.0));
        assert_abs_diff_eq!(bank.total_capacity.0, 7.2, epsilon = 1e-9);
    }

    #[test]
    fn test_non_integer_unit_voltage_rounds_up() {
        let config =
            BatteryBankConfig { voltage_mode: VoltageMode::Fixed24, ..config("lithium-12v") };
        let bank = BatteryBank::size(&config, &Catalog::default(), KilowattHours(350.0)).unwrap();
        assert_eq!(bank.units_per_string, 2);
    }

    #[test]
    fn test_automatic_voltage() {
        assert_eq!(VoltageMode::Automatic.system_voltage(KilowattHours(4.0)), Volts(12.0));
        assert_eq!(VoltageMode::Automatic.system_voltage(KilowattHours(5.0)), Volts(12.0));
        assert_eq!(VoltageMode::Automatic.system_voltage(KilowattHours(7.5)), Volts(24.0));
        assert_eq!(VoltageMode::Automatic.system_voltage(KilowattHours(10.0)), Volts(24.0));
        assert_eq!(VoltageMode::Automatic.system_voltage(KilowattHours(12.0)), Volts(48.0));
        assert_eq!(VoltageMode::Fixed24.system_voltage(KilowattHours(100.0)), Volts(24.0));
    }

    #[test]
    fn test_no_backup_load() {
        let config = BatteryBankConfig { backup_load_fraction: 0.0, ..config("gel") };
        let bank = BatteryBank::size(&config, &Catalog::default(), KilowattHours(350.0)).unwrap();
        assert_eq!(bank.required_energy, KilowattHours::ZERO);
        assert_eq!(bank.strings, 0);
        assert_eq!(bank.unit_count, 0);
        assert_eq!(bank.cost, Cost::ZERO);
    }

    #[test]
    fn test_zero_depth_of_discharge() {
        let config = BatteryBankConfig { depth_of_discharge: 0.0, ..config("gel") };
        let bank = BatteryBank::size(&config, &Catalog::default(), KilowattHours(350.0)).unwrap();
        assert_eq!(bank.unit_count, 0);
    }

    #[test]
    fn test_depth_of_discharge_never_exceeds_maximum() {
        let catalog = Catalog::default();
        for (id, chemistry) in &catalog.batteries {
            for requested in [0.1, 0.5, 0.8, 0.9, 0.95, 1.0] {
                let config = BatteryBankConfig { depth_of_discharge: requested, ..config(id) };
                let bank = BatteryBank::size(&config, &catalog, KilowattHours(500.0)).unwrap();
                assert_eq!(
                    bank.effective_depth_of_discharge,
                    requested.min(chemistry.max_depth_of_discharge),
                );
            }
        }
    }

    #[test]
    fn test_unknown_chemistry() {
        let result =
            BatteryBank::size(&config("flux-capacitor"), &Catalog::default(), KilowattHours(350.0));
        assert!(matches!(result, Err(ConfigurationError::UnknownBatteryChemistry { .. })));
    }

    #[test]
    fn test_too_many_units() {
        // ≈2e9 strings of 4 AGM units each do not fit into the unit count:
        let config = BatteryBankConfig { voltage_mode: VoltageMode::Fixed48, ..config("agm") };
        assert_eq!(
            BatteryBank::size(&config, &Catalog::default(), KilowattHours(1e12)),
            Err(ConfigurationError::CountOutOfRange { what: "battery units" }),
        );
    }
}
