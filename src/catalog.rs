//! Read-only reference data: battery chemistries and electric vehicle models.
//!
//! The catalog is passed explicitly into the sizing functions, there is no global instance.

pub mod battery;
pub mod vehicle;

use std::{collections::BTreeMap, fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

pub use self::{
    battery::BatteryChemistry,
    vehicle::{VehicleCategory, VehicleModel},
};
use crate::{
    error::ConfigurationError,
    prelude::*,
    quantity::{
        cost::Cost,
        distance::KilowattHoursPer100Km,
        energy::KilowattHours,
        time::Years,
        voltage::Volts,
    },
};

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Battery chemistries by identifier.
    #[serde(default = "Catalog::builtin_batteries")]
    pub batteries: BTreeMap<String, BatteryChemistry>,

    /// Vehicle models by identifier.
    #[serde(default = "Catalog::builtin_vehicles")]
    pub vehicles: BTreeMap<String, VehicleModel>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self { batteries: Self::builtin_batteries(), vehicles: Self::builtin_vehicles() }
    }
}

impl Catalog {
    /// Read the catalog from a TOML file.
    ///
    /// A section missing from the file falls back to the built-in entries.
    #[instrument(level = "debug")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the catalog `{}`", path.display()))?;
        let catalog: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the catalog `{}`", path.display()))?;
        catalog.validate()?;
        info!(
            n_batteries = catalog.batteries.len(),
            n_vehicles = catalog.vehicles.len(),
            "loaded the catalog",
        );
        Ok(catalog)
    }

    /// Check that every entry is physically meaningful.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (id, chemistry) in &self.batteries {
            chemistry.validate(id)?;
        }
        for (id, model) in &self.vehicles {
            model.validate(id)?;
        }
        Ok(())
    }

    pub fn battery(&self, id: &str) -> Result<&BatteryChemistry, ConfigurationError> {
        self.batteries
            .get(id)
            .ok_or_else(|| ConfigurationError::UnknownBatteryChemistry { id: id.to_string() })
    }

    pub fn vehicle(&self, id: &str) -> Result<&VehicleModel, ConfigurationError> {
        self.vehicles
            .get(id)
            .ok_or_else(|| ConfigurationError::UnknownVehicleModel { id: id.to_string() })
    }

    fn builtin_batteries() -> BTreeMap<String, BatteryChemistry> {
        [
            (
                "lithium",
                BatteryChemistry {
                    name: "LiFePO4 48 V rack module".to_string(),
                    capacity: KilowattHours(5.12),
                    voltage: Volts(48.0),
                    max_depth_of_discharge: 0.9,
                    efficiency: 0.95,
                    cost: Cost(8500.0),
                    cycles: 6000,
                    warranty: Years(10.0),
                },
            ),
            (
                "lithium-12v",
                BatteryChemistry {
                    name: "LiFePO4 12.8 V 100 Ah".to_string(),
                    capacity: KilowattHours(1.28),
                    voltage: Volts(12.8),
                    max_depth_of_discharge: 0.9,
                    efficiency: 0.95,
                    cost: Cost(2600.0),
                    cycles: 4000,
                    warranty: Years(5.0),
                },
            ),
            (
                "gel",
                BatteryChemistry {
                    name: "Lead-acid gel 12 V 200 Ah".to_string(),
                    capacity: KilowattHours(2.4),
                    voltage: Volts(12.0),
                    max_depth_of_discharge: 0.6,
                    efficiency: 0.85,
                    cost: Cost(2200.0),
                    cycles: 1200,
                    warranty: Years(3.0),
                },
            ),
            (
                "agm",
                BatteryChemistry {
                    name: "Lead-acid AGM 12 V 150 Ah".to_string(),
                    capacity: KilowattHours(1.8),
                    voltage: Volts(12.0),
                    max_depth_of_discharge: 0.5,
                    efficiency: 0.85,
                    cost: Cost(1500.0),
                    cycles: 800,
                    warranty: Years(2.0),
                },
            ),
        ]
        .into_iter()
        .map(|(id, chemistry)| (id.to_string(), chemistry))
        .collect()
    }

    fn builtin_vehicles() -> BTreeMap<String, VehicleModel> {
        [
            ("compact-hatch", "Compact hatchback", VehicleCategory::Hatch, 13.5),
            ("mid-sedan", "Mid-size sedan", VehicleCategory::Sedan, 15.5),
            ("family-suv", "Family SUV", VehicleCategory::Suv, 18.5),
            ("pickup", "Pickup truck", VehicleCategory::Pickup, 24.0),
            ("scooter", "Electric scooter", VehicleCategory::Motorcycle, 4.0),
        ]
        .into_iter()
        .map(|(id, name, category, consumption)| {
            let model = VehicleModel {
                name: name.to_string(),
                category,
                consumption: KilowattHoursPer100Km(consumption),
            };
            (id.to_string(), model)
        })
        .collect()
    }
}
