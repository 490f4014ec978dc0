use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigurationError, quantity::distance::KilowattHoursPer100Km};

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub name: String,
    pub category: VehicleCategory,

    /// Default energy intensity, used unless the profile overrides it.
    #[serde(rename = "consumption_kwh_per_100km")]
    pub consumption: KilowattHoursPer100Km,
}

impl VehicleModel {
    pub(super) fn validate(&self, id: &str) -> Result<(), ConfigurationError> {
        if self.consumption.is_positive() {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidVehicleModel {
                id: id.to_string(),
                reason: "consumption must be positive",
            })
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleCategory {
    Hatch,
    Sedan,
    Suv,
    Pickup,
    Motorcycle,
}

impl Display for VehicleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hatch => write!(f, "Hatch"),
            Self::Sedan => write!(f, "Sedan"),
            Self::Suv => write!(f, "SUV"),
            Self::Pickup => write!(f, "Pickup"),
            Self::Motorcycle => write!(f, "Motorcycle"),
        }
    }
}
