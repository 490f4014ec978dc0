use clap::Parser;
use solar_sizer::{
    core::vehicle::VehicleProfile,
    quantity::distance::{Kilometres, KilowattHoursPer100Km},
};

#[must_use]
#[derive(Parser)]
pub struct VehicleArgs {
    /// Electric vehicle model from the catalog, omit when there is no vehicle.
    #[clap(long = "vehicle", env = "VEHICLE_MODEL")]
    pub model_id: Option<String>,

    #[clap(long = "vehicle-distance-km", default_value = "1000", env = "VEHICLE_DISTANCE_KM")]
    pub monthly_distance: Kilometres,

    /// Overrides the catalog energy intensity.
    #[clap(long = "vehicle-consumption-kwh-per-100km", env = "VEHICLE_CONSUMPTION_KWH_PER_100KM")]
    pub consumption_override: Option<KilowattHoursPer100Km>,
}

impl VehicleArgs {
    pub fn profile(&self) -> VehicleProfile {
        match &self.model_id {
            None => VehicleProfile::not_owned(),
            Some(model_id) => VehicleProfile::builder()
                .is_owned(true)
                .model_id(model_id)
                .monthly_distance(self.monthly_distance)
                .maybe_consumption_override(self.consumption_override)
                .build(),
        }
    }
}
