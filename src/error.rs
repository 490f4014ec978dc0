use derive_more::{Display, Error};

/// Input or reference data the sizing cannot work with.
///
/// Numeric edge cases of the household input never end up here: they are resolved with fallbacks
/// and clamps. Only unknown identifiers, meaningless reference data, and unit counts too large
/// to represent are rejected.
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum ConfigurationError {
    #[display("unknown battery chemistry `{id}`")]
    UnknownBatteryChemistry { id: String },

    #[display("unknown vehicle model `{id}`")]
    UnknownVehicleModel { id: String },

    #[display("battery chemistry `{id}`: {reason}")]
    InvalidBatteryChemistry { id: String, reason: &'static str },

    #[display("vehicle model `{id}`: {reason}")]
    InvalidVehicleModel { id: String, reason: &'static str },

    #[display("assumption `{field}`: {reason}")]
    InvalidAssumption { field: &'static str, reason: &'static str },

    #[display("too many {what} to count")]
    CountOutOfRange { what: &'static str },
}
