use serde::{Deserialize, Serialize};

use crate::{
    core::connection::ConnectionPhase,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Household energy usage, immutable per computation.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct HouseholdProfile {
    /// Baseline monthly consumption, without an electric vehicle.
    #[serde(rename = "monthly_consumption_kwh")]
    pub monthly_consumption: KilowattHours,

    /// Current monthly electricity bill.
    pub monthly_bill: Cost,

    pub connection_phase: ConnectionPhase,
}
