use clap::Parser;
use solar_sizer::{
    core::{
        HouseholdProfile,
        connection::{ConnectionAssumptions, ConnectionPhase},
    },
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
};

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct HouseholdArgs {
    /// Baseline monthly consumption in kilowatt-hours, without an electric vehicle.
    #[clap(long = "consumption-kwh", env = "CONSUMPTION_KWH")]
    pub monthly_consumption: KilowattHours,

    /// Current monthly electricity bill.
    #[clap(long = "bill", env = "MONTHLY_BILL")]
    pub monthly_bill: Cost,

    /// Grid connection, suggested from the consumption when omitted.
    #[clap(long, value_enum, env = "CONNECTION_PHASE")]
    pub connection_phase: Option<ConnectionPhase>,
}

impl HouseholdArgs {
    pub fn profile(self, assumptions: &ConnectionAssumptions) -> HouseholdProfile {
        let connection_phase = self.connection_phase.unwrap_or_else(|| {
            let phase = ConnectionPhase::suggest(self.monthly_consumption, assumptions);
            info!(%phase, "suggested the connection phase");
            phase
        });
        HouseholdProfile::builder()
            .monthly_consumption(self.monthly_consumption)
            .monthly_bill(self.monthly_bill)
            .connection_phase(connection_phase)
            .build()
    }
}
