use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    core::{
        assumptions::Assumptions,
        battery_bank::BatteryBank,
        connection::Availability,
        cost::CostBreakdown,
        finance::FinancialProjection,
        generation::Generation,
        household::HouseholdProfile,
        off_grid::OffGridBank,
        tariff,
        topology::{Installation, Topology},
        vehicle::{self, VehicleLoad, VehicleProfile},
    },
    error::ConfigurationError,
    prelude::*,
    quantity::{cost::Cost, price::KilowattHourPrice},
};

/// Everything the household told about itself and the installation it wants.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct SizingRequest {
    pub household: HouseholdProfile,

    #[serde(default = "VehicleProfile::not_owned")]
    #[builder(default = VehicleProfile::not_owned())]
    pub vehicle: VehicleProfile,

    #[serde(default)]
    #[builder(default)]
    pub installation: Installation,
}

/// Storage sized for the chosen topology.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Storage {
    None,
    BatteryBank(BatteryBank),
    OffGrid(OffGridBank),
}

impl Storage {
    pub const fn cost(&self) -> Cost {
        match self {
            Self::None => Cost::ZERO,
            Self::BatteryBank(bank) => bank.cost,
            Self::OffGrid(bank) => bank.cost,
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SizingResult {
    pub topology: Topology,

    /// Average price the household currently pays.
    pub tariff: KilowattHourPrice,

    pub vehicle: VehicleLoad,
    pub generation: Generation,
    pub availability: Availability,

    /// Expected monthly bill once the installation runs.
    pub monthly_bill_after: Cost,

    pub storage: Storage,
    pub costs: CostBreakdown,
    pub finance: FinancialProjection,
}

/// Run the whole sizing for the request.
///
/// Pure: the same request, catalog and assumptions always produce the same result.
/// Reference data is validated first, so that a meaningless constant cannot under-size the array.
#[instrument(skip_all, fields(topology = %request.installation.topology()))]
pub fn size(
    request: &SizingRequest,
    catalog: &Catalog,
    assumptions: &Assumptions,
) -> Result<SizingResult, ConfigurationError> {
    catalog.validate()?;
    assumptions.validate()?;

    let household = &request.household;
    let topology = request.installation.topology();

    let tariff = tariff::estimate(household, &assumptions.tariff);
    let vehicle = vehicle::estimate(&request.vehicle, catalog, tariff, &assumptions.vehicle)?;
    let generation = Generation::size(
        household.monthly_consumption + vehicle.monthly_consumption,
        &assumptions.generation,
    )?;
    let availability =
        Availability::new(household.connection_phase, topology, tariff, &assumptions.connection);

    // Storage covers the household baseline, the vehicle is not charged from it.
    let storage = match &request.installation {
        Installation::GridTied => Storage::None,
        Installation::Hybrid(config) => {
            Storage::BatteryBank(BatteryBank::size(config, catalog, household.monthly_consumption)?)
        }
        Installation::OffGrid(config) => Storage::OffGrid(OffGridBank::size(
            config,
            household.monthly_consumption,
            assumptions.generation.panel_rating,
            &assumptions.off_grid,
        )?),
    };

    let costs = CostBreakdown::aggregate(
        generation.installed_capacity,
        topology,
        storage.cost(),
        &assumptions.cost,
    );
    let finance = FinancialProjection::project(
        topology,
        household.monthly_bill,
        availability.cost,
        vehicle.monthly_savings,
        costs.total,
        &assumptions.finance,
    );

    Ok(SizingResult {
        topology,
        tariff,
        vehicle,
        generation,
        availability,
        monthly_bill_after: availability.cost,
        storage,
        costs,
        finance,
    })
}
