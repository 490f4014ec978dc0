use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    core::topology::Topology,
    quantity::{cost::Cost, energy::KilowattHours, price::KilowattHourPrice},
};

/// Grid connection category, in ascending order of complexity.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionPhase {
    SinglePhase,
    TwoPhase,
    ThreePhase,
}

impl Display for ConnectionPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SinglePhase => write!(f, "Single-phase"),
            Self::TwoPhase => write!(f, "Two-phase"),
            Self::ThreePhase => write!(f, "Three-phase"),
        }
    }
}

impl ConnectionPhase {
    /// Minimum billable monthly usage for the connection category.
    pub const fn availability_floor(self, assumptions: &ConnectionAssumptions) -> KilowattHours {
        match self {
            Self::SinglePhase => assumptions.single_phase_floor,
            Self::TwoPhase => assumptions.two_phase_floor,
            Self::ThreePhase => assumptions.three_phase_floor,
        }
    }

    /// Connection category a household with the consumption would normally have.
    pub fn suggest(
        monthly_consumption: KilowattHours,
        assumptions: &ConnectionAssumptions,
    ) -> Self {
        if monthly_consumption > assumptions.three_phase_above {
            Self::ThreePhase
        } else if monthly_consumption > assumptions.two_phase_above {
            Self::TwoPhase
        } else {
            Self::SinglePhase
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionAssumptions {
    #[serde(rename = "single_phase_floor_kwh")]
    pub single_phase_floor: KilowattHours,

    #[serde(rename = "two_phase_floor_kwh")]
    pub two_phase_floor: KilowattHours,

    #[serde(rename = "three_phase_floor_kwh")]
    pub three_phase_floor: KilowattHours,

    /// Consumption above which two-phase connection is suggested.
    #[serde(rename = "two_phase_above_kwh")]
    pub two_phase_above: KilowattHours,

    /// Consumption above which three-phase connection is suggested.
    #[serde(rename = "three_phase_above_kwh")]
    pub three_phase_above: KilowattHours,
}

impl Default for ConnectionAssumptions {
    fn default() -> Self {
        Self {
            single_phase_floor: KilowattHours(30.0),
            two_phase_floor: KilowattHours(50.0),
            three_phase_floor: KilowattHours(100.0),
            two_phase_above: KilowattHours(600.0),
            three_phase_above: KilowattHours(1200.0),
        }
    }
}

/// Grid usage the installation cannot eliminate.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Availability {
    /// Minimum billable monthly usage of the connection.
    pub floor: KilowattHours,

    /// Monthly cost of the floor, zero when islanded.
    pub cost: Cost,
}

impl Availability {
    pub fn new(
        phase: ConnectionPhase,
        topology: Topology,
        tariff: KilowattHourPrice,
        assumptions: &ConnectionAssumptions,
    ) -> Self {
        let floor = phase.availability_floor(assumptions);
        let cost = if topology.is_grid_connected() { floor * tariff } else { Cost::ZERO };
        Self { floor, cost }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_floors_ascend_with_phase() {
        let assumptions = ConnectionAssumptions::default();
        let floors =
            [ConnectionPhase::SinglePhase, ConnectionPhase::TwoPhase, ConnectionPhase::ThreePhase]
                .map(|phase| phase.availability_floor(&assumptions));
        assert_eq!(floors, [KilowattHours(30.0), KilowattHours(50.0), KilowattHours(100.0)]);
    }

    #[test]
    fn test_grid_tied_availability_cost() {
        let availability = Availability::new(
            ConnectionPhase::TwoPhase,
            Topology::Hybrid,
            KilowattHourPrice(0.8),
            &ConnectionAssumptions::default(),
        );
        assert_eq!(availability.floor, KilowattHours(50.0));
        assert_abs_diff_eq!(availability.cost.0, 40.0);
    }

    #[test]
    fn test_off_grid_availability_is_free() {
        let availability = Availability::new(
            ConnectionPhase::ThreePhase,
            Topology::OffGrid,
            KilowattHourPrice(0.8),
            &ConnectionAssumptions::default(),
        );
        assert_eq!(availability.floor, KilowattHours(100.0));
        assert_eq!(availability.cost, Cost::ZERO);
    }

    #[test]
    fn test_suggest() {
        let assumptions = ConnectionAssumptions::default();
        assert_eq!(
            ConnectionPhase::suggest(KilowattHours(350.0), &assumptions),
            ConnectionPhase::SinglePhase,
        );
        assert_eq!(
            ConnectionPhase::suggest(KilowattHours(600.0), &assumptions),
            ConnectionPhase::SinglePhase,
        );
        assert_eq!(
            ConnectionPhase::suggest(KilowattHours(800.0), &assumptions),
            ConnectionPhase::TwoPhase,
        );
        assert_eq!(
            ConnectionPhase::suggest(KilowattHours(1500.0), &assumptions),
            ConnectionPhase::ThreePhase,
        );
    }
}
