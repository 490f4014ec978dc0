use serde::{Deserialize, Serialize};

use crate::{
    core::{
        assumptions::{require_fraction, require_non_negative},
        topology::Topology,
    },
    error::ConfigurationError,
    prelude::*,
    quantity::{cost::Cost, power::Kilowatts, price::KilowattPrice},
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostAssumptions {
    /// Turnkey price of grid-tied and hybrid arrays.
    #[serde(rename = "grid_tied_rate_per_kwp")]
    pub grid_tied_rate: KilowattPrice,

    /// Turnkey price of off-grid arrays.
    #[serde(rename = "off_grid_rate_per_kwp")]
    pub off_grid_rate: KilowattPrice,

    pub panels_share: f64,
    pub inverter_share: f64,
    pub structure_share: f64,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            grid_tied_rate: KilowattPrice(4200.0),
            off_grid_rate: KilowattPrice(5500.0),
            panels_share: 0.45,
            inverter_share: 0.15,
            structure_share: 0.15,
        }
    }
}

impl CostAssumptions {
    /// The itemized shares must leave a non-negative remainder for labor.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        require_non_negative("cost.grid_tied_rate_per_kwp", self.grid_tied_rate.0)?;
        require_non_negative("cost.off_grid_rate_per_kwp", self.off_grid_rate.0)?;
        require_fraction("cost.panels_share", self.panels_share)?;
        require_fraction("cost.inverter_share", self.inverter_share)?;
        require_fraction("cost.structure_share", self.structure_share)?;
        require_fraction(
            "cost.*_share",
            self.panels_share + self.inverter_share + self.structure_share,
        )
    }

    pub const fn rate(&self, topology: Topology) -> KilowattPrice {
        match topology {
            Topology::GridTied | Topology::Hybrid => self.grid_tied_rate,
            Topology::OffGrid => self.off_grid_rate,
        }
    }
}

/// Itemized investment.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Array cost at the topology rate.
    pub base: Cost,

    pub panels: Cost,
    pub inverter: Cost,
    pub structure: Cost,

    /// Whatever remains of the base cost after the other items.
    pub labor: Cost,

    /// Battery bank or off-grid reserve.
    pub additive: Cost,

    pub total: Cost,
}

impl CostBreakdown {
    pub fn aggregate(
        installed_capacity: Kilowatts,
        topology: Topology,
        additive: Cost,
        assumptions: &CostAssumptions,
    ) -> Self {
        let base = assumptions.rate(topology) * installed_capacity;
        let panels = base * assumptions.panels_share;
        let inverter = base * assumptions.inverter_share;
        let structure = base * assumptions.structure_share;
        let this = Self {
            base,
            panels,
            inverter,
            structure,
            labor: base - panels - inverter - structure,
            additive,
            total: base + additive,
        };
        debug!(%topology, %this.base, %this.additive, %this.total, "aggregated the costs");
        this
    }

    /// Items in presentation order.
    pub const fn items(&self) -> [(&'static str, Cost); 5] {
        [
            ("Panels", self.panels),
            ("Inverter", self.inverter),
            ("Structure", self.structure),
            ("Labor", self.labor),
            ("Storage", self.additive),
        ]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_grid_tied() {
        let costs = CostBreakdown::aggregate(
            Kilowatts(1.995),
            Topology::GridTied,
            Cost::ZERO,
            &CostAssumptions::default(),
        );
        assert_abs_diff_eq!(costs.base.0, 8379.0, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.panels.0, 3770.55, epsilon = 1e-9);
        assert_abs_diff_eq!(costs.labor.0, 2094.75, epsilon = 1e-9);
        assert_eq!(costs.total, costs.base);
    }

    #[test]
    fn test_off_grid_uses_its_own_rate() {
        let costs = CostBreakdown::aggregate(
            Kilowatts(2.0),
            Topology::OffGrid,
            Cost(153_400.0),
            &CostAssumptions::default(),
        );
        assert_abs_diff_eq!(costs.base.0, 11_000.0);
        assert_abs_diff_eq!(costs.total.0, 164_400.0);
    }

    #[test]
    fn test_items_sum_to_base() {
        let assumptions = CostAssumptions::default();
        for topology in [Topology::GridTied, Topology::Hybrid, Topology::OffGrid] {
            for capacity in (0..100).map(|step| f64::from(step) * 0.665) {
                let costs = CostBreakdown::aggregate(
                    Kilowatts(capacity),
                    topology,
                    Cost(1000.0),
                    &assumptions,
                );
                let sum = costs.panels + costs.inverter + costs.structure + costs.labor;
                assert_abs_diff_eq!(sum.0, costs.base.0, epsilon = 1e-9);
                assert_eq!(costs.total, costs.base + costs.additive);
            }
        }
    }

    #[test]
    fn test_shares_must_leave_labor() {
        let assumptions = CostAssumptions { panels_share: 0.8, ..CostAssumptions::default() };
        assert!(matches!(
            assumptions.validate(),
            Err(ConfigurationError::InvalidAssumption { field: "cost.*_share", .. }),
        ));
        assert_eq!(CostAssumptions::default().validate(), Ok(()));
    }
}
