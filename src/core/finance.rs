//! Long-horizon financial position of the installation.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    core::topology::Topology,
    prelude::*,
    quantity::{cost::Cost, time::Years},
};

const MONTHS_PER_YEAR: f64 = 12.0;

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinanceAssumptions {
    pub horizon_years: u32,
}

impl Default for FinanceAssumptions {
    fn default() -> Self {
        Self { horizon_years: 25 }
    }
}

/// Time for the savings to repay the investment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Payback {
    Years(Years),

    /// The installation saves nothing, so it never pays back.
    Unbounded,
}

impl Display for Payback {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{years:.1}"),
            Self::Unbounded => write!(f, "never"),
        }
    }
}

/// Cumulative position at the end of a year.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CashFlowPoint {
    pub year: u32,

    /// Savings to date minus the investment.
    pub position: Cost,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct FinancialProjection {
    pub annual_bill_savings: Cost,
    pub annual_vehicle_savings: Cost,
    pub annual_savings: Cost,
    pub payback: Payback,
    pub horizon_years: u32,
    pub total_investment: Cost,

    /// Position at the end of the horizon.
    pub net_savings: Cost,
}

impl FinancialProjection {
    #[instrument(skip_all, fields(%topology))]
    pub fn project(
        topology: Topology,
        monthly_bill: Cost,
        availability_cost: Cost,
        monthly_vehicle_savings: Cost,
        total_investment: Cost,
        assumptions: &FinanceAssumptions,
    ) -> Self {
        let monthly_bill_savings = match topology {
            Topology::GridTied | Topology::Hybrid => monthly_bill - availability_cost,
            Topology::OffGrid => monthly_bill,
        };
        let annual_bill_savings = monthly_bill_savings * MONTHS_PER_YEAR;
        let annual_vehicle_savings = monthly_vehicle_savings * MONTHS_PER_YEAR;
        let annual_savings = annual_bill_savings + annual_vehicle_savings;

        let payback = if annual_savings.is_positive() {
            Payback::Years(Years(total_investment / annual_savings))
        } else {
            warn!(%annual_savings, "the installation does not pay back");
            Payback::Unbounded
        };

        let this = Self {
            annual_bill_savings,
            annual_vehicle_savings,
            annual_savings,
            payback,
            horizon_years: assumptions.horizon_years,
            total_investment,
            net_savings: annual_savings * f64::from(assumptions.horizon_years) - total_investment,
        };
        info!(%this.annual_savings, %this.payback, %this.net_savings, "projected");
        this
    }

    /// Cumulative position for each year from the installation to the end of the horizon.
    pub fn cash_flow(&self) -> impl Iterator<Item = CashFlowPoint> + use<> {
        let Self { annual_savings, total_investment, .. } = *self;
        (0..=self.horizon_years).map(move |year| CashFlowPoint {
            year,
            position: annual_savings * f64::from(year) - total_investment,
        })
    }

    /// First whole year with a non-negative cumulative position within the horizon.
    #[must_use]
    pub fn break_even_year(&self) -> Option<u32> {
        self.cash_flow().find(|point| point.position >= Cost::ZERO).map(|point| point.year)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_grid_tied() {
        let projection = FinancialProjection::project(
            Topology::GridTied,
            Cost(160.0),
            Cost(24.0),
            Cost::ZERO,
            Cost(8379.0),
            &FinanceAssumptions::default(),
        );
        assert_abs_diff_eq!(projection.annual_bill_savings.0, 1632.0);
        assert_eq!(projection.annual_vehicle_savings, Cost::ZERO);
        let Payback::Years(years) = projection.payback else {
            panic!("expected a bounded payback");
        };
        assert_abs_diff_eq!(years.0, 8379.0 / 1632.0);
        assert_abs_diff_eq!(projection.net_savings.0, 1632.0 * 25.0 - 8379.0);
    }

    #[test]
    fn test_off_grid_saves_the_whole_bill() {
        let projection = FinancialProjection::project(
            Topology::OffGrid,
            Cost(400.0),
            Cost::ZERO,
            Cost(100.0),
            Cost(100_000.0),
            &FinanceAssumptions::default(),
        );
        assert_abs_diff_eq!(projection.annual_bill_savings.0, 4800.0);
        assert_abs_diff_eq!(projection.annual_vehicle_savings.0, 1200.0);
        assert_abs_diff_eq!(projection.annual_savings.0, 6000.0);
    }

    #[test]
    fn test_unbounded_payback() {
        for bill in [24.0, 10.0, 0.0] {
            let projection = FinancialProjection::project(
                Topology::Hybrid,
                Cost(bill),
                Cost(24.0),
                Cost::ZERO,
                Cost(30_000.0),
                &FinanceAssumptions::default(),
            );
            assert_eq!(projection.payback, Payback::Unbounded, "bill: {bill}");
            assert!(projection.net_savings < Cost::ZERO);
            assert_eq!(projection.break_even_year(), None);
        }
    }

    #[test]
    fn test_cash_flow() {
        let projection = FinancialProjection::project(
            Topology::GridTied,
            Cost(100.0),
            Cost::ZERO,
            Cost::ZERO,
            Cost(3000.0),
            &FinanceAssumptions { horizon_years: 5 },
        );
        let positions: Vec<_> = projection.cash_flow().map(|point| point.position.0).collect();
        assert_eq!(positions, [-3000.0, -1800.0, -600.0, 600.0, 1800.0, 3000.0]);
        assert_eq!(projection.break_even_year(), Some(3));
        assert_eq!(projection.payback, Payback::Years(Years(2.5)));
    }

    #[test]
    fn test_payback_display() {
        assert_eq!(Payback::Years(Years(6.34)).to_string(), "6.3 yr");
        assert_eq!(Payback::Unbounded.to_string(), "never");
    }
}
