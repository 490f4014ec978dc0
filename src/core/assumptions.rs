use std::{fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        connection::ConnectionAssumptions,
        cost::CostAssumptions,
        finance::FinanceAssumptions,
        generation::GenerationAssumptions,
        off_grid::OffGridAssumptions,
        tariff::TariffAssumptions,
        vehicle::VehicleAssumptions,
    },
    error::ConfigurationError,
    prelude::*,
};

/// Physical and commercial constants of the sizing.
///
/// Every section and every field may be omitted from the file, falling back to the defaults.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Assumptions {
    pub tariff: TariffAssumptions,
    pub connection: ConnectionAssumptions,
    pub vehicle: VehicleAssumptions,
    pub generation: GenerationAssumptions,
    pub off_grid: OffGridAssumptions,
    pub cost: CostAssumptions,
    pub finance: FinanceAssumptions,
}

impl Assumptions {
    #[instrument(level = "debug")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the assumptions `{}`", path.display()))?;
        let assumptions: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the assumptions `{}`", path.display()))?;
        assumptions.validate()?;
        info!(path = %path.display(), "loaded the assumptions");
        Ok(assumptions)
    }

    /// Check that every constant is physically meaningful.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        require_positive("tariff.fallback_price_per_kwh", self.tariff.fallback_price.0)?;
        let connection = &self.connection;
        for (field, floor) in [
            ("connection.single_phase_floor_kwh", connection.single_phase_floor),
            ("connection.two_phase_floor_kwh", connection.two_phase_floor),
            ("connection.three_phase_floor_kwh", connection.three_phase_floor),
        ] {
            require_non_negative(field, floor.0)?;
        }
        self.vehicle.validate()?;
        self.generation.validate()?;
        self.off_grid.validate()?;
        self.cost.validate()
    }
}

pub(super) fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidAssumption { field, reason: "must be positive" })
    }
}

pub(super) fn require_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), ConfigurationError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidAssumption { field, reason: "must not be negative" })
    }
}

pub(super) fn require_fraction(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidAssumption { field, reason: "must be within `[0, 1]`" })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::price::KilowattPrice;

    #[test]
    fn test_partial_override() {
        let assumptions: Assumptions = toml::from_str(
            r"
            [generation]
            loss_factor = 1.25

            [cost]
            off_grid_rate_per_kwp = 4200.0

            [finance]
            horizon_years = 20
            ",
        )
        .unwrap();
        assert_abs_diff_eq!(assumptions.generation.loss_factor, 1.25);
        assert_eq!(
            assumptions.generation.panel_rating,
            GenerationAssumptions::default().panel_rating,
        );
        assert_eq!(assumptions.cost.off_grid_rate, KilowattPrice(4200.0));
        assert_eq!(assumptions.cost.grid_tied_rate, KilowattPrice(4200.0));
        assert_eq!(assumptions.finance.horizon_years, 20);
        assert_eq!(assumptions.tariff, TariffAssumptions::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(toml::from_str::<Assumptions>("").unwrap(), Assumptions::default());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Assumptions::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_panel_rating_is_rejected() {
        let assumptions: Assumptions =
            toml::from_str("[generation]\npanel_rating_kw = 0.0\n").unwrap();
        assert_eq!(
            assumptions.validate(),
            Err(ConfigurationError::InvalidAssumption {
                field: "generation.panel_rating_kw",
                reason: "must be positive",
            }),
        );
    }

    #[test]
    fn test_read_from_validates() {
        let path = std::env::temp_dir().join("solar-sizer-test-zero-yield.toml");
        fs::write(&path, "[generation]\nmonthly_yield_kwh_per_kwp = 0.0\n").unwrap();
        let error = Assumptions::read_from(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            error.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::InvalidAssumption {
                field: "generation.monthly_yield_kwh_per_kwp",
                reason: "must be positive",
            }),
        );
    }

    #[test]
    fn test_read_error_names_the_file() {
        let error = Assumptions::read_from("does/not/exist.toml").unwrap_err();
        assert!(format!("{error:#}").contains("does/not/exist.toml"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(toml::from_str::<Assumptions>("[generation]\nloss = 1.3\n").is_err());
    }
}
