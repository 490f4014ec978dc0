mod household;
mod installation;
mod size;
mod vehicle;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use solar_sizer::{catalog::Catalog, core::Assumptions, prelude::*, quantity::energy::KilowattHours};

pub use self::size::SizeArgs;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub reference_data: ReferenceDataArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Size an installation and project its returns.
    #[clap(name = "size")]
    Size(Box<SizeArgs>),

    /// Print the battery chemistries and vehicle models.
    #[clap(name = "catalog")]
    Catalog,

    /// Suggest the grid connection phase for the consumption.
    #[clap(name = "suggest-phase")]
    SuggestPhase(SuggestPhaseArgs),
}

#[derive(Parser)]
pub struct ReferenceDataArgs {
    /// TOML file with battery chemistries and vehicle models, merged over the built-in ones
    /// by section.
    #[clap(long = "catalog", env = "CATALOG_PATH", global = true)]
    pub catalog_path: Option<PathBuf>,

    /// TOML file overriding the physical and commercial constants.
    #[clap(long = "assumptions", env = "ASSUMPTIONS_PATH", global = true)]
    pub assumptions_path: Option<PathBuf>,
}

impl ReferenceDataArgs {
    pub fn catalog(&self) -> Result<Catalog> {
        self.catalog_path.as_ref().map_or_else(|| Ok(Catalog::default()), Catalog::read_from)
    }

    pub fn assumptions(&self) -> Result<Assumptions> {
        self.assumptions_path
            .as_ref()
            .map_or_else(|| Ok(Assumptions::default()), Assumptions::read_from)
    }
}

#[derive(Parser)]
pub struct SuggestPhaseArgs {
    /// Monthly consumption in kilowatt-hours.
    #[clap(long = "consumption-kwh", env = "CONSUMPTION_KWH")]
    pub monthly_consumption: KilowattHours,
}

/// Fraction in the `0.0..=1.0` range.
fn parse_fraction(value: &str) -> Result<f64> {
    let fraction: f64 = value.parse()?;
    ensure!((0.0..=1.0).contains(&fraction), "`{value}` is not within 0.0..=1.0");
    Ok(fraction)
}
