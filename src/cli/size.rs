use clap::{Parser, ValueEnum};
use solar_sizer::{
    catalog::Catalog,
    core::{Assumptions, SizingRequest, size},
    prelude::*,
};

use crate::{
    cli::{household::HouseholdArgs, installation::InstallationArgs, vehicle::VehicleArgs},
    snapshot::Snapshot,
    tables::{build_cash_flow_table, build_costs_table, build_storage_table, build_summary_table},
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal tables.
    #[default]
    Table,

    /// Timestamped request and result.
    Json,
}

#[derive(Parser)]
pub struct SizeArgs {
    #[clap(flatten)]
    pub household: HouseholdArgs,

    #[clap(flatten)]
    pub vehicle: VehicleArgs,

    #[clap(flatten)]
    pub installation: InstallationArgs,

    #[clap(long, value_enum, default_value_t = OutputFormat::Table, env = "OUTPUT_FORMAT")]
    pub format: OutputFormat,

    /// Also print the cumulative position for every year of the horizon.
    #[clap(long)]
    pub cash_flow: bool,
}

impl SizeArgs {
    #[instrument(skip_all)]
    pub fn run(&self, catalog: &Catalog, assumptions: &Assumptions) -> Result {
        let request = SizingRequest::builder()
            .household(self.household.profile(&assumptions.connection))
            .vehicle(self.vehicle.profile())
            .installation(self.installation.installation())
            .build();
        let result = size(&request, catalog, assumptions)?;

        match self.format {
            OutputFormat::Table => {
                println!("{}", build_summary_table(&result));
                println!("{}", build_costs_table(&result.costs));
                if let Some(table) = build_storage_table(&result.storage) {
                    println!("{table}");
                }
                if self.cash_flow {
                    println!("{}", build_cash_flow_table(&result.finance));
                }
            }
            OutputFormat::Json => {
                println!("{}", Snapshot::new(&request, &result).to_json()?);
            }
        }

        Ok(())
    }
}
