mod cli;
mod snapshot;
mod tables;

use clap::{Parser, crate_version};
use solar_sizer::{core::connection::ConnectionPhase, prelude::*};

use crate::{
    cli::{Args, Command},
    tables::{build_battery_catalog_table, build_vehicle_catalog_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    match args.command {
        Command::Size(size_args) => {
            let catalog = args.reference_data.catalog()?;
            let assumptions = args.reference_data.assumptions()?;
            size_args.run(&catalog, &assumptions)?;
        }
        Command::Catalog => {
            let catalog = args.reference_data.catalog()?;
            println!("{}", build_battery_catalog_table(&catalog));
            println!("{}", build_vehicle_catalog_table(&catalog));
        }
        Command::SuggestPhase(suggest_args) => {
            let assumptions = args.reference_data.assumptions()?;
            let phase =
                ConnectionPhase::suggest(suggest_args.monthly_consumption, &assumptions.connection);
            println!("{phase}");
        }
    }

    info!("done!");
    Ok(())
}
