use clap::Parser;
use solar_sizer::{
    core::{
        Installation,
        Topology,
        battery_bank::{BatteryBankConfig, VoltageMode},
        off_grid::OffGridConfig,
    },
    quantity::time::{Days, Hours},
};

use crate::cli::parse_fraction;

#[must_use]
#[derive(Parser)]
pub struct InstallationArgs {
    #[clap(long, value_enum, default_value_t = Topology::GridTied, env = "TOPOLOGY")]
    pub topology: Topology,

    #[clap(flatten)]
    pub battery_bank: BatteryBankArgs,

    #[clap(flatten)]
    pub off_grid: OffGridArgs,
}

impl InstallationArgs {
    /// Pick the configuration the topology needs, the other flags are ignored.
    pub fn installation(&self) -> Installation {
        match self.topology {
            Topology::GridTied => Installation::GridTied,
            Topology::Hybrid => Installation::Hybrid(self.battery_bank.config()),
            Topology::OffGrid => Installation::OffGrid(self.off_grid.config()),
        }
    }
}

/// Hybrid topology only.
#[must_use]
#[derive(Parser)]
pub struct BatteryBankArgs {
    /// Hours the bank must carry the backup load.
    #[clap(id = "battery-autonomy-hours", long = "battery-autonomy-hours", default_value = "8", env = "BATTERY_AUTONOMY_HOURS")]
    pub autonomy: Hours,

    /// Share of the average household load kept running on backup.
    #[clap(
        long = "battery-backup-load",
        default_value = "0.55",
        value_parser = parse_fraction,
        env = "BATTERY_BACKUP_LOAD",
    )]
    pub backup_load_fraction: f64,

    #[clap(long = "battery-chemistry", default_value = "lithium", env = "BATTERY_CHEMISTRY")]
    pub chemistry_id: String,

    /// Requested depth of discharge, clamped to the chemistry maximum.
    #[clap(
        id = "battery-depth-of-discharge",
        long = "battery-depth-of-discharge",
        default_value = "0.8",
        value_parser = parse_fraction,
        env = "BATTERY_DEPTH_OF_DISCHARGE",
    )]
    pub depth_of_discharge: f64,

    #[clap(
        long = "battery-voltage",
        value_enum,
        default_value_t = VoltageMode::Automatic,
        env = "BATTERY_VOLTAGE",
    )]
    pub voltage_mode: VoltageMode,
}

impl BatteryBankArgs {
    fn config(&self) -> BatteryBankConfig {
        BatteryBankConfig::builder()
            .autonomy(self.autonomy)
            .backup_load_fraction(self.backup_load_fraction)
            .chemistry_id(&self.chemistry_id)
            .depth_of_discharge(self.depth_of_discharge)
            .voltage_mode(self.voltage_mode)
            .build()
    }
}

/// Off-grid topology only.
#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct OffGridArgs {
    /// Days without sun the reserve must cover.
    #[clap(id = "off-grid-autonomy-days", long = "off-grid-autonomy-days", default_value = "3", env = "OFF_GRID_AUTONOMY_DAYS")]
    pub autonomy: Days,

    #[clap(
        id = "off-grid-depth-of-discharge",
        long = "off-grid-depth-of-discharge",
        default_value = "0.8",
        value_parser = parse_fraction,
        env = "OFF_GRID_DEPTH_OF_DISCHARGE",
    )]
    pub depth_of_discharge: f64,
}

impl OffGridArgs {
    fn config(self) -> OffGridConfig {
        OffGridConfig::builder()
            .autonomy(self.autonomy)
            .depth_of_discharge(self.depth_of_discharge)
            .build()
    }
}
