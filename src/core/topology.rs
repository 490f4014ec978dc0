use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::{battery_bank::BatteryBankConfig, off_grid::OffGridConfig};

/// Installation architecture.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Topology {
    /// Grid-tied, no storage.
    #[default]
    GridTied,

    /// Grid-tied with a battery bank for backup.
    Hybrid,

    /// Fully islanded.
    OffGrid,
}

impl Topology {
    pub const fn is_grid_connected(self) -> bool {
        match self {
            Self::GridTied | Self::Hybrid => true,
            Self::OffGrid => false,
        }
    }
}

impl Display for Topology {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GridTied => write!(f, "Grid-tied"),
            Self::Hybrid => write!(f, "Hybrid"),
            Self::OffGrid => write!(f, "Off-grid"),
        }
    }
}

/// Topology together with the configuration only that topology needs.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "topology", rename_all = "kebab-case")]
pub enum Installation {
    #[default]
    GridTied,
    Hybrid(BatteryBankConfig),
    OffGrid(OffGridConfig),
}

impl Installation {
    pub const fn topology(&self) -> Topology {
        match self {
            Self::GridTied => Topology::GridTied,
            Self::Hybrid(_) => Topology::Hybrid,
            Self::OffGrid(_) => Topology::OffGrid,
        }
    }
}
