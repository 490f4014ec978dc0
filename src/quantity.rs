#[macro_use]
mod macros;

pub mod area;
pub mod cost;
pub mod distance;
pub mod energy;
pub mod power;
pub mod price;
pub mod time;
pub mod voltage;
