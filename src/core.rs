//! The sizing pipeline and its stages.
//!
//! Every stage is a pure function of its inputs: tariff and vehicle load feed the generation
//! sizer, whose output feeds the storage sizers and the cost aggregator, and finally
//! the financial projector.

pub mod assumptions;
pub mod battery_bank;
pub mod connection;
pub mod cost;
pub mod finance;
pub mod generation;
pub mod household;
pub mod off_grid;
pub mod pipeline;
pub mod tariff;
pub mod topology;
pub mod vehicle;

pub use self::{
    assumptions::Assumptions,
    household::HouseholdProfile,
    pipeline::{SizingRequest, SizingResult, Storage, size},
    topology::{Installation, Topology},
};
