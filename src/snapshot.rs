use chrono::{DateTime, Local};
use serde::Serialize;
use solar_sizer::{
    core::{SizingRequest, SizingResult},
    prelude::*,
};

/// Timestamped request together with its result, ready to be stored alongside a lead.
#[must_use]
#[derive(Serialize)]
pub struct Snapshot<'a> {
    pub timestamp: DateTime<Local>,
    pub request: &'a SizingRequest,
    pub result: &'a SizingResult,
}

impl<'a> Snapshot<'a> {
    pub fn new(request: &'a SizingRequest, result: &'a SizingResult) -> Self {
        Self { timestamp: Local::now(), request, result }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize the snapshot")
    }
}
