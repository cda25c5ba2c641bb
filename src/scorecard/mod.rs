//! Typed access to the delirium scorecard statistics endpoints.

pub mod client;
pub mod models;

pub use client::ScorecardClient;
pub use models::{
    DeliriumRate, DemographicItem, DemographicValue, PatientDemographics, Quarter,
    TimeSeriesPoint,
};
