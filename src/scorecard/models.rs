use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Calendar quarter used for scorecard reporting periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

/// One ward's delirium rate for a reporting quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliriumRate {
    pub quarter: Quarter,
    pub year: i32,
    pub rate: f64,
    pub ward: String,
}

/// One point on the delirium-rate trend line: the GIM ward against all other
/// wards combined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub period: String,
    pub gim: f64,
    pub other_wards: f64,
}

/// A single measured value with units and spread.
///
/// `value` and `standard_deviation` are null on the wire when the source
/// data had no measurement; `units` defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicValue {
    pub value: Option<f64>,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub standard_deviation: Option<f64>,
}

/// One demographic measure compared between the recent quarter and the
/// model's training window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicItem {
    pub recent: DemographicValue,
    pub training: DemographicValue,
    pub standard_mean_difference: DemographicValue,
}

/// Patient demographics table keyed by measure name ("Age", "Sex", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientDemographics {
    pub data: HashMap<String, DemographicItem>,
    pub recent_quarter: Quarter,
    pub recent_year: i32,
}
