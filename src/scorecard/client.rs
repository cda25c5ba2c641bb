use crate::error::{LucidError, Result};

use super::models::{DeliriumRate, PatientDemographics, TimeSeriesPoint};

const RATES_PATH: &str = "/api/rates";
const TIME_TRENDS_PATH: &str = "/api/time-trends";
const DEMOGRAPHICS_PATH: &str = "/api/demographics";

/// HTTP client for the pre-aggregated scorecard statistics endpoints.
///
/// These endpoints carry no credentials; access control for the rendered
/// dashboard lives in the route guard, not the data layer.
///
/// # Example
/// ```no_run
/// use lucid::scorecard::ScorecardClient;
///
/// # async fn example() -> lucid::error::Result<()> {
/// let client = ScorecardClient::new("http://localhost:8000");
/// for rate in client.delirium_rates().await? {
///     println!("{} {} {}: {:.1}%", rate.ward, rate.quarter, rate.year, rate.rate);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScorecardClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScorecardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Per-ward delirium rates by reporting quarter.
    pub async fn delirium_rates(&self) -> Result<Vec<DeliriumRate>> {
        self.get_json(RATES_PATH).await
    }

    /// Quarterly trend of GIM versus all other wards.
    pub async fn time_trends(&self) -> Result<Vec<TimeSeriesPoint>> {
        self.get_json(TIME_TRENDS_PATH).await
    }

    /// Demographic comparison for the most recent reporting quarter.
    pub async fn patient_demographics(&self) -> Result<PatientDemographics> {
        self.get_json(DEMOGRAPHICS_PATH).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LucidError::api(status.as_u16(), body));
        }
        Ok(resp.json().await?)
    }
}
