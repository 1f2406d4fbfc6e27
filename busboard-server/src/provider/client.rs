//! OV API HTTP client.
//!
//! Fetches departure documents for individual timing points or a whole
//! stop area and converts them to the domain model.

use tracing::debug;

use crate::board::StopSelection;
use crate::domain::DepartureSet;

use super::DepartureProvider;
use super::convert::convert_documents;
use super::error::ProviderError;
use super::types::{StopAreaResponse, TimingPointResponse};

/// Default base URL for the OV API.
const DEFAULT_BASE_URL: &str = "https://v0.ovapi.nl";

/// Configuration for the OV API client.
#[derive(Debug, Clone)]
pub struct OvApiConfig {
    /// Base URL (defaults to the public OV API).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Query the departures-only endpoint variant.
    pub departures_only: bool,
    /// Prefix stop names with their town.
    pub show_town_name: bool,
}

impl Default for OvApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            departures_only: true,
            show_town_name: false,
        }
    }
}

impl OvApiConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_departures_only(mut self, departures_only: bool) -> Self {
        self.departures_only = departures_only;
        self
    }

    pub fn with_show_town_name(mut self, show_town_name: bool) -> Self {
        self.show_town_name = show_town_name;
        self
    }
}

/// OV API client polling a fixed stop selection.
#[derive(Debug, Clone)]
pub struct OvApiClient {
    http: reqwest::Client,
    base_url: String,
    selection: StopSelection,
    departures_only: bool,
    show_town_name: bool,
}

impl OvApiClient {
    pub fn new(config: OvApiConfig, selection: StopSelection) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            selection,
            departures_only: config.departures_only,
            show_town_name: config.show_town_name,
        })
    }

    /// The endpoint path for the configured selection.
    ///
    /// Timing points: `tpc/{code,code,...}`; stop area:
    /// `stopareacode/{code}`; both with a `/departures` suffix when only
    /// departures are wanted.
    fn endpoint(&self) -> String {
        let mut path = match &self.selection {
            StopSelection::TimingPoints(codes) => {
                format!("{}/tpc/{}", self.base_url, codes.join(","))
            }
            StopSelection::StopArea(code) => {
                format!("{}/stopareacode/{}", self.base_url, code)
            }
        };
        if self.departures_only {
            path.push_str("/departures");
        }
        path
    }

    async fn fetch_body(&self) -> Result<String, ProviderError> {
        let url = self.endpoint();
        debug!(%url, "fetching departures");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }
        Ok(response.text().await?)
    }

    async fn fetch_departures(&self) -> Result<DepartureSet, ProviderError> {
        let body = self.fetch_body().await?;

        let documents = match &self.selection {
            StopSelection::TimingPoints(_) => {
                let response: TimingPointResponse =
                    serde_json::from_str(&body).map_err(|e| ProviderError::Json {
                        message: e.to_string(),
                        body: Some(truncate(&body)),
                    })?;
                response.into_values().collect::<Vec<_>>()
            }
            StopSelection::StopArea(_) => {
                let response: StopAreaResponse =
                    serde_json::from_str(&body).map_err(|e| ProviderError::Json {
                        message: e.to_string(),
                        body: Some(truncate(&body)),
                    })?;
                response
                    .into_values()
                    .flat_map(|area| area.into_values())
                    .collect()
            }
        };

        Ok(convert_documents(documents, self.show_town_name))
    }
}

impl DepartureProvider for OvApiClient {
    async fn fetch(&self) -> Result<DepartureSet, ProviderError> {
        self.fetch_departures().await
    }
}

/// Cap error bodies so a giant payload does not flood the logs.
fn truncate(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &body[..end])
    }
}
