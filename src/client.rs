use crate::model::Performance;

/// Production endpoint of the schedule feed.
pub const DEFAULT_BASE_URL: &str = "https://staatstheater-augsburg.de/";

/// Fixed resource path of the performance list.
const RESOURCE_PATH: &str = "datenraumkultur";

const USER_AGENT: &str = concat!("spielplan/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the remote schedule feed. One GET, one JSON array.
#[derive(Clone, Debug)]
pub struct ScheduleClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScheduleClient {
    pub fn new(base_url: &str) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full performance list, in server order. Any transport,
    /// status, or decode failure fails the whole fetch; a single malformed
    /// record is not skipped.
    pub async fn get_performances(&self) -> Result<Vec<Performance>, String> {
        let url = format!("{}/{}", self.base_url, RESOURCE_PATH);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        response
            .json::<Vec<Performance>>()
            .await
            .map_err(|e| e.to_string())
    }
}
