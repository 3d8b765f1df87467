use std::time::Duration;

/// Default upstream request timeout. SMG can be slow to answer from outside
/// Macau, but a hung request must never stall the hosting framework.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream SMG XML endpoints, one per data product, plus the fetch timeout.
///
/// The defaults point at the live bureau feeds; tests swap them for a local
/// mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Realtime weather (hourly observation).
    pub current: String,
    /// Today's forecast and general situation.
    pub today_forecast: String,
    /// 7-day forecast feed.
    pub seven_day_forecast: String,
    /// Per-request timeout for outbound fetches.
    pub timeout: Duration,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            current: "https://xml.smg.gov.mo/c_actual_brief.xml".to_string(),
            today_forecast: "https://xml.smg.gov.mo/c_forecast.xml".to_string(),
            seven_day_forecast: "https://rss.smg.gov.mo/c_WForecast7days_rss.xml".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
