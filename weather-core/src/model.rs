use serde::{Deserialize, Serialize};

/// One realtime observation from the hourly bulletin.
///
/// Every field is the upstream text verbatim; no numeric parsing is done so
/// the bureau's own formatting survives all the way to the assistant.
/// `None` means the element was absent from an otherwise valid document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentReading {
    pub update_time: Option<String>,
    pub temperature_celsius: Option<String>,
    pub humidity_percent: Option<String>,
    pub wind_speed_kmh: Option<String>,
    pub wind_direction: Option<String>,
}

/// Today's forecast: date, general weather situation, and the summary text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayForecast {
    pub date: Option<String>,
    pub general_situation: Option<String>,
    pub forecast_summary: Option<String>,
}

/// One day out of the 7-day feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: Option<String>,
    pub temperature_min: Option<String>,
    pub temperature_max: Option<String>,
    pub humidity_min: Option<String>,
    pub humidity_max: Option<String>,
    pub description: Option<String>,
}

/// The 7-day feed: a feed-level situation text plus per-day entries in
/// upstream order. The feed usually carries 7 days but the length is
/// whatever upstream sent; short feeds are not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SevenDayForecast {
    pub general_situation: Option<String>,
    pub days: Vec<DailyForecast>,
}
