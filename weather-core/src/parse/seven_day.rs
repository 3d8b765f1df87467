use roxmltree::Document;

use super::find_field;
use crate::error::ParseError;
use crate::model::{DailyForecast, SevenDayForecast};

/// Parse the 7-day feed (`c_WForecast7days_rss.xml`).
///
/// The feed carries one `item` per day. Items are taken in document order,
/// never reordered or deduplicated, and the count is whatever upstream
/// sent — a short feed parses fine. A field missing from one item leaves
/// that field `None` without dropping the item.
pub fn parse(xml: &str) -> Result<SevenDayForecast, ParseError> {
    let doc = Document::parse(xml)?;
    let root = doc.root();

    let general_situation = find_field(root, "GeneralSituation");

    let days = root
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name("item"))
        .map(|item| DailyForecast {
            date: find_field(item, "ValidFor"),
            temperature_min: find_field(item, "TemperatureMin"),
            temperature_max: find_field(item, "TemperatureMax"),
            humidity_min: find_field(item, "HumidityMin"),
            humidity_max: find_field(item, "HumidityMax"),
            description: find_field(item, "WeatherDescription"),
        })
        .collect();

    Ok(SevenDayForecast { general_situation, days })
}
