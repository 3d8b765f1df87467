use roxmltree::Document;

use super::find_field;
use crate::error::ParseError;
use crate::model::TodayForecast;

/// Parse the today-forecast document (`c_forecast.xml`).
///
/// The summary block may contain embedded markup; it is flattened to plain
/// text.
pub fn parse(xml: &str) -> Result<TodayForecast, ParseError> {
    let doc = Document::parse(xml)?;
    let root = doc.root();

    Ok(TodayForecast {
        date: find_field(root, "ValidFor"),
        general_situation: find_field(root, "TodaySituation"),
        forecast_summary: find_field(root, "WeatherDescription"),
    })
}
