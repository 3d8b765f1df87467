use roxmltree::Document;

use super::{find_element, find_field};
use crate::error::ParseError;
use crate::model::CurrentReading;

/// Parse the realtime bulletin (`c_actual_brief.xml`).
///
/// Temperature, humidity and wind speed live in a `Value` child of their
/// named wrapper; the wind direction text sits in `WindDescription`. Any
/// absent element leaves its field `None` — partial data is better than no
/// data.
pub fn parse(xml: &str) -> Result<CurrentReading, ParseError> {
    let doc = Document::parse(xml)?;
    let root = doc.root();

    let nested =
        |outer: &str, inner: &str| find_element(root, outer).and_then(|n| find_field(n, inner));

    Ok(CurrentReading {
        update_time: find_field(root, "SysPubdate"),
        temperature_celsius: nested("Temperature", "Value"),
        humidity_percent: nested("Humidity", "Value"),
        wind_speed_kmh: nested("WindSpeed", "Value"),
        wind_direction: nested("WindDirection", "WindDescription"),
    })
}
