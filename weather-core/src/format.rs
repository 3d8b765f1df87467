//! Rendering of parsed records into the assistant-facing text blocks.
//!
//! Pure string assembly, fixed Traditional-Chinese layout. These functions
//! never fail: an absent field renders the sentinel in place so the output
//! is always well-formed.

use crate::model::{CurrentReading, SevenDayForecast, TodayForecast};

/// Placeholder rendered when a field is absent from the upstream document.
pub const UNAVAILABLE_VALUE: &str = "暫無資料";

/// Fixed tool-level message when the realtime bulletin cannot be fetched.
pub const CURRENT_UNAVAILABLE: &str = "無法獲取澳門實時天氣數據 (連接失敗)。";
/// Fixed tool-level message when the today forecast cannot be fetched.
pub const TODAY_UNAVAILABLE: &str = "無法獲取澳門今日預測數據。";
/// Fixed tool-level message when the 7-day feed cannot be fetched.
pub const SEVEN_DAY_UNAVAILABLE: &str = "無法獲取澳門7天預測數據。";
/// Fixed tool-level message when an upstream body is not parseable XML.
pub const MALFORMED_DATA: &str = "數據格式錯誤 (非 XML)。";

const NO_FORECAST_ITEMS: &str = "未找到預報條目。";

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNAVAILABLE_VALUE)
}

fn with_unit(value: &Option<String>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v}{unit}"),
        None => UNAVAILABLE_VALUE.to_string(),
    }
}

pub fn current_weather(reading: &CurrentReading) -> String {
    [
        format!("更新時間: {}", text(&reading.update_time)),
        format!("當前溫度: {}", with_unit(&reading.temperature_celsius, "°C")),
        format!("相對濕度: {}", with_unit(&reading.humidity_percent, "%")),
        format!("風速: {}", with_unit(&reading.wind_speed_kmh, " km/h")),
        format!("風向: {}", text(&reading.wind_direction)),
    ]
    .join("\n")
}

pub fn today_forecast(forecast: &TodayForecast) -> String {
    format!(
        "今日日期: {}\n天氣形勢: {}\n今日天氣概況:\n{}",
        text(&forecast.date),
        text(&forecast.general_situation),
        text(&forecast.forecast_summary),
    )
}

pub fn seven_day_forecast(forecast: &SevenDayForecast) -> String {
    let mut out = format!("天氣概況: {}\n", text(&forecast.general_situation));

    if forecast.days.is_empty() {
        out.push_str(NO_FORECAST_ITEMS);
        return out;
    }

    for day in &forecast.days {
        out.push('\n');
        out.push_str(&format!(
            "{}預測:\n溫度: {} 至 {}\n濕度: {} 至 {}\n{}\n",
            text(&day.date),
            with_unit(&day.temperature_min, "°C"),
            with_unit(&day.temperature_max, "°C"),
            with_unit(&day.humidity_min, "%"),
            with_unit(&day.humidity_max, "%"),
            text(&day.description),
        ));
    }

    out
}
