use crate::config::Endpoints;
use crate::error::WeatherError;
use crate::fetch::Fetcher;
use crate::format;
use crate::model::{CurrentReading, SevenDayForecast, TodayForecast};
use crate::parse;

/// The three fetch-parse-format pipelines behind the MCP tools.
///
/// Stateless apart from the shared HTTP client: every call re-fetches live
/// data, and concurrent invocations never contend.
#[derive(Debug, Clone)]
pub struct WeatherService {
    fetcher: Fetcher,
    endpoints: Endpoints,
}

impl WeatherService {
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self { fetcher: Fetcher::new(endpoints.timeout), endpoints }
    }

    /// Typed pipeline: realtime bulletin.
    pub async fn current_weather(&self) -> Result<CurrentReading, WeatherError> {
        let body = self.fetcher.fetch(&self.endpoints.current).await?;
        Ok(parse::current::parse(&body)?)
    }

    /// Typed pipeline: today's forecast.
    pub async fn today_forecast(&self) -> Result<TodayForecast, WeatherError> {
        let body = self.fetcher.fetch(&self.endpoints.today_forecast).await?;
        Ok(parse::today::parse(&body)?)
    }

    /// Typed pipeline: 7-day feed.
    pub async fn seven_day_forecast(&self) -> Result<SevenDayForecast, WeatherError> {
        let body = self.fetcher.fetch(&self.endpoints.seven_day_forecast).await?;
        Ok(parse::seven_day::parse(&body)?)
    }

    /// Tool-boundary pipeline: always yields a readable text block. Fetch
    /// and parse failures become the fixed unavailable-data messages, never
    /// an error the framework has to render.
    pub async fn current_weather_report(&self) -> String {
        match self.current_weather().await {
            Ok(reading) => format::current_weather(&reading),
            Err(err) => unavailable("realtime", err, format::CURRENT_UNAVAILABLE),
        }
    }

    pub async fn today_forecast_report(&self) -> String {
        match self.today_forecast().await {
            Ok(forecast) => format::today_forecast(&forecast),
            Err(err) => unavailable("today-forecast", err, format::TODAY_UNAVAILABLE),
        }
    }

    pub async fn seven_day_forecast_report(&self) -> String {
        match self.seven_day_forecast().await {
            Ok(forecast) => format::seven_day_forecast(&forecast),
            Err(err) => unavailable("7-day-forecast", err, format::SEVEN_DAY_UNAVAILABLE),
        }
    }
}

impl Default for WeatherService {
    fn default() -> Self {
        Self::new()
    }
}

fn unavailable(product: &str, err: WeatherError, fetch_message: &str) -> String {
    match err {
        WeatherError::Fetch(e) => {
            tracing::warn!(product, error = %e, "weather fetch failed");
            fetch_message.to_string()
        }
        WeatherError::Parse(e) => {
            tracing::warn!(product, error = %e, "upstream document was not valid XML");
            format::MALFORMED_DATA.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoints(base: &str) -> Endpoints {
        Endpoints {
            current: format!("{base}/c_actual_brief.xml"),
            today_forecast: format!("{base}/c_forecast.xml"),
            seven_day_forecast: format!("{base}/c_WForecast7days_rss.xml"),
            timeout: Duration::from_secs(2),
        }
    }

    async fn mount(server: &MockServer, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn current_report_contains_all_values_verbatim() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/c_actual_brief.xml",
            r#"<ActualWeatherBrief>
                <SysPubdate>2026-08-27 15:00</SysPubdate>
                <Temperature><Value>23.5</Value></Temperature>
                <Humidity><Value>78</Value></Humidity>
                <WindSpeed><Value>12</Value></WindSpeed>
                <WindDirection><WindDescription>東風</WindDescription></WindDirection>
            </ActualWeatherBrief>"#,
        )
        .await;

        let service = WeatherService::with_endpoints(endpoints(&server.uri()));
        let report = service.current_weather_report().await;

        for value in ["2026-08-27 15:00", "23.5", "78", "12", "東風"] {
            assert!(report.contains(value), "missing {value} in {report}");
        }
        assert!(!report.contains(format::UNAVAILABLE_VALUE));
    }

    #[tokio::test]
    async fn current_report_renders_sentinel_for_absent_wind_direction() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/c_actual_brief.xml",
            r#"<ActualWeatherBrief>
                <SysPubdate>2026-08-27 15:00</SysPubdate>
                <Temperature><Value>23.5</Value></Temperature>
                <Humidity><Value>78</Value></Humidity>
                <WindSpeed><Value>12</Value></WindSpeed>
            </ActualWeatherBrief>"#,
        )
        .await;

        let service = WeatherService::with_endpoints(endpoints(&server.uri()));
        let report = service.current_weather_report().await;

        assert!(report.contains("風向: 暫無資料"));
        for value in ["2026-08-27 15:00", "23.5", "78", "12"] {
            assert!(report.contains(value), "missing {value} in {report}");
        }
    }

    #[tokio::test]
    async fn fetch_failure_becomes_fixed_unavailable_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let service = WeatherService::with_endpoints(endpoints(&server.uri()));

        assert_eq!(service.current_weather_report().await, format::CURRENT_UNAVAILABLE);
        assert_eq!(service.today_forecast_report().await, format::TODAY_UNAVAILABLE);
        assert_eq!(
            service.seven_day_forecast_report().await,
            format::SEVEN_DAY_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn malformed_body_becomes_fixed_format_error_message() {
        let server = MockServer::start().await;
        mount(&server, "/c_forecast.xml", "this is not xml <<<").await;

        let service = WeatherService::with_endpoints(endpoints(&server.uri()));
        assert_eq!(service.today_forecast_report().await, format::MALFORMED_DATA);
    }

    #[tokio::test]
    async fn seven_day_report_handles_short_feed() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/c_WForecast7days_rss.xml",
            "<rss><channel>\
             <GeneralSituation>天晴。</GeneralSituation>\
             <item><ValidFor>8月28日</ValidFor><TemperatureMin>24</TemperatureMin>\
             <TemperatureMax>29</TemperatureMax><HumidityMin>60</HumidityMin>\
             <HumidityMax>95</HumidityMax><WeatherDescription>天晴。</WeatherDescription></item>\
             <item><ValidFor>8月29日</ValidFor><WeatherDescription>多雲。</WeatherDescription></item>\
             </channel></rss>",
        )
        .await;

        let service = WeatherService::with_endpoints(endpoints(&server.uri()));
        let report = service.seven_day_forecast_report().await;

        assert!(report.contains("8月28日預測:"));
        assert!(report.contains("8月29日預測:"));
        assert!(report.contains("溫度: 暫無資料 至 暫無資料"));
    }

    #[tokio::test]
    async fn same_upstream_content_yields_identical_reports() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/c_actual_brief.xml",
            "<ActualWeatherBrief><Temperature><Value>23.5</Value></Temperature></ActualWeatherBrief>",
        )
        .await;

        let service = WeatherService::with_endpoints(endpoints(&server.uri()));
        let first = service.current_weather_report().await;
        let second = service.current_weather_report().await;

        assert_eq!(first, second);
    }
}
