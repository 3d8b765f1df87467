//! MCP tool surface over the weather pipelines.
//!
//! The framework owns routing, sessions and serialization; this module only
//! registers the three argument-less tools and picks a transport.

use std::sync::Arc;

use macau_weather_core::WeatherService;
use rmcp::{
    handler::server::router::tool::ToolRouter,
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};

#[derive(Clone)]
pub struct WeatherServer {
    service: Arc<WeatherService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WeatherServer {
    pub fn new() -> Self {
        Self {
            service: Arc::new(WeatherService::new()),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "獲取澳門當前「整點實況」天氣數據。包含：溫度、濕度、風向、風速。")]
    async fn get_current_weather(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            self.service.current_weather_report().await,
        )]))
    }

    #[tool(description = "獲取澳門「今日預測」與天氣概述。包含：天氣形勢、今日天氣概況。")]
    async fn get_today_forecast(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            self.service.today_forecast_report().await,
        )]))
    }

    #[tool(description = "獲取澳門「7天預測」與天氣概述。包含：逐日溫度範圍、濕度範圍及天氣描述。")]
    async fn get_seven_day_forecast(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            self.service.seven_day_forecast_report().await,
        )]))
    }
}

#[tool_handler]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::new(ServerCapabilities::builder().enable_tools().build());
        info.protocol_version = ProtocolVersion::V_2024_11_05;
        info.server_info = Implementation::from_build_env();
        info.instructions = Some(
            "澳門氣象局 (SMG) 天氣服務。工具：get_current_weather、get_today_forecast、get_seven_day_forecast。"
                .to_string(),
        );
        info
    }
}

impl Default for WeatherServer {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn serve_stdio() -> anyhow::Result<()> {
    tracing::info!("serving MCP over stdio");

    let service = WeatherServer::new().serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

pub async fn serve_http(host: &str, port: u16) -> anyhow::Result<()> {
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    };

    let service = StreamableHttpService::new(
        || Ok(WeatherServer::new()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("MCP server listening on http://{host}:{port}/mcp");

    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_info_advertises_tools() {
        let server = WeatherServer::new();
        let info = server.get_info();

        assert_eq!(info.protocol_version, ProtocolVersion::V_2024_11_05);
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn router_registers_all_three_tools() {
        let router = WeatherServer::tool_router();

        assert!(router.has_route("get_current_weather"));
        assert!(router.has_route("get_today_forecast"));
        assert!(router.has_route("get_seven_day_forecast"));
    }
}
