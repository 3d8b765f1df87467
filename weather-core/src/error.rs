use reqwest::StatusCode;
use thiserror::Error;

/// Failure to retrieve an upstream document: either the transport broke
/// (DNS, connection refused, timeout) or the endpoint answered non-2xx.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// The upstream response body is not well-formed XML.
///
/// A missing field inside valid XML is NOT a parse error; parsers degrade
/// those fields to `None` and complete normally.
#[derive(Debug, Error)]
#[error("upstream document is not well-formed XML: {0}")]
pub struct ParseError(#[from] roxmltree::Error);

/// Anything that can go wrong in one fetch-parse pipeline.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
