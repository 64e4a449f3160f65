//! Upstream access for the query builders.
//!
//! [`Fetch`] is the single capability the builders depend on: one HTTP GET
//! returning a JSON body. [`HttpFetcher`] implements it with `reqwest`;
//! [`OpenMeteoClient`] pairs a fetcher with the endpoint table.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::builders::{
    ArchiveQuery, ForecastQuery, HistoricalForecastQuery, PreviousRunsQuery, QueryBuilder,
};
use crate::endpoints::Endpoints;
use crate::errors::MeteoError;
use crate::query::QueryParameters;

/// Issues one GET against `base` with `params` and returns the JSON body.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get_json(&self, base: &str, params: &QueryParameters) -> Result<Value, MeteoError>;
}

/// `reqwest`-backed [`Fetch`].
///
/// No timeout is set unless one is given explicitly. Nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, MeteoError> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, MeteoError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("open-meteo-mcp/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get_json(&self, base: &str, params: &QueryParameters) -> Result<Value, MeteoError> {
        let url = params.to_url(base)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = error_body(response.text().await);
            debug!("Upstream answered {}: {}", status, body);
            return Err(MeteoError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MeteoError::Decode(e.to_string()))
    }
}

/// The four Open-Meteo operations over any [`Fetch`].
#[derive(Debug, Clone)]
pub struct OpenMeteoClient<F> {
    fetcher: F,
    endpoints: Endpoints,
}

impl<F: Fetch> OpenMeteoClient<F> {
    pub fn new(fetcher: F, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Builds the query (failing before any I/O) and fetches it.
    pub async fn execute<Q: QueryBuilder + Sync>(&self, query: &Q) -> Result<Value, MeteoError> {
        let params = query.build()?;
        let base = self.endpoints.url(query.endpoint());
        debug!("Calling {} endpoint with {} parameters", query.endpoint(), params.len());
        self.fetcher.get_json(base, &params).await
    }

    pub async fn get_forecast(&self, query: &ForecastQuery) -> Result<Value, MeteoError> {
        self.execute(query).await
    }

    pub async fn get_historical_forecast(
        &self,
        query: &HistoricalForecastQuery,
    ) -> Result<Value, MeteoError> {
        self.execute(query).await
    }

    pub async fn get_previous_model_runs(
        &self,
        query: &PreviousRunsQuery,
    ) -> Result<Value, MeteoError> {
        self.execute(query).await
    }

    pub async fn get_historical_weather(&self, query: &ArchiveQuery) -> Result<Value, MeteoError> {
        self.execute(query).await
    }
}

/// Body of a non-2xx response. A failed read leaves the body empty so the
/// status still reaches the caller.
fn error_body<E: fmt::Display>(read: Result<String, E>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            debug!("Failed to read upstream error body: {}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_keeps_text() {
        let read: Result<String, String> = Ok("{\"reason\":\"bad\"}".to_string());
        assert_eq!(error_body(read), "{\"reason\":\"bad\"}");
    }

    #[test]
    fn test_error_body_read_failure_is_empty() {
        let read: Result<String, String> = Err("connection reset".to_string());
        assert_eq!(error_body(read), "");
    }
}
