//! Query building and upstream access for the Open-Meteo weather APIs.
//!
//! Every operation validates its arguments, assembles query parameters for
//! one of four endpoints and issues a single GET. Upstream JSON is returned
//! unmodified.

pub mod builders;
pub mod client;
pub mod endpoints;
pub mod errors;
pub mod prompts;
pub mod query;
pub mod variables;

pub use builders::{
    ArchiveQuery, Coordinate, DateRange, ForecastQuery, HistoricalForecastQuery,
    PreviousRunsQuery, QueryBuilder,
};
pub use client::{Fetch, HttpFetcher, OpenMeteoClient};
pub use endpoints::{Endpoint, Endpoints};
pub use errors::MeteoError;
pub use query::{QueryParameters, QueryValue};
pub use variables::VariableList;
