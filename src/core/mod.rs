pub mod calendar;
pub mod dispatcher;
pub mod fetcher;
pub mod query;

pub use crate::domain::model::{DispatchReport, EventService, FetchOutcome, Invocation};
pub use crate::domain::ports::{ConfigProvider, HttpFetcher, OutputSink};
pub use crate::utils::error::Result;
