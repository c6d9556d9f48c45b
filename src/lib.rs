pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::StdoutSink, CliConfig};

pub use config::toml_config::TomlConfig;
pub use crate::core::{dispatcher::QueryDispatcher, fetcher::ReqwestFetcher};
pub use utils::error::{EventGetterError, Result};
