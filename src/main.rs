use clap::Parser;
use event_getter::core::ConfigProvider;
use event_getter::config::cli::report_setup_error;
use event_getter::utils::logger;
use event_getter::{CliConfig, QueryDispatcher, ReqwestFetcher, StdoutSink, TomlConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 讀取設定 (未指定時使用預設端點)
    let config = match TomlConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, Default::default());
            report_setup_error("Configuration validation", &e, &mut StdoutSink::new())?;
            return Ok(());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_format());

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Resolved config: {:?}", config);

    let fetcher = match ReqwestFetcher::new(config.request_timeout()) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            report_setup_error("HTTP client setup", &e, &mut StdoutSink::new())?;
            return Ok(());
        }
    };
    let dispatcher = QueryDispatcher::new(fetcher, config);
    let mut sink = StdoutSink::new();

    let report = dispatcher.run(&cli.args, &mut sink).await?;

    let failed = report.failed_count();
    if failed > 0 {
        tracing::warn!(
            "{} of {} services did not return a body",
            failed,
            report.results().len()
        );
    }

    Ok(())
}
