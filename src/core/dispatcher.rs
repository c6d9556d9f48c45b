use crate::core::{calendar, query};
use crate::domain::model::{DispatchReport, EventService, FetchOutcome, Invocation, ServiceResult};
use crate::domain::ports::{ConfigProvider, HttpFetcher, OutputSink};
use crate::utils::error::{EventGetterError, Result};
use crate::utils::validation::{parse_month, parse_year};

pub struct QueryDispatcher<F: HttpFetcher, C: ConfigProvider> {
    fetcher: F,
    config: C,
}

impl<F: HttpFetcher, C: ConfigProvider> QueryDispatcher<F, C> {
    pub fn new(fetcher: F, config: C) -> Self {
        Self { fetcher, config }
    }

    /// 檢查啟動參數：數量、年、月
    pub fn prepare(args: &[String]) -> Result<Invocation> {
        let [year, month, keyword] = args else {
            return Err(EventGetterError::ArgumentCountError { count: args.len() });
        };

        let yyyy = parse_year(year)?;
        let mm = parse_month(month)?;
        let last_day = calendar::last_day_of_month(yyyy, mm)?;

        Ok(Invocation {
            year: year.clone(),
            month: mm,
            keyword: keyword.clone(),
            last_day,
        })
    }

    pub fn urls(&self, invocation: &Invocation) -> Vec<(EventService, String)> {
        EventService::ORDER
            .iter()
            .map(|&service| (service, query::build_url(service, invocation, &self.config)))
            .collect()
    }

    /// 參數錯誤時只印訊息，不發出請求。之後依序查詢兩個服務並各印一行
    pub async fn run<O: OutputSink>(&self, args: &[String], out: &mut O) -> Result<DispatchReport> {
        let invocation = match Self::prepare(args) {
            Ok(invocation) => invocation,
            Err(e) => {
                tracing::debug!("Rejected arguments: {} ({:?})", e, e.category());
                let message = e.user_friendly_message();
                out.write_line(&message)?;
                return Ok(DispatchReport::Rejected { message });
            }
        };

        tracing::info!(
            "Searching events for {}-{} with keyword '{}'",
            invocation.year,
            invocation.padded_month(),
            invocation.keyword
        );

        let mut results = Vec::with_capacity(EventService::ORDER.len());
        for (service, url) in self.urls(&invocation) {
            let outcome = self.fetch(service, &url).await;
            out.write_line(&outcome.output_line())?;
            results.push(ServiceResult {
                service,
                url,
                outcome,
            });
        }

        Ok(DispatchReport::Completed { results })
    }

    async fn fetch(&self, service: EventService, url: &str) -> FetchOutcome {
        match self.fetcher.get(url).await {
            Ok(reply) if reply.status == 200 => {
                tracing::debug!("{} returned {} bytes", service, reply.body.len());
                FetchOutcome::Body(reply.body)
            }
            Ok(reply) => {
                let e = EventGetterError::HttpStatusError {
                    status: reply.status,
                    url: url.to_string(),
                };
                tracing::warn!("{}: {}", service, e);
                FetchOutcome::Status(reply.status)
            }
            Err(e) => {
                tracing::error!(
                    "❌ {} request failed: {} (Category: {:?}, Severity: {:?})",
                    service,
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                FetchOutcome::Failed(e.to_string())
            }
        }
    }
}
