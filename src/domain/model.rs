use serde::{Deserialize, Serialize};
use std::fmt;

/// 驗證後的啟動參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// 使用者輸入的年份字串，原樣嵌入 URL
    pub year: String,
    pub month: u32,
    pub keyword: String,
    pub last_day: u32,
}

impl Invocation {
    /// 兩位數的月份字串 (3 -> "03")
    pub fn padded_month(&self) -> String {
        crate::core::calendar::pad_month(self.month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventService {
    Doorkeeper,
    Connpass,
}

impl EventService {
    /// 查詢順序固定為 Doorkeeper → connpass
    pub const ORDER: [EventService; 2] = [EventService::Doorkeeper, EventService::Connpass];
}

impl fmt::Display for EventService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventService::Doorkeeper => write!(f, "doorkeeper"),
            EventService::Connpass => write!(f, "connpass"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordEncoding {
    Raw,
    #[default]
    Encoded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// HTTP 回應：狀態碼與已解碼的本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 200 回應，換行已移除
    Body(String),
    /// 非 200 回應
    Status(u16),
    /// 連線或讀取失敗
    Failed(String),
}

impl FetchOutcome {
    /// 印到標準輸出的那一行
    pub fn output_line(&self) -> String {
        match self {
            FetchOutcome::Body(body) => body.clone(),
            FetchOutcome::Status(status) => status.to_string(),
            FetchOutcome::Failed(_) => String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Body(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResult {
    pub service: EventService,
    pub url: String,
    pub outcome: FetchOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchReport {
    /// 參數錯誤，沒有發出任何請求
    Rejected { message: String },
    Completed { results: Vec<ServiceResult> },
}

impl DispatchReport {
    pub fn results(&self) -> &[ServiceResult] {
        match self {
            DispatchReport::Rejected { .. } => &[],
            DispatchReport::Completed { results } => results,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.results()
            .iter()
            .filter(|r| !r.outcome.is_success())
            .count()
    }
}
