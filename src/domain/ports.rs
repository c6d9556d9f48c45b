use crate::domain::model::{HttpReply, KeywordEncoding};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn doorkeeper_endpoint(&self) -> &str;
    fn connpass_endpoint(&self) -> &str;
    fn keyword_encoding(&self) -> KeywordEncoding;
    fn result_count(&self) -> u32;
    fn request_timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// 發出 GET，回傳狀態碼與本文 (非 200 時本文為空)
    async fn get(&self, url: &str) -> Result<HttpReply>;
}

/// 查詢結果的輸出目的地
pub trait OutputSink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
}
