use crate::domain::model::HttpReply;
use crate::domain::ports::HttpFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// reqwest 實作的 GET。連線不放回連線池，回應釋放時即關閉
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().pool_max_idle_per_host(0);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpReply> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            return Ok(HttpReply {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        // 依 Content-Type 的 charset 解碼，未指定時為 UTF-8
        let text = response.text().await?;
        Ok(HttpReply {
            status: status.as_u16(),
            body: join_lines(&text),
        })
    }
}

/// 逐行讀取後直接串接，移除所有換行 (\n、\r\n 與單獨的 \r)
pub fn join_lines(text: &str) -> String {
    text.split(['\r', '\n']).collect()
}
