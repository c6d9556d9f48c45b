use crate::domain::model::{EventService, Invocation, KeywordEncoding};
use crate::domain::ports::ConfigProvider;
use url::form_urlencoded;

pub const DOORKEEPER_ENDPOINT: &str = "https://api.doorkeeper.jp/events/";
pub const CONNPASS_ENDPOINT: &str = "https://connpass.com/api/v1/event/";
pub const DEFAULT_RESULT_COUNT: u32 = 100;

/// 依設定處理關鍵字。`Raw` 保留原字串，`Encoded` 做 URL 編碼
pub fn encode_keyword(keyword: &str, encoding: KeywordEncoding) -> String {
    match encoding {
        KeywordEncoding::Raw => keyword.to_string(),
        KeywordEncoding::Encoded => form_urlencoded::byte_serialize(keyword.as_bytes()).collect(),
    }
}

/// Doorkeeper 用 URL：以當月一日到月底為區間
pub fn doorkeeper_url(endpoint: &str, invocation: &Invocation, encoding: KeywordEncoding) -> String {
    let month = invocation.padded_month();
    format!(
        "{}?locale=ja&sort=starts_at&since={}-{}-01&until={}-{}-{:02}&q={}",
        endpoint,
        invocation.year,
        month,
        invocation.year,
        month,
        invocation.last_day,
        encode_keyword(&invocation.keyword, encoding)
    )
}

/// connpass 用 URL：年月合併為 ym 參數
pub fn connpass_url(
    endpoint: &str,
    invocation: &Invocation,
    encoding: KeywordEncoding,
    count: u32,
) -> String {
    format!(
        "{}?keyword={}&ym={}{}&count={}",
        endpoint,
        encode_keyword(&invocation.keyword, encoding),
        invocation.year,
        invocation.padded_month(),
        count
    )
}

pub fn build_url<C: ConfigProvider + ?Sized>(
    service: EventService,
    invocation: &Invocation,
    config: &C,
) -> String {
    match service {
        EventService::Doorkeeper => doorkeeper_url(
            config.doorkeeper_endpoint(),
            invocation,
            config.keyword_encoding(),
        ),
        EventService::Connpass => connpass_url(
            config.connpass_endpoint(),
            invocation,
            config.keyword_encoding(),
            config.result_count(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(year: &str, month: u32, last_day: u32, keyword: &str) -> Invocation {
        Invocation {
            year: year.to_string(),
            month,
            keyword: keyword.to_string(),
            last_day,
        }
    }

    #[test]
    fn test_doorkeeper_url() {
        let inv = invocation("2024", 3, 31, "meetup");
        assert_eq!(
            doorkeeper_url(DOORKEEPER_ENDPOINT, &inv, KeywordEncoding::Encoded),
            "https://api.doorkeeper.jp/events/?locale=ja&sort=starts_at&since=2024-03-01&until=2024-03-31&q=meetup"
        );
    }

    #[test]
    fn test_connpass_url() {
        let inv = invocation("2024", 3, 31, "meetup");
        assert_eq!(
            connpass_url(
                CONNPASS_ENDPOINT,
                &inv,
                KeywordEncoding::Encoded,
                DEFAULT_RESULT_COUNT
            ),
            "https://connpass.com/api/v1/event/?keyword=meetup&ym=202403&count=100"
        );
    }

    #[test]
    fn test_two_digit_month_passes_through() {
        let inv = invocation("2023", 11, 30, "rust");
        let url = doorkeeper_url(DOORKEEPER_ENDPOINT, &inv, KeywordEncoding::Raw);
        assert!(url.contains("since=2023-11-01&until=2023-11-30"));
    }

    #[test]
    fn test_keyword_encoding_policies() {
        assert_eq!(encode_keyword("a&b c", KeywordEncoding::Raw), "a&b c");
        assert_eq!(encode_keyword("a&b c", KeywordEncoding::Encoded), "a%26b+c");
        assert_eq!(
            encode_keyword("勉強会", KeywordEncoding::Encoded),
            "%E5%8B%89%E5%BC%B7%E4%BC%9A"
        );
    }

    #[test]
    fn test_raw_keyword_is_embedded_unescaped() {
        let inv = invocation("2024", 5, 31, "go&rust");
        let url = connpass_url(CONNPASS_ENDPOINT, &inv, KeywordEncoding::Raw, 100);
        assert_eq!(
            url,
            "https://connpass.com/api/v1/event/?keyword=go&rust&ym=202405&count=100"
        );
    }
}
