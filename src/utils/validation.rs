use crate::utils::error::{EventGetterError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EventGetterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EventGetterError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EventGetterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(EventGetterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 解析年份參數，只接受整數
pub fn parse_year(value: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .map_err(|_| EventGetterError::InvalidYearError {
            value: value.to_string(),
        })
}

/// 解析月份參數並檢查是否在 1〜12 之間
pub fn parse_month(value: &str) -> Result<u32> {
    let month = value
        .parse::<i32>()
        .map_err(|_| EventGetterError::InvalidMonthError {
            value: value.to_string(),
        })?;

    if !(1..=12).contains(&month) {
        return Err(EventGetterError::MonthOutOfRangeError { value: month });
    }

    Ok(month as u32)
}
