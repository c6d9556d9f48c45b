use crate::core::query::{CONNPASS_ENDPOINT, DEFAULT_RESULT_COUNT, DOORKEEPER_ENDPOINT};
use crate::core::ConfigProvider;
use crate::domain::model::{KeywordEncoding, LogFormat};
use crate::utils::error::{EventGetterError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub services: ServicesConfig,
    pub request: RequestConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub doorkeeper_endpoint: String,
    pub connpass_endpoint: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            doorkeeper_endpoint: DOORKEEPER_ENDPOINT.to_string(),
            connpass_endpoint: CONNPASS_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub timeout_seconds: Option<u64>,
    pub keyword_encoding: KeywordEncoding,
    pub result_count: u32,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            keyword_encoding: KeywordEncoding::default(),
            result_count: DEFAULT_RESULT_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EventGetterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EventGetterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 有指定路徑時讀檔，否則使用預設值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${DOORKEEPER_ENDPOINT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            EventGetterError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.format
    }
}

impl ConfigProvider for TomlConfig {
    fn doorkeeper_endpoint(&self) -> &str {
        &self.services.doorkeeper_endpoint
    }

    fn connpass_endpoint(&self) -> &str {
        &self.services.connpass_endpoint
    }

    fn keyword_encoding(&self) -> KeywordEncoding {
        self.request.keyword_encoding
    }

    fn result_count(&self) -> u32 {
        self.request.result_count
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url(
            "services.doorkeeper_endpoint",
            &self.services.doorkeeper_endpoint,
        )?;
        crate::utils::validation::validate_url(
            "services.connpass_endpoint",
            &self.services.connpass_endpoint,
        )?;

        crate::utils::validation::validate_positive_number(
            "request.result_count",
            u64::from(self.request.result_count),
            1,
        )?;

        if let Some(timeout) = self.request.timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "request.timeout_seconds",
                timeout,
                1,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_public_services() {
        let config = TomlConfig::default();

        assert_eq!(config.doorkeeper_endpoint(), "https://api.doorkeeper.jp/events/");
        assert_eq!(config.connpass_endpoint(), "https://connpass.com/api/v1/event/");
        assert_eq!(config.result_count(), 100);
        assert_eq!(config.keyword_encoding(), KeywordEncoding::Encoded);
        assert!(config.request_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[services]
doorkeeper_endpoint = "http://localhost:9000/events/"
connpass_endpoint = "http://localhost:9001/api/v1/event/"

[request]
timeout_seconds = 10
keyword_encoding = "raw"
result_count = 50

[logging]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.doorkeeper_endpoint(), "http://localhost:9000/events/");
        assert_eq!(config.keyword_encoding(), KeywordEncoding::Raw);
        assert_eq!(config.result_count(), 50);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.log_format(), LogFormat::Json);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TomlConfig::from_toml_str("[request]\nkeyword_encoding = \"raw\"\n").unwrap();

        assert_eq!(config.connpass_endpoint(), CONNPASS_ENDPOINT);
        assert_eq!(config.result_count(), DEFAULT_RESULT_COUNT);
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EVENT_GETTER_TEST_CONNPASS", "https://test.connpass.local/");

        let toml_content = r#"
[services]
connpass_endpoint = "${EVENT_GETTER_TEST_CONNPASS}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.connpass_endpoint(), "https://test.connpass.local/");

        std::env::remove_var("EVENT_GETTER_TEST_CONNPASS");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[services]
doorkeeper_endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[request]\nresult_count = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_keyword_encoding_is_rejected() {
        let result = TomlConfig::from_toml_str("[request]\nkeyword_encoding = \"base64\"\n");
        assert!(matches!(
            result,
            Err(EventGetterError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[request]\nresult_count = 20\n")
            .unwrap();

        let config = TomlConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.result_count(), 20);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = TomlConfig::load(Some(Path::new("/nonexistent/event-getter.toml")));
        assert!(matches!(result, Err(EventGetterError::IoError(_))));
    }
}
