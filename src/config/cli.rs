use crate::core::OutputSink;
use crate::utils::error::{EventGetterError, Result};
use std::io::Write;

/// 將每個服務的結果逐行寫到標準輸出
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}

/// 啟動前的錯誤 (設定、HTTP client) 只記錄並印出訊息，程式仍正常結束
pub fn report_setup_error<O: OutputSink>(
    stage: &str,
    e: &EventGetterError,
    out: &mut O,
) -> Result<()> {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    out.write_line(&e.user_friendly_message())
}
