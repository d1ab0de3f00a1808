use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TelemetryFormat {
    /// Single human readable line per record.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Simulated seconds between diagnostic records.
    pub interval: f64,
    pub format: TelemetryFormat,
    /// Install the log observer at startup.
    pub log_records: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            interval: 1.0,
            format: TelemetryFormat::Text,
            log_records: true,
        }
    }
}
