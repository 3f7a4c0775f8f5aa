// src/config/parameters.rs

use serde::Deserialize;
use tracing::Level;

use crate::config::ConfigError;

/// シミュレーション設定
///
/// 省略された項目は既定値で補う。
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParameters {
    pub total_time: f64,     // 計算時間 (s)
    pub step: f64,           // 時間刻み (s)
    pub output_path: String, // 保存ファイルのパス
    pub log_level: String,   // ログレベル (trace/debug/info/warn/error)
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            total_time: 2.0,
            step: 0.1,
            output_path: "motion_data.ser".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SimulationParameters {
    /// 設定値の検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "step",
                value: self.step.to_string(),
            });
        }
        if !self.total_time.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "total_time",
                value: self.total_time.to_string(),
            });
        }
        if self.output_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "output_path",
                value: self.output_path.clone(),
            });
        }
        self.level()?;
        Ok(())
    }

    /// ログレベルの解釈
    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidValue {
                name: "log_level",
                value: self.log_level.clone(),
            })
    }
}
