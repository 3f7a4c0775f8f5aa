// src/config/error.rs

use thiserror::Error;

/// 設定のエラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ファイル {path} を読み込めません: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("設定ファイル {path} の形式が不正です: {source}")]
    Format {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("設定値 {name} が不正です: {value}")]
    InvalidValue { name: &'static str, value: String },
}
