// src/storage/error.rs

use thiserror::Error;

/// 保存・読み込みのエラー
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("ファイルの入出力に失敗しました: {0}")]
    Io(#[from] std::io::Error),
    #[error("保存データの形式が不正です: {0}")]
    Format(#[from] serde_yaml::Error),
    #[error("保存データのバージョン {found} には対応していません (対応バージョン: {expected})。")]
    UnsupportedVersion { found: u32, expected: u32 },
}
