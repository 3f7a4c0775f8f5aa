// src/math/error.rs

use thiserror::Error;

/// 軌道計算のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("時間刻みは正の有限値である必要があります: {step}")]
    NonPositiveStep { step: f64 },
    #[error("計算時間が有限値ではありません: {total_time}")]
    NonFiniteDuration { total_time: f64 },
    #[error("サンプル数が上限 {limit} を超えます (計算時間 {total_time}, 刻み {step})。")]
    TooManySamples { total_time: f64, step: f64, limit: usize },
}
