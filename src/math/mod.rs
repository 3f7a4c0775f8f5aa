// src/math/mod.rs

pub mod error;
pub mod truncate;

pub use error::MotionError;
pub use truncate::truncate_to_i32;

/// 重力加速度 (m/s²)
pub const GRAVITY: f64 = 9.81;

/// 1回の軌道計算で扱うサンプル数の上限
pub const MAX_SAMPLES: usize = 1_000_000;
