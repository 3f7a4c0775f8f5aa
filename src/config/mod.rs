// src/config/mod.rs

pub mod error;
pub mod parameters;

pub use error::ConfigError;
pub use parameters::SimulationParameters;

/// 設定ファイルの既定パス
pub const DEFAULT_CONFIG_PATH: &str = "config/motion.yaml";
