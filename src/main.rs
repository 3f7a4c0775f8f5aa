// src/main.rs

use std::env;
use std::error::Error;
use std::io::{self, Write};

use tracing::{info, Level};

use config::DEFAULT_CONFIG_PATH;
use simulation::framework::run_demo;
use simulation::input::read_launch_input;
use simulation::load_parameters::load_simulation_parameters_if_exists;

mod config;
mod math;
mod models;
mod simulation;
mod storage;

const PROMPT: &str = "Enter v0 and angle α separated by a space: ";

fn main() -> Result<(), Box<dyn Error>> {
    // 設定の読み込み (第1引数で設定ファイルを指定可能)
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let loaded = load_simulation_parameters_if_exists(&config_path)?;
    let found = loaded.is_some();
    let params = loaded.unwrap_or_default();
    params.validate()?;

    init_logging(params.level()?);
    if found {
        info!("loaded simulation parameters from {}", config_path);
    } else {
        info!("{} not found, using default parameters", config_path);
    }

    // 発射条件の入力
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    let launch = read_launch_input(io::stdin().lock())?;

    run_demo(&launch, &params, &mut out, &mut io::stderr())?;
    Ok(())
}

/// ログ出力の初期化 (標準出力はデモの出力に使うため標準エラーへ)
fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_file(true)
        .init();
}
