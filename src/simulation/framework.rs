// src/simulation/framework.rs

use std::error::Error;
use std::io::Write;

use tracing::{error, info};

use crate::config::SimulationParameters;
use crate::models::Projectile;
use crate::simulation::input::LaunchInput;
use crate::simulation::report::{write_hex_trajectory, TRAJECTORY_HEADER};
use crate::storage;

pub const SAVED_MESSAGE: &str = "Data saved to file.";
pub const RESTORED_MESSAGE: &str = "Object restored. Recalculating:";

/// 初回の軌道計算と出力
pub fn run_initial_calculation<W: Write>(
    launch: &LaunchInput,
    params: &SimulationParameters,
    out: &mut W,
) -> Result<Projectile, Box<dyn Error>> {
    let mut projectile = Projectile::new(launch.v0, launch.alpha_degrees);
    projectile.calculate(params.total_time, params.step)?;
    info!(
        "calculated {} points for v0={} alpha={}deg",
        projectile.trajectory().len(),
        launch.v0,
        launch.alpha_degrees
    );

    writeln!(out, "{}", TRAJECTORY_HEADER)?;
    write_hex_trajectory(out, &projectile)?;
    Ok(projectile)
}

/// パラメータを保存し、復元したオブジェクトで再計算する
pub fn persist_and_restore<W: Write>(
    projectile: &Projectile,
    params: &SimulationParameters,
    out: &mut W,
) -> Result<Projectile, Box<dyn Error>> {
    storage::save(projectile, &params.output_path)?;
    writeln!(out, "{}", SAVED_MESSAGE)?;

    let mut restored = storage::load(&params.output_path)?;
    writeln!(out, "{}", RESTORED_MESSAGE)?;
    restored.calculate(params.total_time, params.step)?;
    write_hex_trajectory(out, &restored)?;
    Ok(restored)
}

/// デモ全体の実行
///
/// 保存・復元の失敗は `err` に出力して処理を終える (初回の出力には影響しない)。
pub fn run_demo<W: Write, E: Write>(
    launch: &LaunchInput,
    params: &SimulationParameters,
    out: &mut W,
    err: &mut E,
) -> Result<(), Box<dyn Error>> {
    let projectile = run_initial_calculation(launch, params, out)?;

    if let Err(e) = persist_and_restore(&projectile, params, out) {
        error!("persistence demo failed: {}", e);
        writeln!(err, "Error: {}", e)?;
    }
    Ok(())
}
