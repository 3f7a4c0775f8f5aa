// src/storage/record.rs

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::Projectile;
use crate::storage::PersistenceError;

/// 保存データのバージョン
pub const RECORD_VERSION: u32 = 1;

/// 保存データ
///
/// 軌道は保存せず、初速と発射角 (ラジアン) のみを持つ。
/// serde_yaml は f64 を往復可能な最短表記で書き出すため値は劣化しない。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectileRecord {
    pub version: u32,
    pub v0: f64,    // 初速 (m/s)
    pub alpha: f64, // 発射角 (rad)
}

impl From<&Projectile> for ProjectileRecord {
    fn from(projectile: &Projectile) -> Self {
        ProjectileRecord {
            version: RECORD_VERSION,
            v0: projectile.v0(),
            alpha: projectile.alpha(),
        }
    }
}

impl TryFrom<ProjectileRecord> for Projectile {
    type Error = PersistenceError;

    fn try_from(record: ProjectileRecord) -> Result<Self, Self::Error> {
        if record.version != RECORD_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: record.version,
                expected: RECORD_VERSION,
            });
        }
        Ok(Projectile::from_radians(record.v0, record.alpha))
    }
}

/// 投射体のパラメータを書き出す
pub fn save_to_writer<W: Write>(projectile: &Projectile, writer: W) -> Result<(), PersistenceError> {
    serde_yaml::to_writer(writer, &ProjectileRecord::from(projectile))?;
    Ok(())
}

/// 投射体のパラメータを読み込む (軌道は空)
pub fn load_from_reader<R: Read>(reader: R) -> Result<Projectile, PersistenceError> {
    let record: ProjectileRecord = serde_yaml::from_reader(reader)?;
    Projectile::try_from(record)
}

/// 投射体のパラメータをファイルに保存する
///
/// 既存のファイルは上書きされる。
pub fn save<P: AsRef<Path>>(projectile: &Projectile, path: P) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    save_to_writer(projectile, &mut writer)?;
    writer.flush()?;
    info!("saved projectile parameters to {}", path.display());
    Ok(())
}

/// ファイルから投射体のパラメータを読み込む
pub fn load<P: AsRef<Path>>(path: P) -> Result<Projectile, PersistenceError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let projectile = load_from_reader(BufReader::new(file))?;
    info!("loaded projectile parameters from {}", path.display());
    Ok(projectile)
}
