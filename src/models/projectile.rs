// src/models/projectile.rs

use tracing::debug;

use crate::math::{truncate_to_i32, MotionError, GRAVITY, MAX_SAMPLES};

/// 軌道上の1点 (整数に切り捨てた座標)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// `x: <hex>, y: <hex>` 形式の文字列
    pub fn to_hex_line(&self) -> String {
        format!("x: {:x}, y: {:x}", self.x, self.y)
    }
}

/// 投射体の構造体
///
/// 保存対象は `v0` と `alpha` (ラジアン) のみ。
/// `trajectory` は `calculate` で毎回作り直す派生データ。
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    v0: f64,             // 初速 (m/s)
    alpha: f64,          // 発射角 (rad)
    trajectory: Vec<Point>,
}

impl Projectile {
    /// 初速と発射角 (度) から生成する
    pub fn new(v0: f64, alpha_degrees: f64) -> Self {
        Self::from_radians(v0, alpha_degrees.to_radians())
    }

    /// 保存済みのラジアン値から生成する (軌道は空)
    pub fn from_radians(v0: f64, alpha: f64) -> Self {
        Projectile {
            v0,
            alpha,
            trajectory: Vec::new(),
        }
    }

    pub fn v0(&self) -> f64 {
        self.v0
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn trajectory(&self) -> &[Point] {
        &self.trajectory
    }

    /// 軌道を計算する
    ///
    /// 以前の軌道は破棄される。時刻は `t += step` で積算し、`t <= total_time` の間
    /// サンプリングする。y が負になった時点でその点を含めずに打ち切る。
    ///
    /// # 引数
    /// - `total_time`: 計算時間 (s)
    /// - `step`: 時間刻み (s)
    ///
    /// # 戻り値
    /// - 不正な時間設定の場合は `MotionError` (軌道は空のまま)
    pub fn calculate(&mut self, total_time: f64, step: f64) -> Result<(), MotionError> {
        self.trajectory.clear();

        if !step.is_finite() || step <= 0.0 {
            return Err(MotionError::NonPositiveStep { step });
        }
        if !total_time.is_finite() {
            return Err(MotionError::NonFiniteDuration { total_time });
        }
        if total_time / step > MAX_SAMPLES as f64 {
            return Err(MotionError::TooManySamples {
                total_time,
                step,
                limit: MAX_SAMPLES,
            });
        }

        let mut points = Vec::new();
        let mut t = 0.0;
        while t <= total_time {
            let point = sample_position(self.v0, self.alpha, t);
            if point.y < 0 {
                break;
            }
            points.push(point);
            t += step;
        }

        debug!(
            "v0={} alpha={}rad: {} points (total_time={}, step={})",
            self.v0,
            self.alpha,
            points.len(),
            total_time,
            step
        );
        self.trajectory = points;
        Ok(())
    }

    /// 軌道の各点を16進数表記の行として返す
    pub fn hex_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.trajectory.iter().map(Point::to_hex_line)
    }
}

/// 時刻 t における位置を計算する純粋関数
///
/// # 引数
/// - `v0`: 初速 (m/s)
/// - `alpha`: 発射角 (rad)
/// - `t`: 時刻 (s)
///
/// # 戻り値
/// - ゼロ方向に切り捨てた座標
pub fn sample_position(v0: f64, alpha: f64, t: f64) -> Point {
    let x = v0 * alpha.cos() * t;
    let y = v0 * alpha.sin() * t - (GRAVITY * t * t) / 2.0;
    Point {
        x: truncate_to_i32(x),
        y: truncate_to_i32(y),
    }
}
