// src/math/truncate.rs

/// 浮動小数点数をゼロ方向に切り捨てて i32 に変換する
///
/// 負の値も床関数ではなくゼロ方向に丸める (-0.5 -> 0, -1.5 -> -1)。
/// 範囲外の値は i32 の最小値/最大値に飽和し、NaN は 0 になる。
pub fn truncate_to_i32(value: f64) -> i32 {
    value.trunc() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_positive_values() {
        assert_eq!(truncate_to_i32(0.0), 0);
        assert_eq!(truncate_to_i32(0.99), 0);
        assert_eq!(truncate_to_i32(7.07), 7);
    }

    /// 負の小数は床関数と異なりゼロ側へ丸められる
    #[test]
    fn test_truncate_negative_values_toward_zero() {
        assert_eq!(truncate_to_i32(-0.049), 0);
        assert_eq!(truncate_to_i32(-0.999), 0);
        assert_eq!(truncate_to_i32(-1.5), -1);
        assert_ne!(truncate_to_i32(-1.5), (-1.5f64).floor() as i32);
    }

    #[test]
    fn test_truncate_saturates_and_handles_nan() {
        assert_eq!(truncate_to_i32(1e12), i32::MAX);
        assert_eq!(truncate_to_i32(-1e12), i32::MIN);
        assert_eq!(truncate_to_i32(f64::NAN), 0);
    }
}
