// src/simulation/report.rs

use std::io::{self, Write};

use crate::models::Projectile;

/// 軌道の見出し
pub const TRAJECTORY_HEADER: &str = "Trajectory (HEX):";

/// 軌道を16進数で1点ずつ書き出す
pub fn write_hex_trajectory<W: Write>(writer: &mut W, projectile: &Projectile) -> io::Result<()> {
    for line in projectile.hex_lines() {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_hex_trajectory() {
        let mut projectile = Projectile::new(10.0, 45.0);
        projectile.calculate(0.3, 0.1).unwrap();

        let mut buffer = Vec::new();
        write_hex_trajectory(&mut buffer, &projectile).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "x: 0, y: 0\nx: 0, y: 0\nx: 1, y: 1\n"
        );
    }

    #[test]
    fn test_write_empty_trajectory() {
        let projectile = Projectile::new(10.0, 45.0);
        let mut buffer = Vec::new();
        write_hex_trajectory(&mut buffer, &projectile).unwrap();
        assert!(buffer.is_empty());
    }
}
