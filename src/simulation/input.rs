// src/simulation/input.rs

use std::io::BufRead;

use thiserror::Error;

/// 入力された発射条件
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchInput {
    pub v0: f64,            // 初速 (m/s)
    pub alpha_degrees: f64, // 発射角 (度)
}

/// 入力のエラー
#[derive(Error, Debug)]
pub enum InputError {
    #[error("入力の読み込みに失敗しました: {0}")]
    Io(#[from] std::io::Error),
    #[error("{name} が入力されていません。")]
    Missing { name: &'static str },
    #[error("{name} に数値以外が入力されました: {token:?}")]
    InvalidNumber { name: &'static str, token: String },
}

/// 空白区切りの2つの数値 (初速, 角度) を読み込む
///
/// 値は複数行にまたがってもよい。3つ目以降のトークンは無視する。
pub fn read_launch_input<R: BufRead>(reader: R) -> Result<LaunchInput, InputError> {
    let mut tokens: Vec<String> = Vec::with_capacity(2);
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_owned));
        if tokens.len() >= 2 {
            break;
        }
    }

    Ok(LaunchInput {
        v0: parse_value("v0", tokens.first())?,
        alpha_degrees: parse_value("alpha", tokens.get(1))?,
    })
}

fn parse_value(name: &'static str, token: Option<&String>) -> Result<f64, InputError> {
    let token = token.ok_or(InputError::Missing { name })?;
    token.parse::<f64>().map_err(|_| InputError::InvalidNumber {
        name,
        token: token.clone(),
    })
}
