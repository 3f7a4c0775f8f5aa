// src/simulation/load_parameters.rs

use std::fs::File;
use std::io::ErrorKind;
use serde_yaml::from_reader;

use crate::config::{ConfigError, SimulationParameters};

/// シミュレーション設定の読み込み
pub fn load_simulation_parameters(path: &str) -> Result<SimulationParameters, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let params: SimulationParameters = from_reader(file).map_err(|source| ConfigError::Format {
        path: path.to_string(),
        source,
    })?;
    params.validate()?;
    Ok(params)
}

/// シミュレーション設定の読み込み (ファイルが無ければ None)
pub fn load_simulation_parameters_if_exists(
    path: &str,
) -> Result<Option<SimulationParameters>, ConfigError> {
    match load_simulation_parameters(path) {
        Ok(params) => Ok(Some(params)),
        Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_config(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!(
            "motion-demo-{}-{}.yaml",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_simulation_parameters() {
        let path = temp_config(
            "valid",
            "total_time: 3.0\nstep: 0.25\noutput_path: out.ser\nlog_level: debug\n",
        );
        let params = load_simulation_parameters(&path);
        fs::remove_file(&path).unwrap();

        let params = params.unwrap();
        assert_eq!(params.total_time, 3.0);
        assert_eq!(params.step, 0.25);
        assert_eq!(params.output_path, "out.ser");
        assert_eq!(params.log_level, "debug");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("motion-demo-no-such-config.yaml");
        let result = load_simulation_parameters_if_exists(&path.to_string_lossy());
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_invalid_step_is_rejected() {
        let path = temp_config("zero-step", "step: 0.0\n");
        let result = load_simulation_parameters_if_exists(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: "step", .. })
        ));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let path = temp_config("malformed", "total_time: [\n");
        let result = load_simulation_parameters(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Format { .. })));
    }
}
