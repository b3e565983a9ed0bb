use config::{Config, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");

/// Fixed parameters of the demo run, read from the embedded defaults only.
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub error_log_path: String,
    #[validate(length(min = 1))]
    pub fatal_error_log_path: String,
    #[validate(length(min = 1))]
    pub warning_message: String,
    #[validate(length(min = 1))]
    pub error_message: String,
    #[validate(length(min = 1))]
    pub fatal_error_message: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::AppConfig;

    #[test]
    fn test_new() {
        let result = AppConfig::new();
        assert!(
            matches!(&result, Ok(x) if x.error_log_path == "error_log.txt"
                && x.fatal_error_log_path == "fatal_error_log.txt"
                && x.warning_message == "This is a warning message."
                && x.error_message == "This is an error message."
                && x.fatal_error_message == "This is a fatal error message."),
            "Should use the built-in log files and messages"
        );
    }

    #[test]
    fn test_new_should_ignore_environment() {
        temp_env::with_vars(
            [
                ("ERROR_LOG_PATH", Some("elsewhere.txt")),
                ("LOGGER_ERROR_LOG_PATH", Some("elsewhere.txt")),
                ("LOGGER_WARNING_MESSAGE", Some("")),
            ],
            || {
                let result = AppConfig::new();
                assert!(
                    matches!(result, Ok(x) if x.error_log_path == "error_log.txt"
                        && x.warning_message == "This is a warning message."),
                    "Environment variables should not alter the run"
                )
            },
        );
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::new().unwrap();
        assert!(config.validate().is_ok());

        config.fatal_error_log_path = String::new();
        assert!(
            config.validate().is_err(),
            "Should reject an empty log path"
        );
    }
}
