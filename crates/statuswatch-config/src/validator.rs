//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error, if any, into a `ConfigError`.
    pub fn into_result(mut self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.is_valid() {
            return Ok(self.warnings);
        }
        let err = self.errors.swap_remove(0);
        Err(ConfigError::InvalidValue {
            field: err.path,
            message: err.message,
        })
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_monitor(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.name.trim().is_empty() {
            result.add_error(ValidationError::new(
                "server.name",
                "Server name cannot be empty",
            ));
        }
    }

    fn validate_monitor(config: &Config, result: &mut ValidationResult) {
        let monitor = &config.monitor;

        match url::Url::parse(&monitor.status_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => result.add_error(ValidationError::new(
                "monitor.status_url",
                format!("Unsupported URL scheme: {}", url.scheme()),
            )),
            Err(e) => result.add_error(ValidationError::new(
                "monitor.status_url",
                format!("Invalid URL: {}", e),
            )),
        }

        if monitor.min_interval_secs == 0 {
            result.add_error(ValidationError::new(
                "monitor.min_interval_secs",
                "min_interval_secs must be greater than 0",
            ));
        }

        if monitor.default_interval_secs < monitor.min_interval_secs {
            result.add_error(ValidationError::new(
                "monitor.default_interval_secs",
                format!(
                    "default_interval_secs ({}) is below min_interval_secs ({})",
                    monitor.default_interval_secs, monitor.min_interval_secs
                ),
            ));
        }

        if monitor.retry_delay_secs == 0 {
            result.add_error(ValidationError::new(
                "monitor.retry_delay_secs",
                "retry_delay_secs must be greater than 0",
            ));
        }

        if monitor.request_timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "monitor.request_timeout_secs",
                "request_timeout_secs must be greater than 0",
            ));
        }

        if monitor.request_timeout_secs > monitor.min_interval_secs.max(1) * 6 {
            result.add_warning(ValidationWarning::new(
                "monitor.request_timeout_secs",
                "request timeout is much longer than the minimum interval; slow polls will delay ticks",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                "Empty log level, falling back to info",
            ));
        }

        if config.logging.dir.is_some() && config.logging.max_log_files == 0 {
            result.add_error(ValidationError::new(
                "logging.max_log_files",
                "max_log_files must be greater than 0 when file logging is enabled",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
