//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{is_known_provider, Config};

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

    /// Fail on the first error, keeping warnings for the caller to report.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
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

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
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

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_proxy(config, &mut result);
        Self::validate_orchestrator(config, &mut result);
        Self::validate_providers(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_proxy(config: &Config, result: &mut ValidationResult) {
        if config.proxy.window_seconds == 0 {
            result.add_error(ValidationError::new(
                "proxy.window_seconds",
                "window_seconds must be greater than 0",
            ));
        }

        if config.proxy.sweep_interval_seconds == 0 {
            result.add_error(ValidationError::new(
                "proxy.sweep_interval_seconds",
                "sweep_interval_seconds must be greater than 0",
            ));
        }
    }

    fn validate_orchestrator(config: &Config, result: &mut ValidationResult) {
        let lists = [
            ("orchestrator.cloud_priority", &config.orchestrator.cloud_priority),
            ("orchestrator.local_priority", &config.orchestrator.local_priority),
        ];

        for (path, ids) in lists {
            for id in ids.iter() {
                if !is_known_provider(id) {
                    result.add_error(ValidationError::new(
                        path,
                        format!("Unknown provider '{}'", id),
                    ));
                }

                if config.providers.get(id).is_some_and(|p| !p.enabled) {
                    result.add_warning(ValidationWarning::new(
                        path,
                        format!("Provider '{}' is disabled and will be skipped", id),
                    ));
                }
            }
        }

        for id in &config.orchestrator.cloud_priority {
            if config.orchestrator.local_priority.contains(id) {
                result.add_warning(ValidationWarning::new(
                    "orchestrator",
                    format!("Provider '{}' is listed in both priority lists", id),
                ));
            }
        }
    }

    fn validate_providers(config: &Config, result: &mut ValidationResult) {
        for (name, provider) in &config.providers {
            if !is_known_provider(name) {
                result.add_warning(ValidationWarning::new(
                    format!("providers.{}", name),
                    "Unknown provider section is ignored",
                ));
            }

            if provider.timeout_seconds == Some(0) {
                result.add_error(ValidationError::new(
                    format!("providers.{}.timeout_seconds", name),
                    "timeout_seconds must be greater than 0",
                ));
            }

            if let Some(ref url) = provider.base_url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    result.add_error(ValidationError::new(
                        format!("providers.{}.base_url", name),
                        "base_url must start with http:// or https://",
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
