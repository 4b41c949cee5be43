//! `config-check` subcommand.

use std::path::Path;

use lemscope_config::{Config, ConfigError, ValidationResult};

/// Print validation errors and warnings. Fails when the config is invalid.
pub(crate) fn handle_config_check(
    path: &Path,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        println!("Config: {}", path.display());
    } else {
        println!("Config: {} not found, using defaults", path.display());
    }

    let validation = lemscope_config::ConfigValidator::validate(config);
    for error in &validation.errors {
        println!("  error   {}: {}", error.path, error.message);
    }
    for warning in &validation.warnings {
        println!("  warning {}: {}", warning.path, warning.message);
    }

    if validation.is_valid() {
        println!(
            "OK ({} warning{})",
            validation.warnings.len(),
            if validation.warnings.len() == 1 { "" } else { "s" }
        );
        Ok(())
    } else {
        Err(invalid_config_error(&validation).into())
    }
}

/// Collapse validation errors into one [`ConfigError`].
pub(crate) fn invalid_config_error(validation: &ValidationResult) -> ConfigError {
    let message = validation
        .errors
        .iter()
        .map(|e| format!("{}: {}", e.path, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    ConfigError::Invalid(message)
}
