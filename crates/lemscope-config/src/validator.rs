//! Configuration validation.

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

        Self::validate_gemini(config, &mut result);
        Self::validate_screenshot(config, &mut result);
        Self::validate_analysis(config, &mut result);

        result
    }

    fn validate_gemini(config: &Config, result: &mut ValidationResult) {
        if config.gemini.model.trim().is_empty() {
            result.add_error(ValidationError::new("gemini.model", "Model cannot be empty"));
        }

        if !config.gemini.base_url.starts_with("http://")
            && !config.gemini.base_url.starts_with("https://")
        {
            result.add_error(ValidationError::new(
                "gemini.base_url",
                "base_url must be an http(s) URL",
            ));
        }

        if config.gemini.resolved_api_key().is_none() {
            result.add_warning(ValidationWarning::new(
                "gemini.api_key",
                "No API key configured and GEMINI_API_KEY is not set",
            ));
        }

        if config.gemini.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "gemini.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }
    }

    fn validate_screenshot(config: &Config, result: &mut ValidationResult) {
        if config.screenshot.width == 0 {
            result.add_error(ValidationError::new(
                "screenshot.width",
                "width must be greater than 0",
            ));
        }

        if config.screenshot.service_url.trim().is_empty() {
            result.add_error(ValidationError::new(
                "screenshot.service_url",
                "service_url cannot be empty",
            ));
        }

        if config.screenshot.wait_seconds > 30 {
            result.add_warning(ValidationWarning::new(
                "screenshot.wait_seconds",
                "wait_seconds above 30 may exceed the service's own capture timeout",
            ));
        }
    }

    fn validate_analysis(config: &Config, result: &mut ValidationResult) {
        let analysis = &config.analysis;

        if analysis.aspect_width == 0 || analysis.aspect_height == 0 {
            result.add_error(ValidationError::new(
                "analysis.aspect_width",
                "aspect ratio components must be greater than 0",
            ));
        }

        if !analysis.spread_threshold.is_finite() || analysis.spread_threshold <= 0.0 {
            result.add_error(ValidationError::new(
                "analysis.spread_threshold",
                "spread_threshold must be a positive number",
            ));
        } else if analysis.spread_threshold > 25.0 {
            result.add_warning(ValidationWarning::new(
                "analysis.spread_threshold",
                "spread_threshold above 25 pushes markers far from their anchors",
            ));
        }

        if analysis.decluster_iterations == 0 {
            result.add_warning(ValidationWarning::new(
                "analysis.decluster_iterations",
                "decluster_iterations is 0, markers will only be clamped",
            ));
        }

        if analysis.max_concurrent_slices == 0 {
            result.add_error(ValidationError::new(
                "analysis.max_concurrent_slices",
                "max_concurrent_slices must be greater than 0",
            ));
        }

        if analysis.decluster_iterations > 100 {
            result.add_warning(ValidationWarning::new(
                "analysis.decluster_iterations",
                "decluster_iterations is very high (>100), relaxation is quadratic per pass",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
