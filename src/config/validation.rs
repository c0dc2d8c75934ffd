// src/config/validation.rs

use crate::errors::ConfigError;
use url::Url;

/// Rejects empty values for options that name a path or ref.
pub(super) fn validate_path_option(option: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            option: option.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Checks that a base URL parses and uses http or https.
pub(super) fn validate_base_url(option: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        option: option.to_string(),
        reason: format!("'{}' is not a valid URL ({})", value, e),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidValue {
            option: option.to_string(),
            reason: format!("unsupported scheme '{}', expected http or https", scheme),
        }),
    }
}
