use crate::utils::error::{Result, TimerError};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: &str) -> TimerError {
    TimerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Accepts any path the OS could open, UTF-8 or not.
pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.as_os_str().as_encoded_bytes();
    if raw.is_empty() {
        return Err(invalid(field_name, "\"\"", "a sound file path is required"));
    }
    if raw.contains(&0) {
        return Err(invalid(
            field_name,
            path.display(),
            "a path cannot contain NUL bytes",
        ));
    }
    Ok(())
}

/// Finite and zero or greater.
pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid(field_name, value, "Value must be a finite number"));
    }
    if value < 0.0 {
        return Err(invalid(field_name, value, "Value must not be negative"));
    }
    Ok(())
}
