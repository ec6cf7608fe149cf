use crate::utils::error::{Result, RosterError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 修剪後比對，名稱必須唯一 (區分大小寫)
pub fn validate_unique_names(field_name: &str, names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();

    for name in names {
        let trimmed = name.trim();
        if !seen.insert(trimmed) {
            return Err(RosterError::ConfigValidationError {
                field: field_name.to_string(),
                message: format!("Name \"{}\" appears more than once", trimmed),
            });
        }
    }

    Ok(())
}

pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Value must fit on a single line".to_string(),
        });
    }
    Ok(())
}
