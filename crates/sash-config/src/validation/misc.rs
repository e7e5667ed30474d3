//! Validation for the container and explorer sections.

use crate::schema::SashConfig;

use super::helpers::validate_range_f64;

/// Validate container geometry.
pub(crate) fn validate_container(errors: &mut Vec<String>, config: &SashConfig) {
    validate_range_f64(errors, "container.width", config.container.width, 1.0, 16384.0);
    validate_range_f64(errors, "container.height", config.container.height, 1.0, 16384.0);
}

/// An explicitly configured folder must not be empty.
pub(crate) fn validate_explorer(errors: &mut Vec<String>, config: &SashConfig) {
    if let Some(folder) = &config.explorer.folder {
        if folder.as_os_str().is_empty() {
            errors.push("explorer.folder must not be empty".into());
        }
    }
}
