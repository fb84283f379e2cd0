//! Version information for the TimeFlip application.
//!
//! This module provides centralized access to version information,
//! ensuring consistent version reporting throughout the application.

/// The crate version as recorded in the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns a formatted version string for display purposes
pub fn get_display_version() -> String {
    format!("v{}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_get_display_version_format() {
        assert_eq!(get_display_version(), format!("v{}", VERSION));
    }
}
