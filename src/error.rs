use std::path::PathBuf;
use thiserror::Error;

/// Neurondoc error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid descriptor {path}: {message}")]
    Descriptor { path: PathBuf, message: String },

    #[error("Missing documentation section directory: {0}")]
    MissingSection(PathBuf),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Neurondoc operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create a descriptor error
    pub fn descriptor(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Descriptor {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_path_not_found_display() {
        let err = Error::PathNotFound(PathBuf::from("/some/path"));
        assert_eq!(err.to_string(), "Path not found: /some/path");
    }

    #[test]
    fn test_descriptor_error_display() {
        let err = Error::descriptor("analyzers/DNS/DNS.json", "expected value at line 1");
        assert!(err.to_string().contains("analyzers/DNS/DNS.json"));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_missing_section_display() {
        let err = Error::MissingSection(PathBuf::from("docs/dev_guides"));
        assert_eq!(
            err.to_string(),
            "Missing documentation section directory: docs/dev_guides"
        );
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::config_validation("site name must not be empty");
        assert_eq!(err.to_string(), "Config validation error: site name must not be empty");
    }

    #[test]
    fn test_other_error() {
        let err = Error::other("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
