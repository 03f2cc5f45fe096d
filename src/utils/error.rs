use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error on '{field}': {reason}")]
    ValidationError { field: String, reason: String },
}

impl DemoError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that standard output is writable",
            DemoError::TomlError(_) => "Check the scenario file for TOML syntax and unknown names",
            DemoError::ConfigError { .. } => "Make sure the scenario file exists and is readable",
            DemoError::ValidationError { .. } => "Fix the reported field in the scenario or CLI flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
