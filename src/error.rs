use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Raw coverage that the summarizer cannot interpret. Always fatal.
    #[error("Malformed coverage data for {file}: {reason}")]
    MalformedCoverage { file: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoverageGuardError {
    /// Short category label used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::MalformedCoverage { .. } => "MalformedCoverage",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::Json(_) => "Json",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => format!("cannot read {}", path.display()),
            Self::InvalidPattern { pattern, .. } => format!("invalid glob pattern '{pattern}'"),
            Self::MalformedCoverage { file, .. } => {
                format!("cannot summarize coverage for '{file}'")
            }
            Self::Io(_) => "I/O failure".to_string(),
            Self::TomlParse(_) => "invalid TOML configuration".to_string(),
            Self::Json(_) => "JSON serialization failed".to_string(),
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Config(_) => None,
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::MalformedCoverage { reason, .. } => Some(reason.clone()),
            Self::Io(e) => Some(e.to_string()),
            Self::TomlParse(e) => Some(e.to_string()),
            Self::Json(e) => Some(e.to_string()),
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPattern { .. } => {
                Some("Check glob pattern syntax, e.g. \"**/vendor/**\" or \"src/*.js\"")
            }
            Self::MalformedCoverage { .. } => {
                Some("Regenerate the report as Istanbul JSON (coverage-final.json)")
            }
            Self::FileRead { .. } => Some("Check that the file exists and is readable"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoverageGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
