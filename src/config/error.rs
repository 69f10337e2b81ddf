//! Configuration loading errors.

/// Error raised while loading a configuration file.
#[derive(Debug, Clone)]
pub enum ConfigLoadError {
    /// Reading the file failed
    Io(String),
    /// The YAML did not parse into the expected sections
    Parse(String),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io(msg) => write!(f, "config read failed: {}", msg),
            ConfigLoadError::Parse(msg) => write!(f, "config parse failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}
