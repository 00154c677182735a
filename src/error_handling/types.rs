use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    BadIPFormatting(String),
    NotInRange(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::BadIPFormatting(e) => write!(f, "IP formatting error: {}", e),
            ConfigError::NotInRange(e) => write!(f, "Value out of range: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    ConnectionFailed,
    WriteFailed,
    ReadFailed,
    NotFound,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionFailed => write!(f, "Storage connection failed"),
            StorageError::WriteFailed => write!(f, "Storage write failed"),
            StorageError::ReadFailed => write!(f, "Storage read failed"),
            StorageError::NotFound => write!(f, "Record not found"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Errors a request handler can end with.
///
/// `NotFound` and `Validation` are the handled application-level outcomes,
/// `Storage` covers everything the store could not do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    NotFound(String),
    Validation(String),
    Storage(StorageError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(e) => write!(f, "Not found: {}", e),
            WebError::Validation(e) => write!(f, "Validation error: {}", e),
            WebError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for WebError {}

impl From<StorageError> for WebError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => WebError::NotFound(err.to_string()),
            other => WebError::Storage(other),
        }
    }
}

#[derive(Debug)]
pub enum ControllerError {
    ConfigurationError(ConfigError),
    StorageError(StorageError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::ConfigurationError(e) => write!(f, "Configuration error: {}", e),
            ControllerError::StorageError(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        ControllerError::ConfigurationError(err)
    }
}

impl From<StorageError> for ControllerError {
    fn from(err: StorageError) -> Self {
        ControllerError::StorageError(err)
    }
}
