//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Persistence file could not be read, created, or written
    #[error("config persistence failed while {operation} '{path}': {source}")]
    ConfigPersist {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Log directory could not be created
    #[error("could not create log directory '{path}': {source}")]
    DirectoryInit {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO failure on a specific log segment
    #[error("segment {ordinal}: {operation} failed: {source}")]
    SegmentIo {
        ordinal: u32,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// File storage used before initialization
    #[error("file storage not initialized")]
    NotInitialized,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a config persistence error with context
    pub fn config_persist(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::ConfigPersist {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a directory initialization error
    pub fn directory_init(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::DirectoryInit {
            path: path.into(),
            source,
        }
    }

    /// Create a segment IO error
    pub fn segment_io(ordinal: u32, operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SegmentIo {
            ordinal,
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
