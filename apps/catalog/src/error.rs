use thiserror::Error;

/// Failures while loading the two catalog data sources.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {source_name}: {message}")]
    Fetch {
        source_name: String,
        message: String,
    },

    #[error("failed to parse {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn fetch(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Name of the data source that failed.
    pub fn source_name(&self) -> &str {
        match self {
            Self::Read { source_name, .. }
            | Self::Fetch { source_name, .. }
            | Self::Parse { source_name, .. } => source_name,
        }
    }
}

/// Failures reported by a share capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("share capability unavailable")]
    Unavailable,

    #[error("share rejected: {0}")]
    Rejected(String),
}
