use thiserror::Error;

/// Everything that can abort a bootstrap run.
///
/// All variants are terminal: there is no retry policy and no repair of
/// partially staged state. Each kind maps to its own process exit code so
/// wrapper scripts can tell them apart.
#[derive(Error, Debug)]
pub enum InitError {
    /// A required setting could not be resolved from any layer.
    #[error("{0}")]
    ConfigMissing(String),

    /// The capacity string did not parse.
    #[error("invalid capacity {value:?}: {reason}")]
    InvalidCapacity { value: String, reason: String },

    /// Transport failure or non-2xx response from the admin API.
    #[error("HTTP error while calling API: {0}")]
    Http(#[from] reqwest::Error),
}

impl InitError {
    /// Exit code reported to the operator for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            InitError::InvalidCapacity { .. } => 1,
            InitError::ConfigMissing(_) => 2,
            InitError::Http(_) => 3,
        }
    }
}
