//! Error taxonomy for wsupdate.
//!
//! Only [`UpdateError::PlatformUnsupported`] ends the process. Everything else
//! is reported through the logger and swallowed by the pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    /// The executable could not be found or failed to start.
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{backend} is not available on this system")]
    BackendUnavailable { backend: String },

    #[error("wsupdate only runs on Linux-based systems")]
    PlatformUnsupported,

    #[error("{backend} update declined by the operator")]
    UserDeclined { backend: String },
}

impl UpdateError {
    pub fn unavailable(backend: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            backend: backend.into(),
        }
    }

    pub fn declined(backend: impl Into<String>) -> Self {
        Self::UserDeclined {
            backend: backend.into(),
        }
    }
}
