use thiserror::Error;

/// Custom error types for the GoodDoctor viewer backend
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Archive error: {0}")]
    ArchiveOpen(String),

    #[error("Entry '{entry}' is not valid UTF-8")]
    Decode { entry: String },

    #[error("Not a supported archive: {0}")]
    InvalidInput(String),

    #[error("Unknown tab id: {0}")]
    UnknownTab(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Convert to string for Tauri (commands must return Result<T, String>)
impl From<ViewerError> for String {
    fn from(err: ViewerError) -> String {
        err.to_string()
    }
}
