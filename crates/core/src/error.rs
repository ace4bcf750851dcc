use thiserror::Error;

/// Shown when a failure carries no message text of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during analysis";

/// Shown when the server rejects a submission without saying why.
pub const SERVER_FAILURE_MESSAGE: &str = "Video analysis failed";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("File size must be under 20MB for direct upload")]
    FileTooLarge { size_bytes: u64 },

    #[error("Please select a valid video file")]
    NotAVideo { content_type: Option<String> },

    #[error("Please select a video file or enter a YouTube URL")]
    MissingSource,

    #[error("An analysis is already in progress")]
    AlreadyAnalyzing,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Message to put in front of the user, never empty.
    pub fn user_message(&self) -> String {
        user_message(self)
    }
}

/// Reduce any displayable failure to a human-readable message.
///
/// Only a failure with no text at all gets the generic message; anything else,
/// whitespace included, is shown as the failure reported it.
pub fn user_message(err: &impl std::fmt::Display) -> String {
    let message = err.to_string();
    if message.is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
