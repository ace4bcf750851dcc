//! VidLens Core Library
//!
//! Page state, validation and submission machinery for sending videos to an
//! analysis endpoint and rendering what comes back.

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod input;
pub mod page;
pub mod progress;
pub mod request;
pub mod types;

// Re-export commonly used items at crate root
pub use backend::{AnalysisBackend, BackendResponse, HttpBackend, interpret_response};
pub use config::AnalyzerConfig;
pub use controller::SubmissionController;
pub use error::{AnalysisError, Result};
pub use format::{ResultSection, ResultsView, format_results, result_sections, results_view};
pub use input::{InputPanel, MAX_UPLOAD_BYTES, SourceMode, VideoFile, validate_file};
pub use page::{Phase, VideoAnalysisPage};
pub use progress::{ProgressGauge, ProgressTicker};
pub use request::{Submission, VideoSource};
pub use types::{AnalysisResult, KeyMoment, Quiz, QuizQuestion};
