use std::{fmt::Display, path::Path};

use crate::{
    error::{AnalysisError, Result, user_message},
    format::{ResultsView, results_view},
    input::{InputPanel, SourceMode, VideoFile},
    progress::ProgressGauge,
    request::Submission,
    types::AnalysisResult,
};

/// What the page is showing, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Analyzing,
    ShowingResult,
    ShowingError,
}

/// Local state of the video analysis page.
#[derive(Debug, Default)]
pub struct VideoAnalysisPage {
    pub input: InputPanel,
    result: Option<AnalysisResult>,
    error: Option<String>,
    analyzing: bool,
    progress: ProgressGauge,
}

impl VideoAnalysisPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn progress(&self) -> &ProgressGauge {
        &self.progress
    }

    pub fn phase(&self) -> Phase {
        if self.analyzing {
            Phase::Analyzing
        } else if self.error.is_some() {
            Phase::ShowingError
        } else if self.result.is_some() {
            Phase::ShowingResult
        } else {
            Phase::Idle
        }
    }

    pub fn results_view(&self) -> ResultsView<'_> {
        results_view(self.result.as_ref(), self.analyzing)
    }

    pub fn set_mode(&mut self, mode: SourceMode) {
        self.input.set_mode(mode);
    }

    pub fn set_youtube_url(&mut self, url: impl Into<String>) {
        self.input.youtube_url = url.into();
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.input.prompt = prompt.into();
    }

    /// Pick a file for upload. Rejections set the error and store nothing.
    pub fn select_file(&mut self, file: VideoFile) -> bool {
        match self.input.select_file(file) {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(err) => {
                tracing::info!(error = %err, "file rejected");
                self.set_error(&err);
                false
            }
        }
    }

    /// Stat a file on disk and pick it, surfacing read failures like rejections.
    pub fn open_file(&mut self, path: &Path) -> bool {
        match VideoFile::from_path(path) {
            Ok(file) => self.select_file(file),
            Err(err) => {
                tracing::info!(path = %path.display(), error = %err, "cannot open file");
                self.set_error(&err);
                false
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.analyzing && self.input.has_source()
    }

    /// Start a submission: checks the input, flips to analyzing and packages the request.
    ///
    /// A submission already in flight is rejected without touching the page.
    pub fn begin_submission(&mut self) -> Result<Submission> {
        if self.analyzing {
            tracing::warn!("submission ignored, analysis already in progress");
            return Err(AnalysisError::AlreadyAnalyzing);
        }

        let Some(source) = self.input.source() else {
            let err = AnalysisError::MissingSource;
            self.set_error(&err);
            return Err(err);
        };

        self.analyzing = true;
        self.progress.reset();
        self.error = None;
        self.result = None;

        let submission = Submission::new(source, self.input.prompt().map(str::to_owned));
        tracing::info!(
            kind = submission.source.kind(),
            prompt = submission.prompt.is_some(),
            "analysis started"
        );
        Ok(submission)
    }

    /// Record how a submission settled and run finalization.
    pub fn complete<E: Display>(&mut self, outcome: std::result::Result<Option<AnalysisResult>, E>) {
        self.progress.complete();

        match outcome {
            Ok(result) => {
                tracing::info!(has_result = result.is_some(), "analysis finished");
                self.result = result;
            }
            Err(err) => {
                tracing::warn!(error = %err, "analysis failed");
                self.set_error(&err);
            }
        }

        self.analyzing = false;
        self.progress.reset();
    }

    /// Back to a blank page.
    pub fn reset(&mut self) {
        self.input.clear();
        self.result = None;
        self.error = None;
    }

    fn set_error(&mut self, err: &impl Display) {
        self.error = Some(user_message(err));
    }
}
