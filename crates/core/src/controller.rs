use crate::{
    backend::{AnalysisBackend, interpret_response},
    error::Result,
    page::VideoAnalysisPage,
    progress::ProgressTicker,
    request::Submission,
    types::AnalysisResult,
};

/// Drives one submission from the page to the backend and back.
pub struct SubmissionController<B> {
    backend: B,
}

impl<B: AnalysisBackend> SubmissionController<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Validate, submit and record the outcome on the page.
    ///
    /// Validation failures never reach the backend. Whatever happens after
    /// that, the page ends up not analyzing with progress back at zero.
    pub async fn analyze(&self, page: &mut VideoAnalysisPage) {
        let Ok(submission) = page.begin_submission() else {
            return;
        };

        let ticker = ProgressTicker::start(page.progress().clone());
        let outcome = self.run(&submission).await;
        ticker.stop();

        page.complete(outcome);
    }

    /// Send a submission and interpret the reply, without touching any page.
    pub async fn run(&self, submission: &Submission) -> Result<Option<AnalysisResult>> {
        let response = self.backend.submit(submission).await?;
        interpret_response(&response)
    }
}
