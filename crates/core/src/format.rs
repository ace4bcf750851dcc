use crate::types::{AnalysisResult, KeyMoment};

pub const EMPTY_STATE_TEXT: &str = "Upload a video or enter a YouTube URL to get started";
pub const ANALYZING_TEXT: &str = "Analyzing video...";

/// One block of the results panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSection<'a> {
    Summary(&'a str),
    Transcription(&'a str),
    VisualAnalysis(&'a str),
    KeyMoments(&'a [KeyMoment]),
    ProcessingTime(&'a str),
}

impl ResultSection<'_> {
    pub fn title(&self) -> &'static str {
        match self {
            ResultSection::Summary(_) => "Summary",
            ResultSection::Transcription(_) => "Transcription",
            ResultSection::VisualAnalysis(_) => "Visual Analysis",
            ResultSection::KeyMoments(_) => "Key Moments",
            ResultSection::ProcessingTime(_) => "Processing Time",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView<'a> {
    Empty,
    Analyzing,
    Sections(Vec<ResultSection<'a>>),
}

/// Sections present in a result, in display order.
pub fn result_sections(result: &AnalysisResult) -> Vec<ResultSection<'_>> {
    let mut sections = Vec::new();
    if let Some(summary) = non_empty(&result.summary) {
        sections.push(ResultSection::Summary(summary));
    }
    if let Some(transcription) = non_empty(&result.transcription) {
        sections.push(ResultSection::Transcription(transcription));
    }
    if let Some(visual) = non_empty(&result.visual_description) {
        sections.push(ResultSection::VisualAnalysis(visual));
    }
    if let Some(moments) = result.key_moments.as_deref().filter(|m| !m.is_empty()) {
        sections.push(ResultSection::KeyMoments(moments));
    }
    if let Some(time) = non_empty(&result.processing_time) {
        sections.push(ResultSection::ProcessingTime(time));
    }
    sections
}

pub fn results_view(result: Option<&AnalysisResult>, analyzing: bool) -> ResultsView<'_> {
    match result {
        Some(result) => ResultsView::Sections(result_sections(result)),
        None if analyzing => ResultsView::Analyzing,
        None => ResultsView::Empty,
    }
}

/// Format the results panel as human-readable markdown
pub fn format_results(view: &ResultsView<'_>) -> String {
    let sections = match view {
        ResultsView::Empty => return format!("{}\n", EMPTY_STATE_TEXT),
        ResultsView::Analyzing => return format!("{}\n", ANALYZING_TEXT),
        ResultsView::Sections(sections) => sections,
    };

    let mut output = String::new();
    for section in sections {
        match section {
            ResultSection::ProcessingTime(time) => {
                output.push_str(&format!("Analysis completed in {}\n\n", time));
            }
            ResultSection::KeyMoments(moments) => {
                output.push_str(&format!("## {}\n\n", section.title()));
                for moment in moments.iter() {
                    output.push_str(&format!("[{}] {}\n", moment.timestamp, moment.description));
                }
                output.push('\n');
            }
            ResultSection::Summary(body)
            | ResultSection::Transcription(body)
            | ResultSection::VisualAnalysis(body) => {
                output.push_str(&format!("## {}\n\n", section.title()));
                output.push_str(body);
                output.push_str("\n\n");
            }
        }
    }

    output
}

// An empty string is as good as absent.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
