use std::{path::PathBuf, sync::Arc};

use iced::widget::{button, column, container, progress_bar, row, scrollable, text, text_input};
use iced::{Element, Length, Subscription, Task, Theme, time};
use tracing_subscriber::EnvFilter;

use vidlens_core::{
    AnalysisResult, AnalyzerConfig, HttpBackend, ResultSection, ResultsView, SourceMode,
    SubmissionController, VideoAnalysisPage,
    format::{ANALYZING_TEXT, EMPTY_STATE_TEXT},
    progress::TICK_INTERVAL,
};

fn main() -> iced::Result {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title("VidLens")
        .subscription(App::subscription)
        .run()
}

struct App {
    page: VideoAnalysisPage,
    controller: Arc<SubmissionController<HttpBackend>>,
}

#[derive(Debug, Clone)]
enum Message {
    ModeSelected(SourceMode),
    PickerChanged(String),
    LoadFile,
    UrlChanged(String),
    PromptChanged(String),
    Analyze,
    Reset,
    Tick,
    Settled(Result<Option<AnalysisResult>, String>),
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = AnalyzerConfig::from_env();
        tracing::info!(url = %config.analyze_url(), "using analysis endpoint");
        (
            Self {
                page: VideoAnalysisPage::new(),
                controller: Arc::new(SubmissionController::new(HttpBackend::new(config))),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModeSelected(mode) => self.page.set_mode(mode),
            Message::PickerChanged(path) => self.page.input.picker = path,
            Message::LoadFile => {
                let path = PathBuf::from(self.page.input.picker.trim());
                self.page.open_file(&path);
            }
            Message::UrlChanged(url) => self.page.set_youtube_url(url),
            Message::PromptChanged(prompt) => self.page.set_prompt(prompt),
            Message::Analyze => {
                let Ok(submission) = self.page.begin_submission() else {
                    return Task::none();
                };
                let controller = Arc::clone(&self.controller);
                return Task::perform(
                    async move {
                        controller
                            .run(&submission)
                            .await
                            .map_err(|e| e.user_message())
                    },
                    Message::Settled,
                );
            }
            Message::Reset => self.page.reset(),
            Message::Tick => {
                if self.page.is_analyzing() {
                    self.page.progress().advance();
                }
            }
            Message::Settled(outcome) => self.page.complete(outcome),
        }
        Task::none()
    }

    // The ticker only exists while a request is in flight.
    fn subscription(&self) -> Subscription<Message> {
        if self.page.is_analyzing() {
            time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("AI Video Analysis").size(32),
            text("Upload videos or analyze YouTube content for transcription, visual analysis, and insights")
                .size(14),
        ]
        .spacing(6);

        let panels = row![
            container(self.input_panel())
                .width(Length::FillPortion(1))
                .padding(16),
            container(self.results_panel())
                .width(Length::FillPortion(1))
                .padding(16),
        ]
        .spacing(24);

        column![header, panels].spacing(24).padding(24).into()
    }

    fn input_panel(&self) -> Element<'_, Message> {
        let page = &self.page;
        let mode = page.input.mode;

        let tabs = row![
            tab_button(SourceMode::Upload, mode),
            tab_button(SourceMode::Youtube, mode)
        ]
        .spacing(8);

        let source: Element<'_, Message> = match mode {
            SourceMode::Upload => {
                let mut upload = column![
                    row![
                        text_input("Path to a video file", &page.input.picker)
                            .on_input(Message::PickerChanged)
                            .on_submit(Message::LoadFile),
                        button("Load").on_press(Message::LoadFile),
                    ]
                    .spacing(8),
                    text("MP4, MOV, AVI, WebM (max 20MB)").size(12),
                ]
                .spacing(6);
                if let Some(file) = page.input.file() {
                    upload = upload.push(text(file.label()));
                }
                upload.into()
            }
            SourceMode::Youtube => column![
                text("YouTube URL"),
                text_input("https://www.youtube.com/watch?v=...", &page.input.youtube_url)
                    .on_input(Message::UrlChanged),
            ]
            .spacing(6)
            .into(),
        };

        let mut panel = column![
            text("Video Input").size(20),
            tabs,
            source,
            text("Custom Analysis Prompt (Optional)"),
            text_input(
                "E.g., 'Focus on medical terminology and create a detailed summary with timestamps'",
                &page.input.prompt,
            )
            .on_input(Message::PromptChanged),
        ]
        .spacing(12);

        if let Some(error) = page.error() {
            panel = panel.push(text(error).style(text::danger));
        }

        if page.is_analyzing() {
            panel = panel.push(
                column![
                    text(ANALYZING_TEXT),
                    progress_bar(0.0..=100.0, f32::from(page.progress().get())),
                ]
                .spacing(6),
            );
        }

        let analyze_label = if page.is_analyzing() {
            "Analyzing..."
        } else {
            "Analyze Video"
        };
        panel
            .push(
                row![
                    button(analyze_label)
                        .on_press_maybe(page.can_submit().then_some(Message::Analyze)),
                    button("Reset")
                        .style(button::secondary)
                        .on_press(Message::Reset),
                ]
                .spacing(8),
            )
            .into()
    }

    fn results_panel(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.page.results_view() {
            ResultsView::Empty => text(EMPTY_STATE_TEXT).into(),
            ResultsView::Analyzing => text(ANALYZING_TEXT).into(),
            ResultsView::Sections(sections) => scrollable(
                sections
                    .into_iter()
                    .fold(column![].spacing(16), |col, section| {
                        col.push(section_view(section))
                    }),
            )
            .into(),
        };

        column![text("Analysis Results").size(20), body]
            .spacing(12)
            .into()
    }
}

fn tab_button(mode: SourceMode, active: SourceMode) -> Element<'static, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if mode == active {
        button::primary
    } else {
        button::secondary
    };
    button(text(mode.label()))
        .style(style)
        .on_press(Message::ModeSelected(mode))
        .into()
}

fn section_view(section: ResultSection<'_>) -> Element<'_, Message> {
    let title = section.title();
    match section {
        ResultSection::ProcessingTime(time) => {
            text(format!("Analysis completed in {}", time)).size(12).into()
        }
        ResultSection::KeyMoments(moments) => {
            let list = moments.iter().fold(column![].spacing(6), |col, moment| {
                col.push(
                    row![
                        text(moment.timestamp.as_str()),
                        text(moment.description.as_str()).width(Length::Fill),
                    ]
                    .spacing(12),
                )
            });
            column![text(title).size(16), list].spacing(8).into()
        }
        ResultSection::Summary(body)
        | ResultSection::Transcription(body)
        | ResultSection::VisualAnalysis(body) => {
            column![text(title).size(16), text(body)].spacing(8).into()
        }
    }
}
