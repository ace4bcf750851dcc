use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use vidlens_core::{
    AnalyzerConfig, HttpBackend, SubmissionController, VideoAnalysisPage,
    config::{DEFAULT_SERVER_URL, SERVER_URL_ENV},
    format_results,
    progress::ProgressGauge,
};

#[derive(Parser)]
#[command(name = "vidlens")]
#[command(about = "Submit a video or YouTube URL for AI analysis and print the results")]
struct Cli {
    /// Local video file to upload (max 20MB)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// YouTube URL to analyze
    #[arg(short, long)]
    url: Option<String>,

    /// Custom analysis prompt
    #[arg(short, long)]
    prompt: Option<String>,

    /// Analysis server base URL
    #[arg(short, long, env = SERVER_URL_ENV, default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Print the raw analysis as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn create_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{bar:30.cyan/dim}] {pos:>3}%")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .progress_chars("█▓░"),
    );
    pb.set_message("Analyzing video...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Mirror the page's progress onto the terminal until aborted.
fn follow_progress(gauge: ProgressGauge, pb: ProgressBar) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            pb.set_position(u64::from(gauge.get()));
        }
    })
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), message);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AnalyzerConfig::new(cli.server);
    tracing::debug!(url = %config.analyze_url(), "using analysis endpoint");

    let mut page = VideoAnalysisPage::new();

    if let Some(path) = &cli.file {
        if !page.open_file(path) {
            fail(page.error().unwrap_or_default());
        }
        if cli.url.is_some() {
            tracing::warn!("both a file and a URL were given, uploading the file");
        }
    }
    if let Some(url) = cli.url {
        page.set_youtube_url(url);
    }
    if let Some(prompt) = cli.prompt {
        page.set_prompt(prompt);
    }

    println!(
        "\n{}  {}\n",
        style("vidlens").cyan().bold(),
        style("Video Analysis").dim()
    );

    if let Some(file) = page.input.file() {
        println!("{} {}", style("✓").green().bold(), style(file.label()).dim());
    } else if !page.input.youtube_url.is_empty() {
        println!(
            "{} {}",
            style("✓").green().bold(),
            style(&page.input.youtube_url).dim()
        );
    }

    let controller = SubmissionController::new(HttpBackend::new(config));

    let pb = create_progress_bar();
    let follower = follow_progress(page.progress().clone(), pb.clone());
    controller.analyze(&mut page).await;
    follower.abort();

    if let Some(error) = page.error() {
        pb.abandon_with_message(format!("{} Analysis failed", style("✗").red().bold()));
        fail(error);
    }

    pb.set_position(100);
    pb.finish_with_message(format!("{} Analysis complete", style("✓").green().bold()));
    println!("{}", style("─".repeat(60)).dim());

    if cli.json {
        match page.result() {
            Some(result) => println!("{}", serde_json::to_string_pretty(result)?),
            None => println!("null"),
        }
    } else {
        println!("{}", format_results(&page.results_view()));
    }

    Ok(())
}
