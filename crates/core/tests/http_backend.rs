use vidlens_core::{
    AnalyzerConfig, HttpBackend, Phase, SubmissionController, VideoAnalysisPage, VideoFile,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

fn controller_for(server: &MockServer) -> SubmissionController<HttpBackend> {
    SubmissionController::new(HttpBackend::new(AnalyzerConfig::new(server.uri())))
}

#[tokio::test]
async fn posts_youtube_submission_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-video"))
        .and(body_string_contains("name=\"youtubeUrl\""))
        .and(body_string_contains("https://www.youtube.com/watch?v=abc"))
        .and(body_string_contains("name=\"type\""))
        .and(body_string_contains("youtube"))
        .and(body_string_contains("name=\"prompt\""))
        .and(body_string_contains("Focus on the demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "analysis": {
                "summary": "S",
                "keyMoments": [
                    {"timestamp": "00:10", "description": "Intro"},
                    {"timestamp": "02:00", "description": "Demo"}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = VideoAnalysisPage::new();
    page.set_youtube_url("https://www.youtube.com/watch?v=abc");
    page.set_prompt("Focus on the demo");
    controller_for(&server).analyze(&mut page).await;

    assert_eq!(page.phase(), Phase::ShowingResult);
    let moments = page.result().unwrap().key_moments.clone().unwrap();
    assert_eq!(moments[0].description, "Intro");
    assert_eq!(moments[1].timestamp, "02:00");
}

#[tokio::test]
async fn uploads_file_under_video_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-video"))
        .and(body_string_contains("name=\"video\"; filename=\"lecture.mp4\""))
        .and(body_string_contains("video/mp4"))
        .and(body_string_contains("name=\"type\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"analysis": {"processingTime": "2s"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("lecture.mp4");
    std::fs::write(&file_path, b"fake video bytes").unwrap();

    let mut page = VideoAnalysisPage::new();
    assert!(page.select_file(VideoFile::from_path(&file_path).unwrap()));
    controller_for(&server).analyze(&mut page).await;

    assert_eq!(
        page.result().unwrap().processing_time.as_deref(),
        Some("2s")
    );
}

#[tokio::test]
async fn server_error_message_reaches_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-video"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "bad format"})),
        )
        .mount(&server)
        .await;

    let mut page = VideoAnalysisPage::new();
    page.set_youtube_url("https://youtu.be/x");
    controller_for(&server).analyze(&mut page).await;

    assert_eq!(page.error(), Some("bad format"));
    assert!(!page.is_analyzing());
    assert_eq!(page.progress().get(), 0);
}

#[tokio::test]
async fn error_without_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut page = VideoAnalysisPage::new();
    page.set_youtube_url("https://youtu.be/x");
    controller_for(&server).analyze(&mut page).await;

    assert_eq!(page.error(), Some("Video analysis failed"));
}

#[tokio::test]
async fn unreachable_server_still_finalizes() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let controller = SubmissionController::new(HttpBackend::new(AnalyzerConfig::new(uri)));
    let mut page = VideoAnalysisPage::new();
    page.set_youtube_url("https://youtu.be/x");
    controller.analyze(&mut page).await;

    assert_eq!(page.phase(), Phase::ShowingError);
    assert!(!page.error().unwrap().is_empty());
    assert!(!page.is_analyzing());
    assert_eq!(page.progress().get(), 0);
}

#[tokio::test]
async fn file_grown_past_limit_is_never_uploaded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"analysis": {}})))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("growing.mp4");
    std::fs::write(&file_path, vec![0u8; 1024]).unwrap();

    let mut page = VideoAnalysisPage::new();
    assert!(page.open_file(&file_path));
    std::fs::write(&file_path, vec![0u8; 21 * 1024 * 1024]).unwrap();

    controller_for(&server).analyze(&mut page).await;

    assert_eq!(
        page.error(),
        Some("File size must be under 20MB for direct upload")
    );
    assert!(page.result().is_none());
    assert!(!page.is_analyzing());
    assert_eq!(page.progress().get(), 0);
}
