//! End-to-end demo generation against a mocked synthesis endpoint.

use serde_json::json;
use tempfile::TempDir;
use vaani_tts::{Config, DemoGenerator, DemoRequest, SarvamClient, VaaniError, DEMO_REQUESTS};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generator_for(server: &MockServer, dir: &TempDir) -> DemoGenerator<SarvamClient> {
    let config = Config {
        api_key: Some("test-key".to_string()),
        api_url: server.uri(),
        ..Default::default()
    };
    let client = SarvamClient::new(&config).unwrap();
    DemoGenerator::new(client, dir.path().join("audio"))
}

async fn respond_for_language(server: &MockServer, language_code: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/text-to-speech"))
        .and(body_partial_json(json!({ "target_language_code": language_code })))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_audio_record_is_written() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    respond_for_language(
        &mock_server,
        "kn-IN",
        ResponseTemplate::new(200).set_body_json(json!({ "audio": "QUJD" })),
    )
    .await;

    let generator = generator_for(&mock_server, &dir);
    let request = DemoRequest::new(
        "demo1_turn1",
        "Worker tells employer about leak (heard in Kannada)",
        "ಸಾರ್, ಬಾತ್ರೂಮ್ ಪೈಪ್ ಲೀಕ್ ಆಗ್ತಿದೆ.",
        "kn-IN",
    );

    let path = generator.generate(&request).await.unwrap();

    assert_eq!(path, dir.path().join("audio").join("demo1_turn1.wav"));
    assert_eq!(std::fs::read(&path).unwrap(), b"ABC");
}

#[tokio::test]
async fn test_audio_sequence_record_is_written() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    respond_for_language(
        &mock_server,
        "ta-IN",
        ResponseTemplate::new(200).set_body_json(json!({ "audios": ["eHl6"] })),
    )
    .await;

    let generator = generator_for(&mock_server, &dir);
    let request = DemoRequest::new("demo2_turn1", "Patient", "வலி", "ta-IN");

    let path = generator.generate(&request).await.unwrap();
    assert_eq!(std::fs::read(path).unwrap(), b"xyz");
}

#[tokio::test]
async fn test_rate_limited_record_is_skipped_and_run_continues() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    respond_for_language(
        &mock_server,
        "kn-IN",
        ResponseTemplate::new(429).set_body_json(json!({ "error": "rate limited" })),
    )
    .await;
    respond_for_language(
        &mock_server,
        "od-IN",
        ResponseTemplate::new(200).set_body_json(json!({ "audio": "QUJD" })),
    )
    .await;

    let generator = generator_for(&mock_server, &dir);
    let summary = generator
        .run(&[
            DemoRequest::new("first", "rate limited", "ಸಾರ್", "kn-IN"),
            DemoRequest::new("second", "succeeds", "ଠିକ୍ ଅଛି", "od-IN"),
        ])
        .await;

    assert!(!generator.output_path("first").exists());
    assert_eq!(std::fs::read(generator.output_path("second")).unwrap(), b"ABC");

    assert_eq!(summary.generated, vec![generator.output_path("second")]);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].id, "first");
    assert!(matches!(
        summary.failures[0].error,
        VaaniError::Api { status: 429, .. }
    ));
}

#[tokio::test]
async fn test_full_demo_run_is_idempotent() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/text-to-speech"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "audios": ["UklGRg=="] })))
        .expect(DEMO_REQUESTS.len() as u64 * 2)
        .mount(&mock_server)
        .await;

    let generator = generator_for(&mock_server, &dir);

    let first = generator.run(&DEMO_REQUESTS).await;
    assert!(first.all_succeeded());
    assert_eq!(first.generated.len(), DEMO_REQUESTS.len());

    let before: Vec<Vec<u8>> = first
        .generated
        .iter()
        .map(|path| std::fs::read(path).unwrap())
        .collect();

    let second = generator.run(&DEMO_REQUESTS).await;
    assert_eq!(second.generated, first.generated);

    for (path, previous) in second.generated.iter().zip(before) {
        let current = std::fs::read(path).unwrap();
        assert_eq!(current, previous);
        assert_eq!(current, b"RIFF");
    }

    for demo in DEMO_REQUESTS.iter() {
        assert!(generator.output_path(&demo.id).exists(), "{}", demo.id);
    }
}
