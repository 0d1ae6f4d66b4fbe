use super::*;
use crate::summary::Indicator;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUMMARY_PATH: &str = "/api/v2/summary.json";

fn fetcher_for(server: &MockServer, timeout: Duration) -> HttpStatusFetcher {
    HttpStatusFetcher::new(
        &format!("{}{}", server.uri(), SUMMARY_PATH),
        timeout,
        "statuswatch-test",
    )
    .unwrap()
}

#[test]
fn test_new_rejects_invalid_url() {
    let result = HttpStatusFetcher::new("not a url", Duration::from_secs(1), "ua");
    assert!(matches!(result, Err(MonitorError::InvalidConfig(_))));
}

#[test]
fn test_from_config_rejects_invalid_status_url() {
    let config = MonitorConfig {
        status_url: "githubstatus.com/summary.json".to_string(),
        ..Default::default()
    };
    let result = HttpStatusFetcher::from_config(&config);
    assert!(matches!(result, Err(MonitorError::InvalidConfig(_))));
}

#[tokio::test]
async fn test_fetch_operational() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SUMMARY_PATH))
        .and(header("user-agent", "statuswatch-test"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"status":{"indicator":"none","description":"All Systems Operational"},"page":{"updated_at":"2024-01-01T00:00:00Z"},"incidents":[],"scheduled_maintenances":[]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let summary = fetcher_for(&server, Duration::from_secs(5)).fetch().await.unwrap();
    assert_eq!(summary.indicator, Indicator::None);
    assert_eq!(summary.description, "All Systems Operational");
    assert_eq!(summary.updated_at, "2024-01-01T00:00:00Z");
    assert_eq!(summary.incident_count, 0);
    assert_eq!(summary.maintenance_count, 0);
}

#[tokio::test]
async fn test_fetch_degraded_with_incidents() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SUMMARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": {"indicator": "major", "description": "Partial System Outage"},
            "page": {"updated_at": "2024-03-05T10:00:00Z"},
            "incidents": [{"name": "Actions degraded"}, {"name": "Pages delayed"}],
            "scheduled_maintenances": [{"name": "DB failover"}]
        })))
        .mount(&server)
        .await;

    let summary = fetcher_for(&server, Duration::from_secs(5)).fetch().await.unwrap();
    assert_eq!(summary.indicator, Indicator::Major);
    assert_eq!(summary.incident_count, 2);
    assert_eq!(summary.maintenance_count, 1);
}

#[tokio::test]
async fn test_fetch_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SUMMARY_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetcher_for(&server, Duration::from_secs(5)).fetch().await.unwrap_err();
    assert_eq!(err, FetchError::HttpStatus(503));
}

#[tokio::test]
async fn test_fetch_not_found() {
    let server = MockServer::start().await;

    let err = fetcher_for(&server, Duration::from_secs(5)).fetch().await.unwrap_err();
    assert_eq!(err, FetchError::HttpStatus(404));
}

#[tokio::test]
async fn test_fetch_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SUMMARY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = fetcher_for(&server, Duration::from_millis(200)).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_fetch_invalid_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SUMMARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server, Duration::from_secs(5)).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}
