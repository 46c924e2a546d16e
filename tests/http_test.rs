//! Retry behavior of the resilient client against a mock server.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use artistscope::error::FetchError;
use artistscope::http::{ExponentialBackoff, ResilientClient, RetryNotice};
use artistscope::types::AccessToken;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize, PartialEq)]
struct Payload {
    value: u32,
}

// Helper function to build a client with millisecond backoff and a notice recorder
fn recording_client(max_retries: u32) -> (ResilientClient, Arc<Mutex<Vec<RetryNotice>>>) {
    let notices = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&notices);
    let client = ResilientClient::new(reqwest::Client::new())
        .max_retries(max_retries)
        .backoff(ExponentialBackoff::new(Duration::from_millis(1)))
        .on_retry(move |notice| sink.lock().unwrap().push(notice.clone()));
    (client, notices)
}

#[tokio::test]
async fn test_success_returns_parsed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payload"))
        .and(query_param("limit", "1"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, notices) = recording_client(3);
    let token = AccessToken::new("secret-token");
    let payload: Payload = client
        .get(
            &format!("{}/payload", server.uri()),
            Some(&token),
            &[("limit", "1")],
        )
        .await
        .unwrap();

    assert_eq!(payload, Payload { value: 7 });
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_retryable_statuses_exhaust_after_max_retries() {
    for status in [429u16, 500, 502, 503, 504] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(status).set_body_string("try later"))
            // initial attempt plus three retries
            .expect(4)
            .mount(&server)
            .await;

        let (client, notices) = recording_client(3);
        let result = client
            .get::<Payload>(&format!("{}/flaky", server.uri()), None, &[])
            .await;

        match result {
            Err(FetchError::RetryExhausted {
                retries,
                status: last,
                ..
            }) => {
                assert_eq!(retries, 3);
                assert_eq!(last, status);
            }
            other => panic!("Expected RetryExhausted for {}, got {:?}", status, other),
        }

        // Waits grow as base * 2, base * 4, base * 8
        let notices = notices.lock().unwrap();
        let delays: Vec<Duration> = notices.iter().map(|n| n.delay).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(2),
                Duration::from_millis(4),
                Duration::from_millis(8)
            ]
        );
        assert!(notices.iter().all(|n| n.status == status));
        assert!(notices.iter().all(|n| n.body == "try later"));
        assert_eq!(
            notices.iter().map(|n| n.attempt).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        server.verify().await;
    }
}

#[tokio::test]
async fn test_non_retryable_status_fails_on_first_attempt() {
    for status in [400u16, 401, 403, 404] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .expect(1)
            .mount(&server)
            .await;

        let (client, notices) = recording_client(3);
        let result = client
            .get::<Payload>(&format!("{}/missing", server.uri()), None, &[])
            .await;

        match result {
            Err(FetchError::Http {
                status: got, body, ..
            }) => {
                assert_eq!(got, status);
                assert_eq!(body, "nope");
            }
            other => panic!("Expected Http error for {}, got {:?}", status, other),
        }
        assert!(notices.lock().unwrap().is_empty());

        server.verify().await;
    }
}

#[tokio::test]
async fn test_recovers_after_transient_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recovering"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/recovering"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, notices) = recording_client(3);
    let payload: Payload = client
        .get(&format!("{}/recovering", server.uri()), None, &[])
        .await
        .unwrap();

    assert_eq!(payload.value, 42);
    assert_eq!(notices.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_zero_max_retries_fails_immediately() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/busy"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let (client, notices) = recording_client(0);
    let result = client
        .get::<Payload>(&format!("{}/busy", server.uri()), None, &[])
        .await;

    assert!(matches!(
        result,
        Err(FetchError::RetryExhausted { retries: 0, status: 429, .. })
    ));
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/garbled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (client, _) = recording_client(3);
    let result = client
        .get::<Payload>(&format!("{}/garbled", server.uri()), None, &[])
        .await;

    assert!(matches!(result, Err(FetchError::Decode { .. })));
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let (client, notices) = recording_client(3);
    // Port 9 (discard) on localhost is not served during tests
    let result = client
        .get::<Payload>("http://127.0.0.1:9/nothing", None, &[])
        .await;

    assert!(matches!(result, Err(FetchError::Transport { .. })));
    assert!(notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_default_client_sends_crate_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ws/2/artist/"))
        .and(header(
            "user-agent",
            concat!("artistscope/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ResilientClient::with_user_agent().unwrap();
    let payload: Payload = client
        .get(&format!("{}/ws/2/artist/", server.uri()), None, &[])
        .await
        .unwrap();

    assert_eq!(payload.value, 1);
}
