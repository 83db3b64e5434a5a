//! Integration tests for ForecastClient using wiremock.

use firewood_weather::{ForecastClient, ForecastError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_entry(hour: u32, probability: u8) -> serde_json::Value {
    serde_json::json!({
        "DateTime": format!("2026-08-29T{hour:02}:00:00-04:00"),
        "EpochDateTime": 1_788_000_000u64,
        "IconPhrase": "Mostly cloudy",
        "PrecipitationProbability": probability,
    })
}

#[tokio::test]
async fn fetch_hourly_parses_twelve_points_in_order() {
    let mock_server = MockServer::start().await;

    let body: Vec<_> = (0u32..12)
        .map(|i| forecast_entry(8 + i, (i * 5) as u8))
        .collect();

    Mock::given(method("GET"))
        .and(path("/forecasts/v1/hourly/12hour/335315"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = ForecastClient::new(&mock_server.uri(), "test-key", "335315").unwrap();
    let series = client.fetch_hourly().await.unwrap();

    assert_eq!(series.len(), 12);
    assert_eq!(series[0].precipitation_probability, 0);
    assert_eq!(series[11].precipitation_probability, 55);
    assert_eq!(series[0].date_time.to_rfc3339(), "2026-08-29T08:00:00-04:00");
}

#[tokio::test]
async fn non_array_response_is_a_shape_error() {
    let mock_server = MockServer::start().await;

    // AccuWeather reports quota/auth problems as a JSON object
    Mock::given(method("GET"))
        .and(path("/forecasts/v1/hourly/12hour/335315"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Code": "Unauthorized",
            "Message": "Api Authorization failed",
        })))
        .mount(&mock_server)
        .await;

    let client = ForecastClient::new(&mock_server.uri(), "bad-key", "335315").unwrap();
    let err = client.fetch_hourly().await.unwrap_err();

    match err {
        ForecastError::Shape(msg) => assert!(msg.contains("object"), "got: {msg}"),
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_a_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecasts/v1/hourly/12hour/335315"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = ForecastClient::new(&mock_server.uri(), "test-key", "335315").unwrap();
    let err = client.fetch_hourly().await.unwrap_err();

    assert!(matches!(err, ForecastError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn server_error_status_is_an_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecasts/v1/hourly/12hour/335315"))
        .respond_with(ResponseTemplate::new(503).set_body_string("ServiceUnavailable"))
        .mount(&mock_server)
        .await;

    let client = ForecastClient::new(&mock_server.uri(), "test-key", "335315").unwrap();
    let err = client.fetch_hourly().await.unwrap_err();

    match err {
        ForecastError::Api { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("ServiceUnavailable"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
