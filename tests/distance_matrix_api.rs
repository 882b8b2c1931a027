//! Distance matrix acquisition against a mocked API endpoint.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use tsp::distance::{create_dm, GoogleDistanceMatrix, MatrixSource};
use tsp::domain::{Coordinate, Stop};
use tsp::TspError;

const API_PATH: &str = "/maps/api/distancematrix/json";

fn stops(n: usize) -> Vec<Stop> {
    (0..n)
        .map(|i| {
            Stop::new(
                format!("stop {}", i),
                Coordinate {
                    lat: i as f64,
                    lng: i as f64 + 0.5,
                },
            )
        })
        .collect()
}

fn query(req: &Request, key: &str) -> String {
    req.url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}

/// Stop index encoded in the latitude of a `lat,lng` location.
fn index_of(location: &str) -> u64 {
    location.split(',').next().unwrap().parse().unwrap()
}

/// Distance from stop `i` to stop `j` is `100 * i + j`.
fn synthetic_matrix(req: &Request) -> ResponseTemplate {
    let origins = query(req, "origins");
    let destinations = query(req, "destinations");
    let rows: Vec<Value> = origins
        .split('|')
        .map(|o| {
            let elements: Vec<Value> = destinations
                .split('|')
                .map(|d| {
                    json!({
                        "status": "OK",
                        "distance": {"text": "", "value": 100 * index_of(o) + index_of(d)},
                        "duration": {"text": "", "value": 60}
                    })
                })
                .collect();
            json!({ "elements": elements })
        })
        .collect();

    ResponseTemplate::new(200).set_body_json(json!({
        "status": "OK",
        "origin_addresses": [],
        "destination_addresses": [],
        "rows": rows
    }))
}

fn source(server: &MockServer) -> GoogleDistanceMatrix {
    GoogleDistanceMatrix::new("test-key", format!("{}{}", server.uri(), API_PATH))
}

#[tokio::test]
async fn sends_metric_request_with_pipe_joined_locations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("units", "metric"))
        .and(query_param("key", "test-key"))
        .and(query_param("origins", "0,0|1,-1"))
        .and(query_param("destinations", "0,0|1,-1"))
        .respond_with(synthetic_matrix)
        .expect(1)
        .mount(&server)
        .await;

    let locations = vec!["0,0".to_string(), "1,-1".to_string()];
    let rows = source(&server).rows(&locations, &locations).await.unwrap();
    assert_eq!(rows, vec![vec![0, 1], vec![100, 101]]);
}

#[tokio::test]
async fn splits_requests_by_quota_and_keeps_origin_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(synthetic_matrix)
        .mount(&server)
        .await;

    let stops = stops(13);
    let dm = create_dm(&source(&server), &stops, 100).await.unwrap();

    assert_eq!(dm.len(), 13);
    for i in 0..13 {
        for j in 0..13 {
            let expected = if i == j { 0 } else { 100 * i as u64 + j as u64 };
            assert_eq!(dm.get(i, j), expected);
        }
    }

    // 100 / 13 = 7 rows per request: one full batch, then the remaining 6
    let requests = server.received_requests().await.unwrap();
    let batch_sizes: Vec<usize> = requests
        .iter()
        .map(|r| query(r, "origins").split('|').count())
        .collect();
    assert_eq!(batch_sizes, vec![7, 6]);
    assert!(requests
        .iter()
        .all(|r| query(r, "destinations").split('|').count() == 13));
    assert_eq!(query(&requests[1], "origins").split('|').next(), Some("7,7.5"));
}

#[tokio::test]
async fn single_request_when_quota_allows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(synthetic_matrix)
        .expect(1)
        .mount(&server)
        .await;

    let dm = create_dm(&source(&server), &stops(10), 100).await.unwrap();
    assert_eq!(dm.len(), 10);
}

#[tokio::test]
async fn api_status_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "rows": []
        })))
        .mount(&server)
        .await;

    let err = create_dm(&source(&server), &stops(3), 100).await.unwrap_err();
    match err {
        TspError::ApiStatus { status, .. } => assert_eq!(status, "REQUEST_DENIED"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn http_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = create_dm(&source(&server), &stops(3), 100).await.unwrap_err();
    assert!(matches!(err, TspError::Http(_)));
}

#[tokio::test]
async fn failure_in_later_batch_stops_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("origins", "0,0.5|1,1.5|2,2.5|3,3.5|4,4.5"))
        .respond_with(synthetic_matrix)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("origins", "5,5.5|6,6.5|7,7.5|8,8.5|9,9.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OVER_QUERY_LIMIT",
            "rows": []
        })))
        .mount(&server)
        .await;

    // 20 stops -> 5 rows per request; the second request fails
    let err = create_dm(&source(&server), &stops(20), 100).await.unwrap_err();
    assert!(matches!(err, TspError::ApiStatus { .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
