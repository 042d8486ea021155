// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integration tests for the routing backend client using mocked HTTP
//! responses: query encoding, plan decoding, and error propagation.

use chrono::{Local, TimeZone};
use mockito::{Matcher, Server};
use serde_json::json;

use healthnav_planner::client::{OtpClient, RoutingBackend};
use healthnav_planner::config::BackendConfig;
use healthnav_planner::errors::PlannerError;
use healthnav_planner::models::{Coordinate, LegMode, TransportMode};
use healthnav_planner::preferences::{default_mode_preferences, RangeConstraint};
use healthnav_planner::trip::TripRequest;

/// Backend config pointing at a mockito server.
fn config_for(server: &Server) -> BackendConfig {
    let url = url::Url::parse(&server.url()).unwrap();
    BackendConfig {
        scheme: url.scheme().to_string(),
        host: url.host_str().unwrap().to_string(),
        port: url.port(),
        path: "/api/route".to_string(),
        timeout_seconds: 5,
    }
}

fn sample_request(ranges: &[RangeConstraint]) -> TripRequest {
    healthnav_planner::trip::build_trip_request(
        Local.with_ymd_and_hms(2021, 2, 13, 14, 5, 0).unwrap(),
        Some(Coordinate::new(49.44198, 11.08456)),
        Some(Coordinate::new(49.45803, 11.07310)),
        &default_mode_preferences(),
        ranges,
    )
    .unwrap()
}

fn mock_plan_response() -> serde_json::Value {
    json!({
        "date": 1613221500000_i64,
        "from_place": { "name": "Start", "lon": 11.08456, "lat": 49.44198 },
        "to_place": { "name": "End", "lon": 11.07310, "lat": 49.45803 },
        "itineraries": [
            {
                "duration": 900.0,
                "start_time": 1613221500000_i64,
                "end_time": 1613222400000_i64,
                "walk_time": 900.0,
                "walk_distance": 1200.0,
                "transit_time": 0.0,
                "waiting_time": 0.0,
                "transfers": 0,
                "legs": [
                    {
                        "start_time": 1613221500000_i64,
                        "end_time": 1613222400000_i64,
                        "distance": 1200.0,
                        "mode": "WALK",
                        "from_place": { "name": "Start", "lon": 11.08456, "lat": 49.44198 },
                        "to_place": { "name": "End", "lon": 11.07310, "lat": 49.45803 },
                        "geometry": "_p~iF~ps|U_ulLnnqC",
                        "duration": 900.0
                    }
                ]
            }
        ]
    })
}

#[tokio::test]
async fn plan_trip_sends_expected_query_and_decodes_plan() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/route")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("date".into(), "02-13-2021".into()),
            Matcher::UrlEncoded("time".into(), "02:05PM".into()),
            Matcher::UrlEncoded("fromPlace".into(), "49.44198,11.08456".into()),
            Matcher::UrlEncoded("toPlace".into(), "49.45803,11.0731".into()),
            Matcher::UrlEncoded("mode".into(), "WALK, BICYCLE, TRANSIT".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_plan_response().to_string())
        .create_async()
        .await;

    let client = OtpClient::new(config_for(&server)).unwrap();
    let plan = client.plan_trip(&sample_request(&[])).await.unwrap();

    mock.assert_async().await;
    assert_eq!(plan.itineraries.len(), 1);
    assert_eq!(plan.itineraries[0].distance_for(LegMode::Walk), 1200.0);
    assert_eq!(plan.from_place.name, "Start");
}

#[tokio::test]
async fn plan_trip_sends_constraint_parameter_when_ranges_narrowed() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/api/route")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("mode".into(), "WALK, BICYCLE, TRANSIT".into()),
            Matcher::Regex("constraint=".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_plan_response().to_string())
        .create_async()
        .await;

    let ranges = vec![RangeConstraint::new(
        TransportMode::Walk,
        1000.0,
        2000.0,
        10_000.0,
    )];
    let client = OtpClient::new(config_for(&server)).unwrap();
    client.plan_trip(&sample_request(&ranges)).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn plan_trip_propagates_server_errors() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/api/route")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("planner exploded")
        .create_async()
        .await;

    let client = OtpClient::new(config_for(&server)).unwrap();
    let err = client.plan_trip(&sample_request(&[])).await.unwrap_err();
    assert!(matches!(err, PlannerError::RequestFailed(_)));
}

#[tokio::test]
async fn plan_trip_rejects_malformed_bodies() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/api/route")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"date\": \"not-a-timestamp\"}")
        .create_async()
        .await;

    let client = OtpClient::new(config_for(&server)).unwrap();
    let err = client.plan_trip(&sample_request(&[])).await.unwrap_err();
    assert!(matches!(err, PlannerError::RequestFailed(_)));
}
