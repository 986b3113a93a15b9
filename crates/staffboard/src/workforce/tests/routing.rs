use super::common::*;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::workforce::service::WorkforceService;
use crate::workforce::workforce_router;

#[tokio::test]
async fn departments_route_lists_catalog() {
    let (status, body) = json_body(get(router(), "/api/v1/departments").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            "Engineering",
            "Marketing",
            "Sales",
            "Human Resources",
            "Finance",
            "Product",
            "Design",
            "Customer Support"
        ])
    );
}

#[tokio::test]
async fn employees_route_applies_query_filters() {
    let (status, body) = json_body(
        get(
            router(),
            "/api/v1/employees?q=a&departments=Engineering,Sales&ratings=2,5",
        )
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<u64> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|employee| employee["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![2, 10, 160]);
    assert_eq!(body[0]["department"], Value::from("Sales"));
    assert_eq!(body[0]["performanceRating"], Value::from(2));
}

#[tokio::test]
async fn employees_route_rejects_unknown_department() {
    let (status, body) =
        json_body(get(router(), "/api/v1/employees?departments=Legal").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("unknown department"));
}

#[tokio::test]
async fn profile_route_returns_history_for_reference_date() {
    let (status, body) = json_body(get(router(), "/api/v1/employees/8?today=2025-06-15").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstName"], Value::from("Ava"));
    assert_eq!(body["department"], Value::from("Engineering"));
    let projects = body["projects"].as_array().expect("projects present");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["name"], Value::from("Project I1"));
    assert_eq!(projects[0]["status"], Value::from("completed"));
    assert_eq!(projects[0]["startDate"], Value::from("2025-04-15"));
    assert_eq!(projects[0]["endDate"], Value::from("2025-04-15"));
    assert_eq!(body["feedbacks"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn profile_route_maps_errors() {
    let (status, _) = json_body(get(router(), "/api/v1/employees/404").await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = json_body(get(router(), "/api/v1/employees/-3").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("invalid identifier"));

    let (status, _) = json_body(get(router(), "/api/v1/employees/2.5").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = json_body(get(router(), "/api/v1/derivations/1e3").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        json_body(get(router(), "/api/v1/employees/8?today=15/06/2025").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn derivation_route_serves_any_identifier() {
    let (status, body) =
        json_body(get(router(), "/api/v1/derivations/10?today=2025-06-15").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], Value::from(10));
    assert_eq!(body["department"], Value::from("Sales"));
    assert_eq!(body["performanceRating"], Value::from(2));
    assert_eq!(body["projects"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["feedbacks"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn analytics_route_summarizes_roster() {
    let (status, body) = json_body(get(router(), "/api/v1/analytics").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["overview"]["totalEmployees"], Value::from(6));
    assert_eq!(body["departments"][0]["department"], Value::from("Marketing"));
    assert_eq!(body["departments"][0]["averageRating"], json!(1.0));
    assert_eq!(body["departments"][0]["employeeCount"], Value::from(2));
    assert_eq!(body["departments"][0]["bandLabel"], Value::from("Critical"));
}

#[tokio::test]
async fn analytics_route_reports_directory_outage() {
    let router = workforce_router(Arc::new(WorkforceService::new(Arc::new(OfflineDirectory))));
    let (status, body) = json_body(get(router, "/api/v1/analytics").await).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], Value::from("directory unavailable: upstream offline"));
}
