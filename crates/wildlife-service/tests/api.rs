use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use wildlife_service::app;
use wildlife_service_shared::test_utils::{fixture_state, Workspace, SCENARIO_DOCUMENT};
use wildlife_service_shared::{AppState, MetricsConfig};

const GENERIC_ERROR: &str = "Unable to load sightings data. Please try again later.";

const API_ROUTES: &[&str] = &[
    "/api/sightings",
    "/api/sightings/verified",
    "/api/sightings/species-list",
    "/api/sightings/habitat/forest",
    "/api/sightings/search/eagle",
    "/api/sightings/find-index/moose",
    "/api/sightings/recent",
];

fn server(state: AppState) -> TestServer {
    TestServer::new(app(state, &MetricsConfig::default())).expect("test server starts")
}

#[tokio::test]
async fn all_sightings_in_load_order() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let response = server(workspace.state()).get("/api/sightings").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn verified_only() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let body: Value = server(workspace.state())
        .get("/api/sightings/verified")
        .await
        .json();

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["species"], "Bald Eagle");
    assert!(records.iter().all(|s| s["verified"] == true));
}

#[tokio::test]
async fn species_list_scenario() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let response = server(workspace.state())
        .get("/api/sightings/species-list")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!(["Bald Eagle", "Moose"]));
}

#[tokio::test]
async fn search_eagle_scenario() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let response = server(workspace.state())
        .get("/api/sightings/search/eagle")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": 1,
            "species": "Bald Eagle",
            "location": "Park A",
            "habitat": "forest",
            "date": "2024-05-01",
            "verified": true
        })
    );
}

#[tokio::test]
async fn search_eagle_not_found() {
    let workspace = Workspace::with_document(
        r#"[{"id":1,"species":"Moose","habitat":"forest","date":"2024-01-01"}]"#,
    );
    let response = server(workspace.state())
        .get("/api/sightings/search/eagle")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "No eagle sighting found."})
    );
}

#[tokio::test]
async fn find_index_scenario() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let response = server(workspace.state())
        .get("/api/sightings/find-index/moose")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["index"], 1);
    assert_eq!(body["sighting"]["id"], 2);
    assert_eq!(body["sighting"]["species"], "Moose");
}

#[tokio::test]
async fn find_index_is_case_sensitive() {
    let workspace = Workspace::with_document(
        r#"{"sightings":[{"id":1,"species":"moose","habitat":"wetland","date":"2024-06-01"}]}"#,
    );
    let response = server(workspace.state())
        .get("/api/sightings/find-index/moose")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({"index": -1, "message": "Moose not found."})
    );
}

#[tokio::test]
async fn empty_document_forest_scenario() {
    let workspace = Workspace::with_document("[]");
    let response = server(workspace.state())
        .get("/api/sightings/habitat/forest")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"habitat": "forest", "sightings": [], "count": 0})
    );
}

#[tokio::test]
async fn forest_from_fixture() {
    let body: Value = server(fixture_state())
        .get("/api/sightings/habitat/forest")
        .await
        .json();

    assert_eq!(body["habitat"], "forest");
    assert_eq!(body["count"], 3);
    let sightings = body["sightings"].as_array().unwrap();
    assert_eq!(sightings.len(), 3);
    assert!(sightings.iter().all(|s| s["habitat"] == "forest"));
}

#[tokio::test]
async fn recent_returns_reduced_records() {
    let body: Value = server(fixture_state())
        .get("/api/sightings/recent")
        .await
        .json();

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);

    let ids: Vec<i64> = records.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![6, 3, 2]);

    // Fixture record 6 carries a "notes" field that the projection drops.
    let keys: Vec<&String> = records[0].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 6);
    assert!(records[0].get("notes").is_none());
}

#[tokio::test]
async fn recent_with_fewer_records() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let body: Value = server(workspace.state())
        .get("/api/sightings/recent")
        .await
        .json();

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], 2);
    assert_eq!(records[1]["id"], 1);
}

#[tokio::test]
async fn missing_document_is_generic_500_everywhere() {
    let workspace = Workspace::without_document();
    let server = server(workspace.state());

    for route in API_ROUTES {
        let response = server.get(route).await;
        assert_eq!(
            response.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "route {route}"
        );
        let body: Value = response.json();
        assert_eq!(body, json!({"error": GENERIC_ERROR}), "route {route}");
        assert!(!response.text().contains("sightings.json"));
    }
}

#[tokio::test]
async fn malformed_document_is_generic_500() {
    let workspace = Workspace::with_document(r#"{"records": []}"#);
    let response = server(workspace.state()).get("/api/sightings").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>(), json!({"error": GENERIC_ERROR}));
}

#[tokio::test]
async fn unknown_route_is_plain_text_404() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let server = server(workspace.state());

    for path in ["/api/nothing", "/api/sightings/search/wolf", "/missing.css"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "path {path}");
        assert_eq!(response.text(), "Route not found.");
    }
}

#[tokio::test]
async fn wrong_method_is_route_not_found() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let response = server(workspace.state()).post("/api/sightings").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Route not found.");
}

#[tokio::test]
async fn serves_static_assets() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT)
        .with_public_file("css/site.css", "body { color: green; }");
    let response = server(workspace.state()).get("/css/site.css").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "body { color: green; }");
}

#[tokio::test]
async fn index_page() {
    let workspace =
        Workspace::with_document(SCENARIO_DOCUMENT).with_index("<h1>Wildlife Tracker</h1>");
    let response = server(workspace.state()).get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "<h1>Wildlife Tracker</h1>");
}

#[tokio::test]
async fn missing_index_page() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let response = server(workspace.state()).get("/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        "index.html not found. Please check the views folder."
    );
}

#[tokio::test]
async fn health_probes() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let server = server(workspace.state());

    let live = server.get("/health/live").await;
    assert_eq!(live.status_code(), StatusCode::OK);

    let ready: Value = server.get("/health/ready").await.json();
    assert_eq!(ready["status"], "ok");
    assert_eq!(ready["sightings_loaded"], 2);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let workspace = Workspace::with_document(SCENARIO_DOCUMENT);
    let response = server(workspace.state())
        .get("/api/sightings")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-42"),
        )
        .await;

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "trace-42"
    );
}

#[tokio::test]
async fn document_is_reread_per_request() {
    let workspace = Workspace::with_document("[]");
    let server = server(workspace.state());

    let before: Value = server.get("/api/sightings").await.json();
    assert_eq!(before, json!([]));

    std::fs::write(&workspace.config.data_path, SCENARIO_DOCUMENT).unwrap();
    let after: Value = server.get("/api/sightings").await.json();
    assert_eq!(after.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn irregular_records_are_served_unchanged() {
    let document = r#"[{"species":"Moose","id":1,"habitat":"forest","date":"2024-01-01"},{"id":2,"species":"Bald Eagle","location":null,"habitat":"forest","date":1717200000000,"verified":"yes"},{"id":3,"species":null,"habitat":7,"verified":true}]"#;
    let workspace = Workspace::with_document(document);
    let server = server(workspace.state());

    let all = server.get("/api/sightings").await;
    assert_eq!(all.status_code(), StatusCode::OK);
    assert_eq!(all.text(), document);

    let verified: Value = server.get("/api/sightings/verified").await.json();
    assert_eq!(verified, json!([{"id":3,"species":null,"habitat":7,"verified":true}]));

    let species: Value = server.get("/api/sightings/species-list").await.json();
    assert_eq!(species, json!(["Moose", "Bald Eagle", null]));

    let forest: Value = server.get("/api/sightings/habitat/forest").await.json();
    assert_eq!(forest["count"], 2);

    let eagle: Value = server.get("/api/sightings/search/eagle").await.json();
    assert_eq!(eagle["location"], Value::Null);
    assert!(eagle.get("verified").is_some());

    let first = server.get("/api/sightings/find-index/moose").await;
    assert_eq!(
        first.text(),
        r#"{"index":0,"sighting":{"species":"Moose","id":1,"habitat":"forest","date":"2024-01-01"}}"#
    );

    // 1717200000000 ms is 2024-06-01; record 3 has no date and sorts last.
    let recent: Value = server.get("/api/sightings/recent").await.json();
    assert_eq!(
        recent,
        json!([
            {"id":2,"species":"Bald Eagle","location":null,"habitat":"forest","date":1717200000000_i64,"verified":"yes"},
            {"id":1,"species":"Moose","habitat":"forest","date":"2024-01-01"},
            {"id":3,"species":null,"habitat":7,"verified":true}
        ])
    );
}
