use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn setup_test_app() -> axum::Router {
    let store = common::setup_seeded_store().await;
    shiproute::routes::create_router(common::test_state(&store))
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn optimize_body(departure: &str, destination: &str) -> Value {
    json!({
        "departurePort": departure,
        "destinationPort": destination,
        "parameters": {"fuelEfficiency": 70, "travelTime": 50, "routeSafety": 80}
    })
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = setup_test_app().await;

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["database"], "ok");
    assert_eq!(json["checks"]["port_count"], 10);
    assert_eq!(json["checks"]["voyage_count"], 0);
}

#[tokio::test]
async fn test_list_ports() {
    let app = setup_test_app().await;

    let (status, json) = send(&app, "GET", "/ports", None).await;

    assert_eq!(status, StatusCode::OK);
    let ports = json.as_array().unwrap();
    assert_eq!(ports.len(), 10);
    assert_eq!(ports[0]["name"], "Port of Sydney");
    assert_eq!(ports[0]["country"], "Australia");
    assert_eq!(ports[0]["coordinates"]["lat"], -33.8688);
    assert!(ports[0]["_id"].is_string());
}

#[tokio::test]
async fn test_optimize_sydney_to_tokyo() {
    let app = setup_test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/optimize-route",
        Some(optimize_body("Port of Sydney", "Port of Tokyo")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["departurePort"], "Port of Sydney");
    assert_eq!(json["destinationPort"], "Port of Tokyo");
    assert_eq!(
        json["parameters"],
        json!({"fuelEfficiency": 70, "travelTime": 50, "routeSafety": 80})
    );
    assert_eq!(json["distance"], 4226);
    assert_eq!(json["estimatedTime"], 211);
    assert_eq!(json["fuelConsumption"], 211);

    let route = json["route"].as_array().unwrap();
    assert_eq!(route.len(), 5);
    assert_eq!(route[0], json!({"latitude": -33.8688, "longitude": 151.2093}));
    assert_eq!(route[4], json!({"latitude": 35.6762, "longitude": 139.6503}));

    // The response carries no savings/efficiency; the stored voyage does
    assert!(json.get("savings").is_none());
    let (_, voyages) = send(&app, "GET", "/voyages", None).await;
    let voyages = voyages.as_array().unwrap();
    assert_eq!(voyages.len(), 1);
    assert_eq!(voyages[0]["savings"], 10564);
    assert_eq!(voyages[0]["efficiency"], common::TEST_EFFICIENCY);
    assert_eq!(voyages[0]["status"], "completed");
    assert_eq!(voyages[0]["route"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_optimize_unknown_port_is_not_found() {
    let app = setup_test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/optimize-route",
        Some(optimize_body("Port of Atlantis", "Port of Tokyo")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Port not found");

    let (status, _) = send(
        &app,
        "POST",
        "/optimize-route",
        Some(optimize_body("Port of Sydney", "Port of Atlantis")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Nothing was stored
    let (_, voyages) = send(&app, "GET", "/voyages", None).await;
    assert!(voyages.as_array().unwrap().is_empty());
    let (_, analytics) = send(&app, "GET", "/analytics", None).await;
    assert_eq!(analytics["routesOptimized"], 0);
}

#[tokio::test]
async fn test_optimize_rejects_out_of_range_weights() {
    let app = setup_test_app().await;

    let body = json!({
        "departurePort": "Port of Sydney",
        "destinationPort": "Port of Tokyo",
        "parameters": {"fuelEfficiency": 170, "travelTime": 50, "routeSafety": 80}
    });
    let (status, json) = send(&app, "POST", "/optimize-route", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("fuelEfficiency"));
}

#[tokio::test]
async fn test_optimize_rejects_malformed_body() {
    let app = setup_test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/optimize-route",
        Some(json!({"departurePort": "Port of Sydney"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_repeated_optimization_creates_new_voyages() {
    let app = setup_test_app().await;

    for _ in 0..2 {
        let (status, _) = send(
            &app,
            "POST",
            "/optimize-route",
            Some(optimize_body("Port of Hamburg", "Port of New York")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, voyages) = send(&app, "GET", "/voyages", None).await;
    let voyages = voyages.as_array().unwrap();
    assert_eq!(voyages.len(), 2);
    assert_ne!(voyages[0]["_id"], voyages[1]["_id"]);
}

#[tokio::test]
async fn test_analytics_on_empty_collection() {
    let app = setup_test_app().await;

    let (status, json) = send(&app, "GET", "/analytics", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalSavings"], 0);
    assert_eq!(json["averageFuelEfficiency"], 0.0);
    assert_eq!(json["onTimeDeliveries"], 0.0);
    assert_eq!(json["routesOptimized"], 0);
    assert_eq!(json["recentVoyages"], json!([]));
}

#[tokio::test]
async fn test_analytics_recent_voyages_newest_first() {
    let app = setup_test_app().await;

    for i in 1..=5 {
        let status = if i == 2 { "in-progress" } else { "completed" };
        let body = json!({
            "departurePort": format!("Port {i}"),
            "destinationPort": "Port of Dubai",
            "savings": i * 1000,
            "efficiency": 80 + i,
            "status": status
        });
        let (code, _) = send(&app, "POST", "/voyages", Some(body)).await;
        assert_eq!(code, StatusCode::CREATED);
    }

    let (status, json) = send(&app, "GET", "/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["routesOptimized"], 5);
    assert_eq!(json["totalSavings"], 15000);
    assert_eq!(json["averageFuelEfficiency"], 83.0);
    assert_eq!(json["onTimeDeliveries"], 80.0);

    let recent = json["recentVoyages"].as_array().unwrap();
    let routes: Vec<&str> = recent.iter().map(|r| r["route"].as_str().unwrap()).collect();
    assert_eq!(
        routes,
        vec![
            "Port 5 → Port of Dubai",
            "Port 4 → Port of Dubai",
            "Port 3 → Port of Dubai"
        ]
    );
    assert_eq!(recent[0]["savings"], 5000);
    assert!(recent[0]["id"].is_string());
}

#[tokio::test]
async fn test_create_voyage_applies_defaults() {
    let app = setup_test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/voyages",
        Some(json!({
            "departurePort": "Port of Shanghai",
            "destinationPort": "Port of Los Angeles"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(json["_id"].is_string());
    assert_eq!(json["status"], "completed");
    assert_eq!(json["savings"], 0);
    assert_eq!(json["efficiency"], 0);
    assert_eq!(json["route"], json!([]));
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_voyage_validation() {
    let app = setup_test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/voyages",
        Some(json!({"departurePort": "", "destinationPort": "Port of Tokyo"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/voyages",
        Some(json!({
            "departurePort": "Port of Tokyo",
            "destinationPort": "Port of Sydney",
            "status": "sunk"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_voyage_by_id() {
    let app = setup_test_app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/voyages",
        Some(json!({
            "departurePort": "Port of Rotterdam",
            "destinationPort": "Port of Singapore",
            "distance": 8300,
            "status": "in-progress"
        })),
    )
    .await;
    let id = created["_id"].as_str().unwrap();

    let (status, json) = send(&app, "GET", &format!("/voyages/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, created);

    let (status, json) = send(
        &app,
        "GET",
        "/voyages/7f8e5a52-3c1f-4a55-9d5e-2f2b7e0c9a11",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Voyage not found");

    let (status, _) = send(&app, "GET", "/voyages/not-an-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_voyages_newest_first() {
    let app = setup_test_app().await;

    for (label, created_at) in [
        ("middle", "2025-06-02T12:00:00Z"),
        ("oldest", "2025-06-01T12:00:00Z"),
        ("newest", "2025-06-03T12:00:00Z"),
    ] {
        let (status, _) = send(
            &app,
            "POST",
            "/voyages",
            Some(json!({
                "departurePort": label,
                "destinationPort": "Port of Hong Kong",
                "createdAt": created_at
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = send(&app, "GET", "/voyages", None).await;
    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["departurePort"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn test_create_voyage_rejects_out_of_range_figures() {
    let app = setup_test_app().await;

    for body in [
        json!({"departurePort": "A", "destinationPort": "B", "savings": -1}),
        json!({"departurePort": "A", "destinationPort": "B", "efficiency": 101}),
        json!({"departurePort": "A", "destinationPort": "B",
               "route": [{"latitude": 0.0, "longitude": 200.0}]}),
    ] {
        let (status, json) = send(&app, "POST", "/voyages", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    let (_, voyages) = send(&app, "GET", "/voyages", None).await;
    assert!(voyages.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_analytics_survives_huge_savings() {
    let app = setup_test_app().await;

    for savings in [i64::MAX, 1] {
        let (status, _) = send(
            &app,
            "POST",
            "/voyages",
            Some(json!({
                "departurePort": "A",
                "destinationPort": "B",
                "savings": savings,
                "efficiency": 90
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = send(&app, "GET", "/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalSavings"], i64::MAX);
    assert_eq!(json["averageFuelEfficiency"], 90.0);
    assert_eq!(json["routesOptimized"], 2);
}
