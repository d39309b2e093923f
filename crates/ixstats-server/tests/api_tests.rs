//! Integration tests for the dashboard API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection, database, or cache.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use ixstats_server::router::build_router;
use ixstats_server::seed::seed_demo_countries;
use ixstats_server::state::AppState;
use ixstats_types::CountryId;

/// Build an app state with the demo roster seeded.
async fn make_test_state() -> Arc<AppState> {
    let state = Arc::new(AppState::new());
    {
        let mut dashboard = state.dashboard.write().await;
        seed_demo_countries(&mut dashboard).unwrap();
    }
    state
}

/// Find a seeded country's ID by slug.
async fn country_id(state: &Arc<AppState>, slug: &str) -> CountryId {
    let dashboard = state.dashboard.read().await;
    dashboard
        .countries
        .values()
        .find(|e| e.country.slug == slug)
        .map(|e| e.country.id)
        .unwrap()
}

/// Issue a request against a fresh router for the given state.
async fn request(
    state: &Arc<AppState>,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let router = build_router(Arc::clone(state));
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// ---------------------------------------------------------------------------
// Status page and time
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_serves_html() {
    let state = make_test_state().await;
    let router = build_router(Arc::clone(&state));
    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn time_reports_default_multiplier() {
    let state = make_test_state().await;
    let (status, body) = request(&state, Method::GET, "/api/time", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["multiplier"], 4.0);
    assert_eq!(body["paused"], false);
    assert!(body["formatted"].as_str().unwrap().ends_with("ILT"));
}

#[tokio::test]
async fn multiplier_can_be_overridden_and_cleared() {
    let state = make_test_state().await;

    let (status, body) = request(
        &state,
        Method::POST,
        "/api/time/multiplier",
        Some(json!({"multiplier": 2.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["multiplier"], 2.0);

    // Pause.
    let (status, body) = request(
        &state,
        Method::POST,
        "/api/time/multiplier",
        Some(json!({"multiplier": 0.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paused"], true);

    // Clear back to base.
    let (status, body) = request(
        &state,
        Method::POST,
        "/api/time/multiplier",
        Some(json!({"multiplier": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["multiplier"], 4.0);
}

#[tokio::test]
async fn negative_multiplier_is_rejected() {
    let state = make_test_state().await;
    let (status, _) = request(
        &state,
        Method::POST,
        "/api/time/multiplier",
        Some(json!({"multiplier": -1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Countries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn countries_list_includes_seeds() {
    let state = make_test_state().await;
    let (status, body) = request(&state, Method::GET, "/api/countries", None).await;
    assert_eq!(status, StatusCode::OK);

    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert!(list
        .iter()
        .any(|c| c["country"]["slug"] == "urcea" && c["risk"] == "Stable"));
}

#[tokio::test]
async fn country_detail_includes_derived_state() {
    let state = make_test_state().await;
    let id = country_id(&state, "urcea").await;

    let (status, body) = request(
        &state,
        Method::GET,
        &format!("/api/countries/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country"]["economic_tier"], "Strong");
    assert!(body["state"]["effectiveness"]["overall"].as_f64().unwrap() > 0.0);
    assert_eq!(body["components"].as_array().unwrap().len(), 6);
    assert_eq!(body["vault_balance"], "10000");
    // Positive growth compounds the projection above today's GDP.
    assert!(
        body["gdp_projection"].as_f64().unwrap() > body["country"]["gdp"].as_f64().unwrap()
    );
}

#[tokio::test]
async fn unknown_country_is_404_and_bad_uuid_is_400() {
    let state = make_test_state().await;

    let missing = CountryId::new();
    let (status, _) = request(
        &state,
        Method::GET,
        &format!("/api/countries/{missing}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(&state, Method::GET, "/api/countries/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Component selection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn replacing_components_recomputes_state() {
    let state = make_test_state().await;
    let id = country_id(&state, "burgundie").await;

    let (status, body) = request(
        &state,
        Method::PUT,
        &format!("/api/countries/{id}/components"),
        Some(json!({"components": ["RuleOfLaw", "IndependentJudiciary"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["components"].as_array().unwrap().len(), 2);
    // RuleOfLaw + IndependentJudiciary synergize to the clamp.
    assert_eq!(body["state"]["effectiveness"]["overall"], 100.0);
}

#[tokio::test]
async fn oversized_selection_is_rejected() {
    let state = make_test_state().await;
    let id = country_id(&state, "urcea").await;

    let components: Vec<&str> = vec![
        "CentralizedPower",
        "FederalSystem",
        "ConfederateSystem",
        "UnitarySystem",
        "DemocraticProcess",
        "AutocraticProcess",
        "TechnocraticProcess",
        "ConsensusProcess",
        "OligarchicProcess",
        "ElectoralLegitimacy",
        "TraditionalLegitimacy",
        "PerformanceLegitimacy",
        "CharismaticLegitimacy",
    ];
    let (status, _) = request(
        &state,
        Method::PUT,
        &format!("/api/countries/{id}/components"),
        Some(json!({"components": components})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_component_name_is_rejected() {
    let state = make_test_state().await;
    let id = country_id(&state, "urcea").await;

    let (status, _) = request(
        &state,
        Method::PUT,
        &format!("/api/countries/{id}/components"),
        Some(json!({"components": ["MinistryOfSillyWalks"]})),
    )
    .await;
    // Serde rejects the unknown variant before the handler runs.
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn severe_conflict_raises_a_notification() {
    let state = make_test_state().await;
    let id = country_id(&state, "urcea").await;

    let (status, _) = request(
        &state,
        Method::PUT,
        &format!("/api/countries/{id}/components"),
        Some(json!({"components": ["DemocraticProcess", "AutocraticProcess"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request(&state, Method::GET, "/api/notifications?unread=true", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert!(list
        .iter()
        .any(|n| n["level"] == "Critical" && n["title"] == "Severe component conflict"));
}

#[tokio::test]
async fn selection_change_is_broadcast() {
    let state = make_test_state().await;
    let id = country_id(&state, "caphiria").await;
    let mut rx = state.subscribe();

    let (status, _) = request(
        &state,
        Method::PUT,
        &format!("/api/countries/{id}/components"),
        Some(json!({"components": ["RuleOfLaw"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let update = rx.recv().await.unwrap();
    assert_eq!(update.country_id, id);
    assert_eq!(update.state.effectiveness.overall, 90.0);
}

// ---------------------------------------------------------------------------
// Report projections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn report_projections_serve_each_section() {
    let state = make_test_state().await;
    let id = country_id(&state, "urcea").await;

    let (status, body) = request(
        &state,
        Method::GET,
        &format!("/api/countries/{id}/effectiveness"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["overall"].as_f64().unwrap() > 0.0);
    assert!(!body["synergies"].as_array().unwrap().is_empty());

    let (status, body) = request(
        &state,
        Method::GET,
        &format!("/api/countries/{id}/tax"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["collection_efficiency"].as_f64().unwrap() > 65.0);

    let (status, body) = request(
        &state,
        Method::GET,
        &format!("/api/countries/{id}/stability"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk"], "Stable");

    let (status, body) = request(
        &state,
        Method::GET,
        &format!("/api/countries/{id}/intelligence"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

// ---------------------------------------------------------------------------
// Vault
// ---------------------------------------------------------------------------

#[tokio::test]
async fn vault_deposit_and_withdraw_round_trip() {
    let state = make_test_state().await;
    let id = country_id(&state, "urcea").await;

    let (status, body) = request(
        &state,
        Method::POST,
        &format!("/api/countries/{id}/vault"),
        Some(json!({"kind": "deposit", "amount": "250", "reason": "GRANT"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], "10250");

    let (status, body) = request(
        &state,
        Method::POST,
        &format!("/api/countries/{id}/vault"),
        Some(json!({"kind": "withdraw", "amount": "10250", "reason": "CASHOUT"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], "0");

    // One more credit would now overdraw.
    let (status, _) = request(
        &state,
        Method::POST,
        &format!("/api/countries/{id}/vault"),
        Some(json!({"kind": "withdraw", "amount": "1", "reason": "CASHOUT"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vault_transfer_credits_the_counterparty() {
    let state = make_test_state().await;
    let sender = country_id(&state, "caphiria").await;
    let receiver = country_id(&state, "burgundie").await;

    let (status, body) = request(
        &state,
        Method::POST,
        &format!("/api/countries/{sender}/vault"),
        Some(json!({
            "kind": "transfer",
            "amount": "1000",
            "reason": "WAR_REPARATIONS",
            "counterparty": receiver,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], "9000");

    let (status, body) = request(
        &state,
        Method::GET,
        &format!("/api/countries/{receiver}/vault"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], "11000");
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.last().unwrap()["entry_type"], "Transfer");
}

#[tokio::test]
async fn vault_history_is_ordered_and_consistent() {
    let state = make_test_state().await;
    let id = country_id(&state, "urcea").await;

    let (status, body) = request(
        &state,
        Method::GET,
        &format!("/api/countries/{id}/vault"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["reason"], "INITIAL_ALLOCATION");
    assert_eq!(body["balance"], entries[0]["balance_after"]);
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn notifications_mark_read_flow() {
    let state = make_test_state().await;
    let id = country_id(&state, "urcea").await;

    // Provoke a critical-conflict notification.
    let (_, _) = request(
        &state,
        Method::PUT,
        &format!("/api/countries/{id}/components"),
        Some(json!({"components": ["ElectoralLegitimacy", "AutocraticProcess"]})),
    )
    .await;

    let (_, body) = request(&state, Method::GET, "/api/notifications", None).await;
    let notification_id = body.as_array().unwrap()[0]["id"].as_str().unwrap().to_owned();

    let (status, body) = request(
        &state,
        Method::POST,
        &format!("/api/notifications/{notification_id}/read"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["read"], true);

    // The unread filter no longer returns it.
    let (_, body) = request(&state, Method::GET, "/api/notifications?unread=true", None).await;
    assert!(!body
        .as_array()
        .unwrap()
        .iter()
        .any(|n| n["id"] == notification_id.as_str()));

    // Marking an unknown notification is a 404.
    let ghost = uuid::Uuid::now_v7();
    let (status, _) = request(
        &state,
        Method::POST,
        &format!("/api/notifications/{ghost}/read"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
