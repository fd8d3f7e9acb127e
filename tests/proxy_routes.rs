//! End-to-end behaviour of the gateway routes against mock upstreams.

use axum::http::StatusCode;
use offplan_gateway::http::handlers::HealthStatus;

mod common;

use common::{client, gateway_config, start_gateway, start_mock_upstream};

#[tokio::test]
async fn test_areas_relays_body_unchanged() {
    let body = r#"{"success":true,"data":[{"name":"Dubai Marina","id":7},{"name":"JVC","id":3}]}"#;
    let backend = start_mock_upstream(200, body).await;
    let listings = start_mock_upstream(200, "[]").await;
    let gateway = start_gateway(gateway_config(&backend, &listings)).await;

    let res = client().get(gateway.url("/api/areas")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["cache-control"],
        "public, s-maxage=1800, stale-while-revalidate"
    );
    assert_eq!(res.headers()["content-type"], "application/json");
    assert_eq!(res.text().await.unwrap(), body);

    let seen = backend.last_request();
    assert_eq!(seen.path, "/api/properties/areas");
    assert_eq!(seen.query, None);
    assert_eq!(seen.headers["content-type"], "application/json");

    gateway.stop();
}

#[tokio::test]
async fn test_sale_statuses_uses_hour_cache_hint() {
    let body = r#"{"success":true,"data":["Off-plan","Ready"]}"#;
    let backend = start_mock_upstream(200, body).await;
    let listings = start_mock_upstream(200, "[]").await;
    let gateway = start_gateway(gateway_config(&backend, &listings)).await;

    let res = client().get(gateway.url("/api/sale-statuses")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["cache-control"],
        "public, s-maxage=3600, stale-while-revalidate"
    );
    assert_eq!(res.text().await.unwrap(), body);
    assert_eq!(backend.last_request().path, "/api/properties/sale-statuses");

    gateway.stop();
}

#[tokio::test]
async fn test_batch_defaults_page_and_limit() {
    let backend = start_mock_upstream(200, r#"{"success":true,"data":[]}"#).await;
    let listings = start_mock_upstream(200, "[]").await;
    let gateway = start_gateway(gateway_config(&backend, &listings)).await;

    let res = client()
        .get(gateway.url("/api/properties/batch-100"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get("cache-control").is_none());

    let seen = backend.last_request();
    assert_eq!(seen.path, "/api/properties/batch-100");
    assert_eq!(seen.query.as_deref(), Some("page=1&limit=100"));

    gateway.stop();
}

#[tokio::test]
async fn test_batch_forwards_page_and_limit() {
    let backend = start_mock_upstream(200, r#"{"success":true,"data":[{"id":1}]}"#).await;
    let listings = start_mock_upstream(200, "[]").await;
    let gateway = start_gateway(gateway_config(&backend, &listings)).await;

    let res = client()
        .get(gateway.url("/api/properties/batch-100?page=3&limit=50"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), r#"{"success":true,"data":[{"id":1}]}"#);
    assert_eq!(backend.last_request().query.as_deref(), Some("page=3&limit=50"));

    gateway.stop();
}

#[tokio::test]
async fn test_points_of_interest_forwards_query_verbatim() {
    let body = r#"{"success":true,"data":{"schools":4}}"#;
    let backend = start_mock_upstream(200, body).await;
    let listings = start_mock_upstream(200, "[]").await;
    let gateway = start_gateway(gateway_config(&backend, &listings)).await;

    let res = client()
        .get(gateway.url("/api/property-monitor/points-of-interest?lat=25.2&lng=55.3"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), body);

    let seen = backend.last_request();
    assert_eq!(seen.path, "/api/property-monitor/points-of-interest");
    assert_eq!(seen.query.as_deref(), Some("lat=25.2&lng=55.3"));

    gateway.stop();
}

#[tokio::test]
async fn test_regions_sends_api_key_and_returns_bare_array() {
    let body = r#"[{"id":1,"name":"Dubai"},{"id":2,"name":"Abu Dhabi"}]"#;
    let backend = start_mock_upstream(200, "{}").await;
    let listings = start_mock_upstream(200, body).await;

    let mut config = gateway_config(&backend, &listings);
    config.listings.api_key = Some("reelly-680ffbdd-FEuCzeraBCN5dtByJeLb8AeCesrTvlFz".into());
    let gateway = start_gateway(config).await;

    let res = client().get(gateway.url("/api/regions")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["cache-control"],
        "public, s-maxage=3600, stale-while-revalidate"
    );
    assert_eq!(res.text().await.unwrap(), body);

    let seen = listings.last_request();
    assert_eq!(seen.path, "/v1/regions");
    assert_eq!(
        seen.headers["x-api-key"],
        "reelly-680ffbdd-FEuCzeraBCN5dtByJeLb8AeCesrTvlFz"
    );
    assert!(backend.requests().is_empty());

    gateway.stop();
}

#[tokio::test]
async fn test_backend_routes_do_not_send_api_key() {
    let backend = start_mock_upstream(200, r#"{"success":true}"#).await;
    let listings = start_mock_upstream(200, "[]").await;
    let gateway = start_gateway(gateway_config(&backend, &listings)).await;

    client().get(gateway.url("/api/areas")).send().await.unwrap();

    assert!(backend.last_request().headers.get("x-api-key").is_none());

    gateway.stop();
}

#[tokio::test]
async fn test_request_id_propagated_upstream_and_echoed() {
    let backend = start_mock_upstream(200, r#"{"success":true}"#).await;
    let listings = start_mock_upstream(200, "[]").await;
    let gateway = start_gateway(gateway_config(&backend, &listings)).await;

    let res = client()
        .get(gateway.url("/api/areas"))
        .header("x-request-id", "req-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "req-42");
    assert_eq!(backend.last_request().headers["x-request-id"], "req-42");

    let res = client().get(gateway.url("/api/areas")).send().await.unwrap();
    let generated = res.headers()["x-request-id"].to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&generated).is_ok());
    assert_eq!(backend.last_request().headers["x-request-id"], generated.as_str());

    gateway.stop();
}

#[tokio::test]
async fn test_health_does_not_touch_upstreams() {
    let backend = start_mock_upstream(200, "{}").await;
    let listings = start_mock_upstream(200, "[]").await;
    let gateway = start_gateway(gateway_config(&backend, &listings)).await;

    let res = client().get(gateway.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let health: HealthStatus = res.json().await.unwrap();
    assert_eq!(health.status, "operational");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    assert!(backend.requests().is_empty());
    assert!(listings.requests().is_empty());

    gateway.stop();
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let backend = start_mock_upstream(200, "{}").await;
    let listings = start_mock_upstream(200, "[]").await;
    let gateway = start_gateway(gateway_config(&backend, &listings)).await;

    let res = client().get(gateway.url("/api/developers")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(backend.requests().is_empty());

    gateway.stop();
}
