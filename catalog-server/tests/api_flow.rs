//! End-to-end flows through the HTTP router (in-memory catalog)

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use catalog_server::api::build_app;
use catalog_server::{Config, FallbackPolicy, MemoryCatalog, ServerState};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const VENDOR: &str = "vendor-1";

fn app_with(fallback: FallbackPolicy) -> Router {
    let mut config = Config::default();
    config.discount_fallback = fallback;
    build_app(ServerState::new(config, Arc::new(MemoryCatalog::new())))
}

fn app() -> Router {
    app_with(FallbackPolicy::Zero)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_pack(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        &format!("/api/vendors/{VENDOR}/packs"),
        Some(json!({ "name": name, "price": 0.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_str().unwrap().to_string()
}

fn discount_form(original_price: &str, discount_type: &str, discount_value: &str) -> Value {
    json!({
        "title": "Lunch deal",
        "original_price": original_price,
        "discount_type": discount_type,
        "discount_value": discount_value,
    })
}

#[tokio::test]
async fn test_health_sets_request_id() {
    let app = app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let (_, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_preview_percentage_discount() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/pricing/discount/preview",
        Some(json!({
            "original_price": 1000.0,
            "discount_type": "percentage",
            "discount_value": 20.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["discounted_price"], 800.0);
    assert_eq!(body["warning"], Value::Null);
    assert_eq!(body["submittable"], true);
}

#[tokio::test]
async fn test_preview_fixed_over_original_warns() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/pricing/discount/preview",
        Some(json!({
            "original_price": 100.0,
            "discount_type": "fixed",
            "discount_value": 150.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["discounted_price"], 0.0);
    assert_eq!(body["warning"], "FIXED_OVER_ORIGINAL");
    assert_eq!(
        body["warning_message"],
        "Fixed discount cannot exceed original price."
    );
    assert_eq!(body["submittable"], false);
}

#[tokio::test]
async fn test_preview_uses_configured_fallback() {
    let (_, body) = send(
        &app_with(FallbackPolicy::OriginalPrice),
        "POST",
        "/api/pricing/discount/preview",
        Some(json!({
            "original_price": 50.0,
            "discount_type": "percentage",
            "discount_value": 120.0,
        })),
    )
    .await;
    assert_eq!(body["discounted_price"], 50.0);
    assert_eq!(body["warning"], "PERCENTAGE_OVER_HUNDRED");
}

#[tokio::test]
async fn test_stateless_packaging_resolve() {
    let (status, body) = send(
        &app(),
        "POST",
        "/api/pricing/packaging/resolve",
        Some(json!({
            "needs_container": true,
            "extra_portion": false,
            "available_packs": [
                { "id": "p1", "name": "Medium Container", "price": 0.3 },
                { "id": "p2", "name": "Big Container", "price": 0.5 },
            ],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_pack_id"], "p1");
    assert_eq!(body["missing_pack_kind"], "none");
}

#[tokio::test]
async fn test_pack_names_are_unique() {
    let app = app();
    create_pack(&app, "Medium Container").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/vendors/{VENDOR}/packs"),
        Some(json!({ "name": "Medium Container", "price": 0.3 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 5003);

    let (_, packs) = send(&app, "GET", &format!("/api/vendors/{VENDOR}/packs"), None).await;
    assert_eq!(packs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_pack_is_not_found() {
    let (status, body) = send(
        &app(),
        "DELETE",
        &format!("/api/vendors/{VENDOR}/packs/nope"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 5001);
}

#[tokio::test]
async fn test_vendor_packaging_resolve_reports_missing_big() {
    let app = app();
    create_pack(&app, "Medium Container").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/vendors/{VENDOR}/packaging/resolve"),
        Some(json!({ "needs_container": true, "extra_portion": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_pack_id"], Value::Null);
    assert_eq!(body["missing_pack_kind"], "big");
}

#[tokio::test]
async fn test_menu_item_blocked_until_container_exists() {
    let app = app();
    let uri = format!("/api/vendors/{VENDOR}/menu-items");
    let form = json!({
        "name": "Jollof rice",
        "price": "12.50",
        "needs_container": true,
        "extra_portion": true,
        "extras": ["sauce-1"],
    });

    let (status, body) = send(&app, "POST", &uri, Some(form.clone())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 5002);
    assert!(body["message"].as_str().unwrap().contains("Big Container"));

    let big_id = create_pack(&app, "Big Container").await;
    let (status, body) = send(&app, "POST", &uri, Some(form)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["price"], 12.5);
    assert_eq!(body["extras"], json!(["sauce-1", big_id]));

    let item_id = body["id"].as_str().unwrap().to_string();

    let (_, items) = send(&app, "GET", &uri, None).await;
    assert_eq!(items.as_array().unwrap().len(), 1);

    let (status, fetched) = send(&app, "GET", &format!("/api/menu-items/{item_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Jollof rice");
}

#[tokio::test]
async fn test_unknown_menu_item_is_not_found() {
    let (status, body) = send(&app(), "GET", "/api/menu-items/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn test_menu_item_without_container_needs_no_pack() {
    let (status, body) = send(
        &app(),
        "POST",
        &format!("/api/vendors/{VENDOR}/menu-items"),
        Some(json!({ "name": "Suya", "price": "4", "needs_container": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["extras"], json!([]));
}

#[tokio::test]
async fn test_discount_create_edit_and_approve() {
    let app = app();
    let (status, created) = send(
        &app,
        "POST",
        &format!("/api/vendors/{VENDOR}/discounts"),
        Some(discount_form("1000", "percentage", "20")),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{created}");
    assert_eq!(created["discounted_price"], 800.0);
    assert_eq!(created["is_approved"], false);
    let id = created["id"].as_str().unwrap().to_string();

    // Edit with an over-limit fixed amount is blocked
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/discounts/{id}"),
        Some(discount_form("100", "fixed", "150")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4002);
    assert_eq!(body["message"], "Fixed discount cannot exceed original price.");

    // Approve, then edit: approval survives the edit
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/discounts/{id}/approval"),
        Some(json!({ "is_approved": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_approved"], true);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/discounts/{id}"),
        Some(discount_form("99.99", "fixed", "10")),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["discounted_price"], 89.99);
    assert_eq!(body["discount_type"], "fixed");
    assert_eq!(body["is_approved"], true);

    let (_, fetched) = send(&app, "GET", &format!("/api/discounts/{id}"), None).await;
    assert_eq!(fetched["discounted_price"], 89.99);

    let (_, list) = send(&app, "GET", &format!("/api/vendors/{VENDOR}/discounts"), None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_incomplete_discount_is_blocked() {
    let (status, body) = send(
        &app(),
        "POST",
        &format!("/api/vendors/{VENDOR}/discounts"),
        Some(discount_form("1000", "percentage", "")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4003);
    assert_eq!(body["details"]["field"], "discount_value");
}

#[tokio::test]
async fn test_already_expired_discount_is_rejected() {
    let mut form = discount_form("20", "percentage", "10");
    form["expires_at"] = json!(shared::util::now_millis() - 1_000);

    let (status, body) = send(
        &app(),
        "POST",
        &format!("/api/vendors/{VENDOR}/discounts"),
        Some(form),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4004);
}

#[tokio::test]
async fn test_expired_discount_cannot_be_approved() {
    let app = app();
    let mut form = discount_form("20", "percentage", "10");
    form["expires_at"] = json!(shared::util::now_millis() + 100);

    let (status, created) = send(
        &app,
        "POST",
        &format!("/api/vendors/{VENDOR}/discounts"),
        Some(form),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{created}");
    let id = created["id"].as_str().unwrap().to_string();

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/discounts/{id}/approval"),
        Some(json!({ "is_approved": true })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4004);
}

#[tokio::test]
async fn test_unknown_discount_is_not_found() {
    let (status, body) = send(&app(), "GET", "/api/discounts/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_preview_keeps_limits_for_huge_values() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/discount/preview",
        Some(json!({
            "original_price": 1000.0,
            "discount_type": "percentage",
            "discount_value": 1e30,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["warning"], "PERCENTAGE_OVER_HUNDRED");
    assert_eq!(body["discounted_price"], 0.0);
    assert_eq!(body["submittable"], false);

    let (_, body) = send(
        &app,
        "POST",
        "/api/pricing/discount/preview",
        Some(json!({
            "original_price": 1e30,
            "discount_type": "fixed",
            "discount_value": 10.0,
        })),
    )
    .await;
    assert_eq!(body["warning"], Value::Null);
    assert_eq!(body["submittable"], true);
}

#[tokio::test]
async fn test_malformed_amounts_are_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/vendors/{VENDOR}/discounts"),
        Some(discount_form("ten", "fixed", "1")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);
    assert_eq!(body["details"]["field"], "original_price");

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/vendors/{VENDOR}/packs"),
        Some(json!({ "name": "Gift box", "price": 5000000.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
}
