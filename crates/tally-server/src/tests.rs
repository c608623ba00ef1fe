//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tally_core::models::ExpenseRecord;
use tower::ServiceExt;

fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

fn setup_test_app() -> Router {
    let db = Database::in_memory().unwrap();
    create_router_with_options(db, ServerConfig::default(), Some(test_today()))
}

fn setup_test_app_with_db(db: Database) -> Router {
    create_router_with_options(db, ServerConfig::default(), Some(test_today()))
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();
    let response = app.oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
}

// ========== Report API Tests ==========

#[tokio::test]
async fn test_report_empty() {
    let app = setup_test_app();
    let response = app.oneshot(get("/api/expenses")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["total_spent"], 0.0);
    assert_eq!(json["top_5_items"].as_array().unwrap().len(), 0);
    assert_eq!(json["highest_spending_category"]["category"], "None");
    assert_eq!(json["highest_spending_category"]["amount"], 0.0);
    assert!(json["highest_spent_item"]["item"].is_null());
    assert_eq!(json["projected_cost"], 0.0);
    assert_eq!(json["current_budget"], 0.0);
    assert_eq!(json["spending_trend"], "steady");
}

#[tokio::test]
async fn test_report_with_data() {
    let db = Database::in_memory().unwrap();
    for (date, item, price, category) in [
        ("2024-03-01", "Coffee", "4.50", "Food"),
        ("2024-03-01", "Coffee", "3.00", "Food"),
        ("2024-03-02", "Book", "20.00", "Leisure"),
    ] {
        db.insert_expense(&ExpenseRecord {
            date: date.into(),
            item: item.into(),
            price: price.into(),
            category: Some(category.into()),
        })
        .unwrap();
    }
    db.set_budget(100.0).unwrap();

    let app = setup_test_app_with_db(db);
    let response = app.oneshot(get("/api/expenses")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["spending_data"]["2024-03-01"], 7.5);
    assert_eq!(json["spending_data"]["2024-03-02"], 20.0);
    assert_eq!(json["monthly_spending"]["2024-03"], 27.5);
    assert_eq!(json["highest_spent_item"]["item"], "Book");
    assert_eq!(json["highest_spent_item"]["amount"], 20.0);
    assert_eq!(json["top_5_items"][0]["item"], "Book");
    assert_eq!(json["top_5_items"][1]["item"], "Coffee");
    assert_eq!(json["top_5_items"][1]["amount"], 7.5);
    assert_eq!(json["highest_spending_category"]["category"], "Leisure");
    assert_eq!(json["category_breakdown"].as_array().unwrap().len(), 2);
    assert_eq!(json["total_spent"], 27.5);
    assert_eq!(json["current_budget"], 100.0);
    assert_eq!(json["budget_remaining"], 72.5);
    assert_eq!(json["daily_spending_rate"], 2.75);
}

#[tokio::test]
async fn test_report_fails_on_malformed_price() {
    let db = Database::in_memory().unwrap();
    db.insert_expense(&ExpenseRecord {
        date: "2024-03-01".into(),
        item: "Broken".into(),
        price: "abc".into(),
        category: None,
    })
    .unwrap();

    let app = setup_test_app_with_db(db);
    let response = app.oneshot(get("/api/expenses")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
}

// ========== Expense Write API Tests ==========

#[tokio::test]
async fn test_create_expense() {
    let db = Database::in_memory().unwrap();
    let app = setup_test_app_with_db(db.clone());

    let body = serde_json::json!({
        "item": "Tea",
        "price": 2.5
    });
    let response = app
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["message"], "Expense added successfully!");
    assert_eq!(json["expense"]["category"], "Other");
    assert_eq!(json["expense"]["date"], "2024-03-10");

    let records = db.list_expenses().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].item, "Tea");
    assert_eq!(records[0].price, "2.5");
}

#[tokio::test]
async fn test_create_expense_string_price_and_explicit_fields() {
    let db = Database::in_memory().unwrap();
    let app = setup_test_app_with_db(db.clone());

    let body = serde_json::json!({
        "item": "Lamp",
        "price": "35.99",
        "category": "Home",
        "date": "2024-02-11"
    });
    let response = app
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let records = db.list_expenses().unwrap();
    assert_eq!(records[0].category.as_deref(), Some("Home"));
    assert_eq!(records[0].date, "2024-02-11");
}

#[tokio::test]
async fn test_create_expense_validation_errors() {
    let db = Database::in_memory().unwrap();

    let bad_bodies = vec![
        serde_json::json!({ "item": "", "price": 3 }),
        serde_json::json!({ "price": 3 }),
        serde_json::json!({ "item": "Tea", "price": 0 }),
        serde_json::json!({ "item": "Tea", "price": -4.2 }),
        serde_json::json!({ "item": "Tea", "price": "lots" }),
        serde_json::json!({ "item": "Tea" }),
        serde_json::json!({ "item": "Tea", "price": true }),
        serde_json::json!({ "item": "Tea", "price": 1, "date": "yesterday" }),
    ];

    for body in bad_bodies {
        let app = setup_test_app_with_db(db.clone());
        let response = app
            .oneshot(json_request("POST", "/api/expenses", body.clone()))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "body should be rejected: {}",
            body
        );
        let json = get_body_json(response).await;
        assert!(json["error"].is_string());
    }

    assert_eq!(db.count_expenses().unwrap(), 0);
}

#[tokio::test]
async fn test_create_expense_malformed_json() {
    let app = setup_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/expenses")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_error_body_has_no_error_prefix() {
    let app = setup_test_app();
    let body = serde_json::json!({ "item": "", "price": 1 });
    let response = app
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Invalid item or price: item is required");
}

#[tokio::test]
async fn test_file_backed_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.db");
    let path = path.to_str().unwrap();

    let app = setup_test_app_with_db(Database::new(path).unwrap());
    let body = serde_json::json!({ "item": "Lunch", "price": "12.5", "category": "Food" });
    let response = app
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = setup_test_app_with_db(Database::new(path).unwrap());
    let response = app.oneshot(get("/api/expenses")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["total_spent"], 12.5);
    assert_eq!(json["highest_spent_item"]["item"], "Lunch");
}

#[tokio::test]
async fn test_created_expense_appears_in_report() {
    let db = Database::in_memory().unwrap();

    let app = setup_test_app_with_db(db.clone());
    let body = serde_json::json!({ "item": "Tea", "price": 2.5, "category": "Drinks" });
    let response = app
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = setup_test_app_with_db(db);
    let response = app.oneshot(get("/api/expenses")).await.unwrap();
    let json = get_body_json(response).await;

    assert_eq!(json["spending_data"]["2024-03-10"], 2.5);
    assert_eq!(json["monthly_spending"]["2024-03"], 2.5);
    assert_eq!(json["category_breakdown"][0]["category"], "Drinks");
    assert_eq!(json["category_breakdown"][0]["amount"], 2.5);
}

// ========== Budget API Tests ==========

#[tokio::test]
async fn test_budget_defaults_to_zero() {
    let app = setup_test_app();
    let response = app.oneshot(get("/api/budget")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["current_budget"], 0.0);
}

#[tokio::test]
async fn test_update_budget() {
    let db = Database::in_memory().unwrap();

    let app = setup_test_app_with_db(db.clone());
    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/budget",
            serde_json::json!({ "amount": 450.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["current_budget"], 450.0);

    let app = setup_test_app_with_db(db);
    let response = app.oneshot(get("/api/expenses")).await.unwrap();
    let json = get_body_json(response).await;
    assert_eq!(json["current_budget"], 450.0);
    assert_eq!(json["budget_remaining"], 450.0);
}

#[tokio::test]
async fn test_update_budget_rejects_invalid() {
    let app = setup_test_app();
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/budget",
            serde_json::json!({ "amount": -10 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/budget",
            serde_json::json!({ "amount": "a lot" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== CORS ==========

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = setup_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/expenses")
                .header("origin", "https://dashboard.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_restricted_origins() {
    let db = Database::in_memory().unwrap();
    let config = ServerConfig {
        allowed_origins: parse_origins("https://ok.example.com, https://also.example.com"),
    };
    let app = create_router_with_options(db, config, Some(test_today()));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("origin", "https://ok.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "https://ok.example.com"
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("origin", "https://evil.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[test]
fn test_parse_origins() {
    assert!(parse_origins("").is_empty());
    assert_eq!(
        parse_origins(" https://a.example , ,https://b.example"),
        vec!["https://a.example", "https://b.example"]
    );
}
