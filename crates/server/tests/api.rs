use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::Engine;
use migration::MigratorTrait;

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();
    server::router(engine)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn add_author(app: &Router, name: &str) -> i64 {
    let (status, body) = post_json(app, "/author/add", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], name);
    body["id"].as_i64().unwrap()
}

async fn add_record(app: &Router, record: Value) {
    let (status, body) = post_json(app, "/budget/add", record.clone()).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    for key in ["year", "month", "amount", "type"] {
        assert_eq!(body[key], record[key]);
    }
    assert!(body["id"].is_i64());
}

async fn seed(app: &Router) {
    let ivanov = add_author(app, "Иванов").await;
    let petrov = add_author(app, "Петров").await;

    for (year, month, amount, kind, author) in [
        (2020, 5, 10, "income", ivanov),
        (2020, 5, 5, "income", petrov),
        (2020, 5, 20, "income", petrov),
        (2020, 5, 30, "income", ivanov),
        (2020, 5, 40, "income", ivanov),
        (2030, 1, 1, "expense", petrov),
    ] {
        add_record(
            app,
            json!({
                "year": year,
                "month": month,
                "amount": amount,
                "type": kind,
                "author_id": author,
            }),
        )
        .await;
    }
}

#[tokio::test]
async fn budget_pagination() {
    let app = app().await;
    seed(&app).await;

    let (status, body) = get(&app, "/budget/year/2020/stats?limit=100&offset=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["total_by_type"]["income"], 105);
    assert!(body["total_by_type"].get("expense").is_none());

    let (_, page) = get(&app, "/budget/year/2020/stats?limit=2&offset=2").await;
    assert_eq!(page["total"], 5);
    assert_eq!(page["total_by_type"]["income"], 105);
    let amounts: Vec<i64> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["amount"].as_i64().unwrap())
        .collect();
    assert_eq!(amounts, vec![20, 10]);
}

#[tokio::test]
async fn stats_sort_order() {
    let app = app().await;
    let ivanov = add_author(&app, "Иванов").await;
    let petrov = add_author(&app, "Петров").await;

    for (month, amount, author) in [
        (5, 100, ivanov),
        (1, 5, petrov),
        (5, 50, petrov),
        (1, 30, ivanov),
        (5, 400, ivanov),
    ] {
        add_record(
            &app,
            json!({
                "year": 2020,
                "month": month,
                "amount": amount,
                "type": "income",
                "author_id": author,
            }),
        )
        .await;
    }

    let (status, body) = get(&app, "/budget/year/2020/stats?limit=100&offset=0").await;
    assert_eq!(status, StatusCode::OK);
    let amounts: Vec<i64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["amount"].as_i64().unwrap())
        .collect();
    assert_eq!(amounts, vec![30, 5, 400, 100, 50]);
    assert_eq!(body["items"][0]["author_name"], "Иванов");
    assert_eq!(body["items"][1]["author_name"], "Петров");
}

#[tokio::test]
async fn invalid_month_values() {
    let app = app().await;
    let author = add_author(&app, "Иванов").await;

    for month in [-5, 15] {
        let (status, body) = post_json(
            &app,
            "/budget/add",
            json!({
                "year": 2020,
                "month": month,
                "amount": 5,
                "type": "income",
                "author_id": author,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("month"));
    }

    let (_, body) = get(&app, "/budget/year/2020/stats?limit=10&offset=0").await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["total_by_type"], json!({}));
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn budget_by_author() {
    let app = app().await;
    seed(&app).await;

    let (status, body) = get(
        &app,
        "/budget/year/2020/stats?limit=100&offset=0&author_name=%D0%B8%D0%B2%D0%B0%D0%BD",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["total_by_type"]["income"], 80);
    for item in body["items"].as_array().unwrap() {
        assert_eq!(item["author_name"], "Иванов");
    }
}

#[tokio::test]
async fn entry_without_author_has_null_author_name() {
    let app = app().await;
    add_record(
        &app,
        json!({ "year": 2024, "month": 3, "amount": 70, "type": "expense" }),
    )
    .await;

    let (status, body) = get(&app, "/budget/year/2024/stats?limit=10&offset=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_by_type"]["expense"], 70);
    assert!(body["items"][0]["author_name"].is_null());
    assert_eq!(body["items"][0]["type"], "expense");
}

#[tokio::test]
async fn unknown_author_is_404() {
    let app = app().await;

    let (status, body) = post_json(
        &app,
        "/budget/add",
        json!({ "year": 2020, "month": 1, "amount": 5, "type": "income", "author_id": 99 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_requests_are_400() {
    let app = app().await;

    let (status, body) = post_json(&app, "/author/add", json!({ "title": "x" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = post_json(&app, "/author/add", json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        "/budget/add",
        json!({ "year": 2020, "month": 1, "amount": 5, "type": "gift" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(&app, "/budget/year/2020/stats?limit=-1&offset=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = get(&app, "/budget/year/2020/stats?offset=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_year_is_json_400() {
    let app = app().await;

    let (status, body) = get(&app, "/budget/year/abc/stats?limit=10&offset=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn overflowing_total_is_500() {
    let app = app().await;
    for amount in [i64::MAX, 10] {
        add_record(
            &app,
            json!({ "year": 2020, "month": 1, "amount": amount, "type": "income" }),
        )
        .await;
    }

    let (status, body) = get(&app, "/budget/year/2020/stats?limit=10&offset=0").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}
