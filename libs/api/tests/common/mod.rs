//! Router-level test helpers. The database is a sea-orm `MockDatabase`, so
//! each test queues the rows its handler will read.

#![allow(dead_code)]

use std::collections::BTreeMap;

use api::{ApiState, Claims, Config, Cors, Pagination};
use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use repository::Repository;
use sea_orm::{
    DatabaseConnection, DbBackend, MockDatabase, MockExecResult, Value,
};
use serde_json::json;
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";
pub const WRITER: &str = "writer";
pub const POSTING_ID: &str = "5f0c2c1e-8c4b-4d55-9a3e-2b7f6c1d9e01";

pub type Row = BTreeMap<&'static str, Value>;

pub fn mock() -> MockDatabase {
    MockDatabase::new(DbBackend::Postgres)
}

pub fn empty() -> Vec<Row> {
    vec![]
}

pub fn app(db: DatabaseConnection) -> Router {
    let config = Config {
        cors: Cors {
            allow_origins: vec!["http://localhost:3000".to_string()],
        },
        pagination: Pagination {
            default_limit: 10,
            max_limit: 50,
        },
    };

    api::router(ApiState::new(
        Repository::from_connection(db),
        config,
        SECRET.to_string(),
    ))
}

pub fn token(sub: &str) -> String {
    Claims {
        sub: sub.to_string(),
        // 2100-01-01
        exp: 4_102_444_800,
    }
    .encode(SECRET)
    .unwrap()
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    sub: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(sub) = sub {
        request = request
            .header(header::AUTHORIZATION, format!("Bearer {}", token(sub)));
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn posting_row(writer: &str) -> Row {
    BTreeMap::from([
        ("id", POSTING_ID.into()),
        ("writer", writer.into()),
        ("title", "강릉 바다 보러 가기".into()),
        (
            "created_at",
            NaiveDateTime::default().into(),
        ),
        (
            "start_date",
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().into(),
        ),
        (
            "end_date",
            NaiveDate::from_ymd_opt(2024, 7, 2).unwrap().into(),
        ),
        ("days", 2i32.into()),
        ("period", 1i16.into()),
        ("season", 1i16.into()),
        ("headcount", Value::SmallInt(None)),
        ("budget", Value::SmallInt(None)),
        ("location", 9i16.into()),
        ("theme", json!([4]).into()),
        ("with_who", Value::Json(None)),
        ("vehicle", Value::SmallInt(None)),
        ("thumbnail", Value::String(None)),
    ])
}

pub fn user_row(id: &str, name: &str) -> Row {
    BTreeMap::from([
        ("id", id.into()),
        ("name", name.into()),
        ("avatar", Value::String(None)),
        ("created_at", NaiveDateTime::default().into()),
        ("updated_at", NaiveDateTime::default().into()),
    ])
}

pub fn liked_row(user_id: &str, is_deleted: bool) -> Row {
    BTreeMap::from([
        ("posting_id", POSTING_ID.into()),
        ("user_id", user_id.into()),
        ("is_deleted", is_deleted.into()),
        ("created_at", NaiveDateTime::default().into()),
    ])
}

pub fn count_row(count: i64) -> Row {
    BTreeMap::from([("num_items", count.into())])
}

pub fn report_row(reporter: &str) -> Row {
    BTreeMap::from([
        ("posting_id", POSTING_ID.into()),
        ("reporter", reporter.into()),
        ("created_at", NaiveDateTime::default().into()),
    ])
}

pub fn liked_count_row(count: i64) -> Row {
    BTreeMap::from([
        ("posting_id", POSTING_ID.into()),
        ("liked_count", count.into()),
    ])
}

/// A posting joined with its writer, keyed the way `find_also_related`
/// aliases the two sides.
pub fn detail_row(posting: Row, writer: Row) -> BTreeMap<String, Value> {
    let posting = posting.into_iter().map(|(k, v)| (format!("A_{k}"), v));
    let writer = writer.into_iter().map(|(k, v)| (format!("B_{k}"), v));

    posting.chain(writer).collect()
}

pub fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}
