//! End-to-end tests for a list view of users driven by grid requests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, TimeZone, Utc};
use datagrid::{
    Attribute, ColumnDescriptor, ColumnPresenter, DatagridResult, DatatableView, FieldValue,
    GridParams, MemoryCollection, Predicate, Record, ViewOptions, ViewResponse, router,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

const TEMPLATE: &str = "datatable/list.html";

#[derive(Debug, Clone)]
struct User {
    username: String,
    first_name: String,
    last_name: String,
    date_joined: DateTime<Utc>,
}

impl Record for User {
    fn attribute(&self, name: &str) -> Option<Attribute<'_>> {
        match name {
            "username" => Some(Attribute::Value(self.username.as_str().into())),
            "first_name" => Some(Attribute::Value(self.first_name.as_str().into())),
            "last_name" => Some(Attribute::Value(self.last_name.as_str().into())),
            "date_joined" => Some(Attribute::Value(self.date_joined.into())),
            "full_name" => Some(Attribute::Method(Box::new(move || {
                FieldValue::from(format!("{} {}", self.first_name, self.last_name))
            }))),
            _ => None,
        }
    }
}

fn users() -> MemoryCollection<User> {
    [
        ("Kim", "Quayle"),
        ("Ann", "Adams"),
        ("Bo", "Zed"),
        ("Cy", "Moss"),
        ("Di", "Baker"),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (first_name, last_name))| User {
        username: format!("user_{}", idx),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_joined: Utc
            .with_ymd_and_hms(2011, 11, 1 + idx as u32, 9, 30, 0)
            .single()
            .expect("Valid timestamp"),
    })
    .collect()
}

fn presenter() -> ColumnPresenter<User> {
    ColumnPresenter::new(vec![
        ColumnDescriptor::bound("username", |user: &User, _| json!(user.username)),
        ColumnDescriptor::bound("date_joined", |user: &User, _| {
            json!(user.date_joined.format("%Y-%m-%d").to_string())
        }),
        ColumnDescriptor::bound("field_three", |user: &User, _| {
            json!(format!("{} {}", user.first_name, user.last_name))
        })
        .with_filter(|value| Some(Predicate::icontains("last_name", value)))
        .with_sort_key("last_name"),
    ])
    .expect("Valid presenter")
}

fn view() -> DatatableView<MemoryCollection<User>> {
    DatatableView::new("datatable", presenter(), || -> DatagridResult<_> { Ok(users()) })
        .with_route("/datatable/")
        .with_template_name(TEMPLATE)
        .with_options(
            ViewOptions::builder()
                .filtering_enabled(true)
                .sorting_enabled(true)
                .per_page_default(5usize)
                .build()
                .expect("Valid options"),
        )
}

/// The query line a grid widget sends for a four-column table.
fn dt_request(display_start: usize, display_length: usize, sort_col: usize, search_0: &str) -> String {
    [
        "/datatable/?json".to_string(),
        "sEcho=1".to_string(),
        "iColumns=4".to_string(),
        "sColumns=".to_string(),
        format!("iDisplayStart={}", display_start),
        format!("iDisplayLength={}", display_length),
        "sSearch=".to_string(),
        "bRegex=false".to_string(),
        format!("sSearch_0={}", search_0),
        "bRegex_0=false".to_string(),
        "bSearchable_0=true".to_string(),
        "sSearch_1=".to_string(),
        "bRegex_1=false".to_string(),
        "bSearchable_1=true".to_string(),
        "sSearch_2=".to_string(),
        "bRegex_2=false".to_string(),
        "bSearchable_2=true".to_string(),
        "sSearch_3=".to_string(),
        "bRegex_3=false".to_string(),
        "bSearchable_3=true".to_string(),
        "iSortingCols=1".to_string(),
        format!("iSortCol_0={}", sort_col),
        "sSortDir_0=asc".to_string(),
        "bSortable_0=true".to_string(),
        "bSortable_1=true".to_string(),
        "bSortable_2=true".to_string(),
        "bSortable_3=true".to_string(),
    ]
    .join("&")
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = router(Arc::new(view()))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn usernames(payload: &Value) -> Vec<String> {
    payload["aaData"]
        .as_array()
        .expect("aaData is an array")
        .iter()
        .map(|row| row[0].as_str().expect("username is text").to_string())
        .collect()
}

#[test]
fn test_non_json_template_response() {
    let response = view().handle(&GridParams::default()).unwrap();
    let ViewResponse::Page(page) = response else {
        panic!("Expected a page render");
    };
    assert_eq!(page.template_name(), TEMPLATE);
}

#[tokio::test]
async fn test_non_json_request_over_http() {
    let (status, body) = get("/datatable/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(TEMPLATE));
}

#[tokio::test]
async fn test_json_response() {
    let (status, body) = get("/datatable/?json").await;
    assert_eq!(status, StatusCode::OK);

    let payload: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(payload["sEcho"], json!(0));
    assert_eq!(payload["iTotalRecords"], json!(5));
    assert_eq!(payload["aaData"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn test_dt_request() {
    let (status, body) = get(&dt_request(0, 10, 0, "")).await;
    assert_eq!(status, StatusCode::OK);

    let payload: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(payload["sEcho"], json!(1));
    assert_eq!(
        usernames(&payload),
        ["user_0", "user_1", "user_2", "user_3", "user_4"]
    );
    assert_eq!(payload["aaData"][1], json!(["user_1", "2011-11-02", "Ann Adams"]));
}

#[tokio::test]
async fn test_pagination() {
    let (status, body) = get(&dt_request(2, 2, 0, "")).await;
    assert_eq!(status, StatusCode::OK);

    let payload: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(usernames(&payload), ["user_2", "user_3"]);
    assert_eq!(payload["iTotalRecords"], json!(5));
    assert_eq!(payload["iTotalDisplayRecords"], json!(5));

    let (status, _) = get(&dt_request(10, 2, 0, "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ordering() {
    let (status, body) = get(&dt_request(0, 10, 2, "")).await;
    assert_eq!(status, StatusCode::OK);

    let payload: Value = serde_json::from_str(&body).unwrap();
    // Adams, Baker, Moss, Quayle, Zed
    assert_eq!(
        usernames(&payload),
        ["user_1", "user_4", "user_3", "user_0", "user_2"]
    );
}

#[tokio::test]
async fn test_filter() {
    let (status, body) = get(&dt_request(0, 10, 2, "_3")).await;
    assert_eq!(status, StatusCode::OK);

    let payload: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(usernames(&payload), ["user_3"]);
    assert_eq!(payload["iTotalRecords"], json!(1));
}

#[test]
fn test_custom_filter_expression_searches_last_name() {
    let params = GridParams::from_pairs([
        ("json", ""),
        ("iColumns", "3"),
        ("sSearch_2", "a"),
        ("bSearchable_2", "true"),
    ]);
    let ViewResponse::Json(response) = view().handle(&params).unwrap() else {
        panic!("Expected a JSON response");
    };
    let payload = response.to_json();
    // Quayle, Adams, Baker
    assert_eq!(usernames(&payload), ["user_0", "user_1", "user_4"]);
}

#[test]
fn test_method_attribute_resolves() {
    let users = users();
    let user = &users.records()[3];
    let rendered = presenter()
        .render("full_name", user, &Default::default())
        .unwrap();
    assert_eq!(rendered, json!("Cy Moss"));
}
