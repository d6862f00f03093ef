use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use blog_tags::config::ServerConfig;
use blog_tags::repository::DieselRepository;
use blog_tags::routes;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .configure(routes::configure)
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .app_data(web::Data::new(ServerConfig {
                    page_size: 2,
                    ..ServerConfig::default()
                })),
        )
        .await
    };
}

fn code(body: &Value) -> i64 {
    body.get("code").and_then(Value::as_i64).unwrap_or_default()
}

fn lists(body: &Value) -> Vec<Value> {
    body.pointer("/data/lists")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[actix_web::test]
async fn create_then_list_returns_created_tag() {
    let test_db = common::TestDb::new("routes_create_then_list.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/tags?name=news&state=1&created_by=alice")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"code": 200, "msg": "ok", "data": {}}));

    let req = test::TestRequest::get()
        .uri("/api/v1/tags?name=news")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(code(&body), 200);
    assert_eq!(body.pointer("/data/total"), Some(&json!(1)));
    let items = lists(&body);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "news");
    assert_eq!(items[0]["state"], 1);
    assert_eq!(items[0]["created_by"], "alice");
}

#[actix_web::test]
async fn create_rejects_duplicate_and_invalid_input() {
    let test_db = common::TestDb::new("routes_create_rejects.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/tags?name=news&created_by=alice")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 200);

    let req = test::TestRequest::post()
        .uri("/api/v1/tags?name=news&created_by=bob")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 10001);
    assert_eq!(body["msg"], "tag name already exists");

    let req = test::TestRequest::post()
        .uri("/api/v1/tags?name=weather")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(code(&body), 400);
    assert_eq!(body["data"], json!({}));
}

#[actix_web::test]
async fn edit_with_out_of_range_state_does_not_mutate() {
    let test_db = common::TestDb::new("routes_edit_invalid_state.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/tags?name=news&state=1&created_by=alice")
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/api/v1/tags/1?state=2&modified_by=bob")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 400);

    let req = test::TestRequest::get().uri("/api/v1/tags").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = lists(&body);
    assert_eq!(items[0]["state"], 1);
    assert_eq!(items[0]["modified_by"], "");
}

#[actix_web::test]
async fn edit_with_only_modifier_keeps_name_and_state() {
    let test_db = common::TestDb::new("routes_edit_partial.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/tags?name=a&state=1&created_by=alice")
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri("/api/v1/tags/1?modified_by=bob")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 200);

    let req = test::TestRequest::get().uri("/api/v1/tags?name=a").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = lists(&body);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "a");
    assert_eq!(items[0]["state"], 1);
    assert_eq!(items[0]["modified_by"], "bob");
}

#[actix_web::test]
async fn edit_reports_missing_and_malformed_ids() {
    let test_db = common::TestDb::new("routes_edit_ids.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::put()
        .uri("/api/v1/tags/42?name=x&modified_by=bob")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 10002);
    assert_eq!(body["msg"], "tag does not exist");

    let req = test::TestRequest::put()
        .uri("/api/v1/tags/abc?modified_by=bob")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 400);
}

#[actix_web::test]
async fn delete_twice_reports_missing_tag() {
    let test_db = common::TestDb::new("routes_delete_twice.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/tags?name=news&created_by=alice")
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete().uri("/api/v1/tags/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 200);

    let req = test::TestRequest::delete().uri("/api/v1/tags/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 10002);

    let req = test::TestRequest::delete().uri("/api/v1/tags/0").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 400);
}

#[actix_web::test]
async fn list_paginates_and_filters_state() {
    let test_db = common::TestDb::new("routes_list_pages.db");
    let app = init_app!(test_db);

    for name in ["a", "b", "c"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/tags?name={name}&state=0&created_by=alice"))
            .to_request();
        let _: Value = test::call_and_read_body_json(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/tags?state=0&page=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 200);
    assert_eq!(body.pointer("/data/total"), Some(&json!(3)));
    let items = lists(&body);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "c");

    let req = test::TestRequest::get()
        .uri("/api/v1/tags?state=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.pointer("/data/total"), Some(&json!(0)));

    for query in ["state=-1", "state=abc", "state="] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/tags?{query}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(code(&body), 200, "{query}");
        assert_eq!(body.pointer("/data/total"), Some(&json!(3)), "{query}");
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/tags?state=5")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"code": 200, "msg": "ok", "data": {"lists": [], "total": 0}})
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/tags?page=18446744073709551615")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(code(&body), 200);
    assert_eq!(body.pointer("/data/total"), Some(&json!(3)));
    assert!(lists(&body).is_empty());
}

#[actix_web::test]
async fn health_reports_success() {
    let test_db = common::TestDb::new("routes_health.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(code(&body), 200);
}
