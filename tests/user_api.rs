//! HTTP-level tests for the user resource.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web, App};
use rstest::rstest;
use serde_json::{json, Value};
use user_service_backend::repositories::InMemoryUserStore;
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

macro_rules! init_app {
    () => {
        actix_test::init_service(
            App::new()
                .app_data(web::Data::new(UserService::new(Arc::new(InMemoryUserStore::new()))))
                .configure(configure_all_routes),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let response = actix_test::call_service(&$app, $req.to_request()).await;
        let status = response.status();
        let body: Value = actix_test::read_body_json(response).await;
        (status, body)
    }};
}

fn jane() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "dateOfBirth": "1990-05-17T10:00:00.000+02:00"
    })
}

#[actix_web::test]
async fn create_then_get_returns_same_record() {
    let app = init_app!();

    let (status, body) = send!(app, actix_test::TestRequest::post().uri("/user").set_json(jane()));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "Created");

    let user = &body["data"]["user"];
    assert_eq!(user["name"], "Jane Doe");
    assert_eq!(user["email"], "jane@example.com");
    assert_eq!(user["dateOfBirth"], "1990-05-17T08:00:00.000Z");

    let id = user["id"].as_str().expect("id should be a string");
    let (status, fetched) = send!(app, actix_test::TestRequest::get().uri(&format!("/user/{id}")));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, json!({ "status": "OK", "data": { "user": user.clone() } }));
}

#[actix_web::test]
async fn duplicate_email_is_rejected_without_insert() {
    let app = init_app!();
    send!(app, actix_test::TestRequest::post().uri("/user").set_json(jane()));

    let mut other = jane();
    other["name"] = json!("Someone Else");
    let (status, body) = send!(app, actix_test::TestRequest::post().uri("/user").set_json(other));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], "User with same email already exists");

    let (_, list) = send!(app, actix_test::TestRequest::get().uri("/user"));
    assert_eq!(list["data"]["users"].as_array().map(Vec::len), Some(1));
}

#[rstest]
#[case(json!({ "name": "Jane", "email": "jane@example.com", "dateOfBirth": "not-a-date" }), "Invalid date format!")]
#[case(json!({ "name": "Jane", "email": "jane@example.com" }), "Missing request body attributes!")]
#[case(json!({ "name": "", "email": "jane@example.com", "dateOfBirth": "1990-01-01" }), "Missing request body attributes!")]
#[actix_web::test]
async fn invalid_create_creates_nothing(#[case] payload: Value, #[case] description: &str) {
    let app = init_app!();

    let (status, body) = send!(app, actix_test::TestRequest::post().uri("/user").set_json(payload));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "status": "Bad Request", "description": description }));

    let (_, list) = send!(app, actix_test::TestRequest::get().uri("/user"));
    assert_eq!(list, json!({ "status": "OK", "data": { "users": [] } }));
}

#[actix_web::test]
async fn create_without_body_reports_missing_fields() {
    let app = init_app!();

    let (status, body) = send!(app, actix_test::TestRequest::post().uri("/user"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], "Missing request body attributes!");
}

#[actix_web::test]
async fn update_name_only_merges() {
    let app = init_app!();
    let (_, created) = send!(app, actix_test::TestRequest::post().uri("/user").set_json(jane()));
    let id = created["data"]["user"]["id"].as_str().unwrap().to_string();

    let (status, body) = send!(
        app,
        actix_test::TestRequest::put()
            .uri(&format!("/user/{id}"))
            .set_json(json!({ "name": "New Name" }))
    );
    assert_eq!(status, StatusCode::OK);

    let user = &body["data"]["user"];
    assert_eq!(user["id"], id.as_str());
    assert_eq!(user["name"], "New Name");
    assert_eq!(user["email"], "jane@example.com");
    assert_eq!(user["dateOfBirth"], "1990-05-17T08:00:00.000Z");
}

#[actix_web::test]
async fn update_with_own_email_succeeds_and_foreign_email_conflicts() {
    let app = init_app!();
    let (_, created) = send!(app, actix_test::TestRequest::post().uri("/user").set_json(jane()));
    let id = created["data"]["user"]["id"].as_str().unwrap().to_string();
    send!(
        app,
        actix_test::TestRequest::post().uri("/user").set_json(json!({
            "name": "John",
            "email": "john@example.com",
            "dateOfBirth": "1985-01-01"
        }))
    );

    let (status, _) = send!(
        app,
        actix_test::TestRequest::put()
            .uri(&format!("/user/{id}"))
            .set_json(json!({ "email": "jane@example.com" }))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send!(
        app,
        actix_test::TestRequest::put()
            .uri(&format!("/user/{id}"))
            .set_json(json!({ "email": "john@example.com" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], "User with same email already exists");

    let (_, fetched) = send!(app, actix_test::TestRequest::get().uri(&format!("/user/{id}")));
    assert_eq!(fetched["data"]["user"]["email"], "jane@example.com");
}

#[actix_web::test]
async fn update_missing_user_is_not_found_and_store_unchanged() {
    let app = init_app!();
    send!(app, actix_test::TestRequest::post().uri("/user").set_json(jane()));
    let (_, before) = send!(app, actix_test::TestRequest::get().uri("/user"));

    let (status, body) = send!(
        app,
        actix_test::TestRequest::put()
            .uri("/user/does-not-exist")
            .set_json(json!({ "name": "Ghost" }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["description"], "User with ID does-not-exist not found!");

    let (_, after) = send!(app, actix_test::TestRequest::get().uri("/user"));
    assert_eq!(before, after);
}

#[actix_web::test]
async fn delete_twice_returns_ok_then_not_found() {
    let app = init_app!();
    let (_, created) = send!(app, actix_test::TestRequest::post().uri("/user").set_json(jane()));
    let user = created["data"]["user"].clone();
    let uri = format!("/user/{}", user["id"].as_str().unwrap());

    let (status, body) = send!(app, actix_test::TestRequest::delete().uri(&uri));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deletedUser"], user);

    let (status, _) = send!(app, actix_test::TestRequest::get().uri(&uri));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send!(app, actix_test::TestRequest::delete().uri(&uri));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case("PATCH", "/user", "Cannot PATCH /user")]
#[case("GET", "/unknown", "Cannot GET /unknown")]
#[case("POST", "/user/abc", "Cannot POST /user/abc")]
#[case("GET", "/user/a/b", "Cannot GET /user/a/b")]
#[actix_web::test]
async fn unmatched_routes_are_not_found(#[case] method: &str, #[case] uri: &str, #[case] description: &str) {
    let app = init_app!();
    let method = actix_web::http::Method::from_bytes(method.as_bytes()).unwrap();

    let (status, body) = send!(app, actix_test::TestRequest::default().method(method).uri(uri));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": "Not Found", "description": description }));
}

#[actix_web::test]
async fn malformed_json_is_rejected_before_dispatch() {
    let app = init_app!();

    let (status, body) = send!(
        app,
        actix_test::TestRequest::post()
            .uri("/user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ \"name\": ")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["description"],
        "Bad request body: request body must be valid JSON!"
    );

    let (_, list) = send!(app, actix_test::TestRequest::get().uri("/user"));
    assert_eq!(list["data"]["users"], json!([]));
}

#[actix_web::test]
async fn list_preserves_creation_order() {
    let app = init_app!();
    for (name, email) in [("A", "a@example.com"), ("B", "b@example.com"), ("C", "c@example.com")] {
        send!(
            app,
            actix_test::TestRequest::post().uri("/user").set_json(json!({
                "name": name,
                "email": email,
                "dateOfBirth": "2000-01-01"
            }))
        );
    }

    let (status, body) = send!(app, actix_test::TestRequest::get().uri("/user"));
    assert_eq!(status, StatusCode::OK);

    let names: Vec<_> = body["data"]["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[actix_web::test]
async fn array_body_is_not_read_as_fields() {
    let app = init_app!();
    let positional = json!(["Jane", "jane@example.com", "1990-01-01"]);

    let (status, body) = send!(
        app,
        actix_test::TestRequest::post().uri("/user").set_json(positional.clone())
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["description"], "Missing request body attributes!");

    let (_, list) = send!(app, actix_test::TestRequest::get().uri("/user"));
    assert_eq!(list["data"]["users"], json!([]));

    let (_, created) = send!(app, actix_test::TestRequest::post().uri("/user").set_json(jane()));
    let user = created["data"]["user"].clone();
    let uri = format!("/user/{}", user["id"].as_str().unwrap());

    let (status, updated) = send!(
        app,
        actix_test::TestRequest::put()
            .uri(&uri)
            .set_json(json!(["Other", "other@example.com", "2000-01-01"]))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["user"], user);
}

#[actix_web::test]
async fn large_body_is_buffered_in_full() {
    let app = init_app!();
    let long_name = "a".repeat(300_000);

    let (status, body) = send!(
        app,
        actix_test::TestRequest::post().uri("/user").set_json(json!({
            "name": long_name,
            "email": "long@example.com",
            "dateOfBirth": "1990-01-01"
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["name"].as_str().map(str::len), Some(300_000));
}
