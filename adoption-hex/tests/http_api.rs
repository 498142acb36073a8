//! Integration tests for the HTTP surface.
//!
//! These drive the full router (handlers, error mapping, CORS layer) with
//! in-process requests against the in-memory repository.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use adoption_hex::{AdoptionService, inbound::HttpServer};
use adoption_repo::MemoryRepo;

fn app() -> Router {
    HttpServer::new(AdoptionService::new(MemoryRepo::new())).router()
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_category_lifecycle() {
    let app = app();

    // create Category{name:"Dogs"} -> 201 with assigned id
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/categories", r#"{"name":"Dogs"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], "Dogs");

    // get(that id) -> same object
    let response = app
        .clone()
        .oneshot(get_request(&format!("/categories/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);

    // update(id, {name:"Puppies"}) -> 200, name changed, id unchanged
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/categories/{id}"),
            r#"{"name":"Puppies"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["name"], "Puppies");
    assert_eq!(updated["id"], id.as_str());

    // delete(id) -> 204 with no body
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/categories/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // get(id) afterward -> 404
    let response = app
        .clone()
        .oneshot(get_request(&format!("/categories/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_full_record_body_keeps_record_readable() {
    let app = app();

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/categories",
            r#"{"id":"cat-1","name":"Dogs"}"#,
        ))
        .await
        .unwrap();

    // PUT echoing the full record, id included, must not corrupt the document.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/categories/cat-1",
            r#"{"id":"cat-1","name":"Puppies","description":"young dogs"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(get_request("/categories/cat-1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = json_body(response).await;
    assert_eq!(fetched["id"], "cat-1");
    assert_eq!(fetched["name"], "Puppies");
    assert_eq!(fetched["description"], "young dogs");

    let response = app.oneshot(get_request("/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_duplicate_id_is_409() {
    let app = app();

    let body = r#"{"id":"cat-1","name":"Dogs"}"#;
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/categories", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(json_request(Method::POST, "/categories", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_nonexistent_is_404_not_200_with_null() {
    let app = app();

    let response = app
        .oneshot(get_request("/categories/nonexistent-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("nonexistent-id"));
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_update_and_delete_nonexistent_are_404() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/categories/ghost",
            r#"{"name":"Anything"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/categories/ghost")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_starts_empty_and_grows() {
    let app = app();

    let response = app.clone().oneshot(get_request("/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));

    for name in ["Dogs", "Cats"] {
        let body = format!(r#"{{"name":"{name}"}}"#);
        app.clone()
            .oneshot(json_request(Method::POST, "/categories", &body))
            .await
            .unwrap();
    }

    let response = app.oneshot(get_request("/categories")).await.unwrap();
    let listed = json_body(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_blank_name_is_400() {
    let app = app();

    let response = app
        .oneshot(json_request(Method::POST, "/categories", r#"{"name":"  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_extra_attributes_survive_the_round_trip() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/categories",
            r#"{"id":"cat-1","name":"Cats","description":"feline friends"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get_request("/categories/cat-1")).await.unwrap();
    let fetched = json_body(response).await;
    assert_eq!(fetched["description"], "feline friends");
}

#[tokio::test]
async fn test_payment_record_and_read() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/payments",
            r#"{"user_id":"u1","username":"alice","amount":2500,"reference":"adoption fee"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let recorded = json_body(response).await;
    assert_eq!(recorded["userId"], "u1");
    assert_eq!(recorded["payments"][0]["amount"], 2500);

    // Second payment accumulates in the same document.
    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/payments",
            r#"{"user_id":"u1","username":"alice","amount":1000}"#,
        ))
        .await
        .unwrap();

    let response = app.clone().oneshot(get_request("/users/u1/payments")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response).await;
    let docs = listed.as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["payments"].as_array().unwrap().len(), 2);

    // An unknown user is an empty list, not an error.
    let response = app.oneshot(get_request("/users/nobody/payments")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_payment_invalid_amount_is_400() {
    let app = app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/payments",
            r#"{"user_id":"u1","username":"alice","amount":0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_permissive_cors_headers_present() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/categories")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("CORS header missing");
    assert_eq!(allow_origin, "*");
}

#[tokio::test]
async fn test_health() {
    let app = app();

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");
}
