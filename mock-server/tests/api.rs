use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, User};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_users_empty() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/users").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert!(users.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_user_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"name":"Alice","email":"a@x.com"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: User = body_json(resp).await;
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "a@x.com");
}

#[tokio::test]
async fn create_user_invalid_returns_422_with_field_errors() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/users",
            r#"{"name":"","email":"not-an-email"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors: Value = body_json(resp).await;
    assert_eq!(errors[0]["field"], "name");
    assert_eq!(errors[0]["message"], "required");
    assert_eq!(errors[1]["field"], "email");
}

// --- get ---

#[tokio::test]
async fn get_user_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/users/00000000-0000-0000-0000-000000000000")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_user_bad_uuid_returns_400() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/users/not-a-uuid")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_user_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PATCH",
            "/users/00000000-0000-0000-0000-000000000000",
            r#"{"name":"Nobody"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_user_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/00000000-0000-0000-0000-000000000000")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- ping ---

#[tokio::test]
async fn ping_is_plain_text() {
    let app = app();
    let resp = app
        .oneshot(Request::builder().uri("/ping").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(http::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(&body_bytes(resp).await[..], b"pong");
}

// --- echo ---

#[tokio::test]
async fn echo_reflects_method_query_headers_and_body() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo?page=2&q=alice")
                .header("x-request-id", "abc123")
                .body(r#"{"hello":"world"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Value = body_json(resp).await;
    assert_eq!(echo["method"], "POST");
    assert_eq!(echo["query"]["page"], "2");
    assert_eq!(echo["query"]["q"], "alice");
    assert_eq!(echo["headers"]["x-request-id"], "abc123");
    assert_eq!(echo["body"], r#"{"hello":"world"}"#);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/users",
            r#"{"name":"Bob","email":"b@x.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: User = body_json(resp).await;
    assert_eq!(created.name, "Bob");
    let id = created.id;

    // list — should contain the one user
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(Request::builder().uri("/users").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<User> = body_json(resp).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, id);

    // patch — partial update leaves the other field alone
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/users/{id}"),
            r#"{"name":"Robert"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: User = body_json(resp).await;
    assert_eq!(updated.name, "Robert");
    assert_eq!(updated.email, "b@x.com");

    // put — full replace
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/users/{id}"),
            r#"{"name":"Bobby","email":"bobby@x.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let replaced: User = body_json(resp).await;
    assert_eq!(replaced.name, "Bobby");
    assert_eq!(replaced.email, "bobby@x.com");

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/users/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .uri(&format!("/users/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
