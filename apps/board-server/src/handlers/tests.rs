use std::sync::Arc;

use actix_web::http::{StatusCode, header::ContentType};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use board_core::domain::NewPost;
use board_core::ports::{BaseRepository, PostRepository};
use board_infra::{Argon2PasswordService, InMemoryPostRepository, PasswordHashConfig};

use super::configure_routes;
use crate::state::AppState;

fn state_with(repo: Arc<InMemoryPostRepository>) -> AppState {
    let passwords = Argon2PasswordService::with_config(&PasswordHashConfig {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap();

    AppState::from_parts(repo, Arc::new(passwords), 10, "memory")
}

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(state_with($repo.clone())))
                .configure(configure_routes),
        )
        .await
    };
}

async fn seed(repo: &InMemoryPostRepository, count: usize) {
    for i in 1..=count {
        repo.insert(NewPost {
            username: format!("username {i}"),
            password_hash: format!("password {i}"),
            title: format!("title {i}"),
            content: format!("content {i}"),
        })
        .await
        .unwrap();
    }
}

fn write_body() -> Value {
    json!({
        "username": "test username",
        "rawPassword": "password",
        "title": "test title",
        "content": "test content",
    })
}

#[actix_web::test]
async fn test_write_post() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/posts/post")
        .set_json(write_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id": 1 }));
    assert_eq!(repo.count().await.unwrap(), 1);

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "password");
}

#[actix_web::test]
async fn test_write_malformed_body() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/posts/post")
        .set_json(json!({ "username": "test username" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_get_post() {
    let repo = Arc::new(InMemoryPostRepository::new());
    seed(&repo, 1).await;
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/posts/post/1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "id": 1,
            "username": "username 1",
            "title": "title 1",
            "content": "content 1",
        })
    );
}

#[actix_web::test]
async fn test_get_missing_post() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/posts/post/1000").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(test::read_body(resp).await.is_empty());
}

#[actix_web::test]
async fn test_get_page() {
    let repo = Arc::new(InMemoryPostRepository::new());
    seed(&repo, 15).await;
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/posts/2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 5);
    for (item, n) in items.iter().zip([5, 4, 3, 2, 1]) {
        assert_eq!(item["username"], format!("username {n}"));
        assert_eq!(item["title"], format!("title {n}"));
        assert!(item.get("content").is_none());
    }
}

#[actix_web::test]
async fn test_get_initial_page() {
    let repo = Arc::new(InMemoryPostRepository::new());
    seed(&repo, 15).await;
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/posts/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["username"], "username 15");
}

#[actix_web::test]
async fn test_unparsable_page_is_first_page() {
    let repo = Arc::new(InMemoryPostRepository::new());
    seed(&repo, 15).await;
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/posts/abc").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[0]["username"], "username 15");
}

#[actix_web::test]
async fn test_get_no_list() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/posts/1000").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "[]");
}

#[actix_web::test]
async fn test_edit_post() {
    let repo = Arc::new(InMemoryPostRepository::new());
    seed(&repo, 1).await;
    let app = test_app!(repo);

    let req = test::TestRequest::patch()
        .uri("/posts/post/1")
        .set_json(json!({ "title": "edited title", "content": "edited content" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id": 1 }));

    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.title, "edited title");
    assert_eq!(stored.content, "edited content");
}

#[actix_web::test]
async fn test_edit_missing_field() {
    let repo = Arc::new(InMemoryPostRepository::new());
    seed(&repo, 1).await;
    let app = test_app!(repo);

    let req = test::TestRequest::patch()
        .uri("/posts/post/1")
        .set_json(json!({ "title": "only title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.title, "title 1");
    assert_eq!(stored.content, "content 1");
}

#[actix_web::test]
async fn test_edit_missing_post() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = test_app!(repo);

    let req = test::TestRequest::patch()
        .uri("/posts/post/1000")
        .set_json(json!({ "title": "edited title", "content": "edited content" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_post() {
    let repo = Arc::new(InMemoryPostRepository::new());
    seed(&repo, 1).await;
    let app = test_app!(repo);

    let req = test::TestRequest::delete().uri("/posts/post/1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(test::read_body(resp).await.is_empty());
    assert_eq!(repo.count().await.unwrap(), 0);

    let req = test::TestRequest::delete().uri("/posts/post/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_check_password() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/posts/post")
        .set_json(write_body())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["id"].as_i64().unwrap();

    let check = |password: &'static str| {
        test::TestRequest::post()
            .uri(&format!("/posts/post/check/{id}"))
            .insert_header(ContentType::plaintext())
            .set_payload(password)
            .to_request()
    };

    let resp = test::call_service(&app, check("password")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(test::read_body(resp).await.is_empty());

    let resp = test::call_service(&app, check("incorrect")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(test::read_body(resp).await.is_empty());

    let req = test::TestRequest::post()
        .uri(&format!("/posts/post/check/{id}"))
        .set_json(json!({ "rawPassword": "password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_check_quoted_password_is_verbatim() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = test_app!(repo);

    let mut body = write_body();
    body["rawPassword"] = json!("\"secret\"");
    let req = test::TestRequest::post()
        .uri("/posts/post")
        .set_json(body)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["id"].as_i64().unwrap();

    let check = |password: &'static str| {
        test::TestRequest::post()
            .uri(&format!("/posts/post/check/{id}"))
            .insert_header(ContentType::plaintext())
            .set_payload(password)
            .to_request()
    };

    let resp = test::call_service(&app, check("\"secret\"")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, check("secret")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_check_password_malformed_json() {
    let repo = Arc::new(InMemoryPostRepository::new());
    seed(&repo, 1).await;
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/posts/post/check/1")
        .insert_header(ContentType::json())
        .set_payload("\"password 1\"")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
}

#[actix_web::test]
async fn test_check_password_missing_post() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/posts/post/check/999999")
        .insert_header(ContentType::plaintext())
        .set_payload("password")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_check() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = test_app!(repo);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}
