//! Post handlers.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};

use board_shared::dto::{PasswordCheck, PostEdit, PostWrite};
use board_shared::to_id_map;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts/post/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let detail = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// GET /posts/
pub async fn first_page(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    list(&state, 1).await
}

/// GET /posts/{page}
pub async fn page(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    list(&state, parse_page(&path)).await
}

/// POST /posts/post
pub async fn write(
    state: web::Data<AppState>,
    body: web::Json<PostWrite>,
) -> AppResult<HttpResponse> {
    let id = state.posts.write(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(to_id_map(id)))
}

/// PATCH /posts/post/{id}
pub async fn edit(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostEdit>,
) -> AppResult<HttpResponse> {
    let id = state.posts.edit(path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_id_map(id)))
}

/// DELETE /posts/post/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

/// POST /posts/post/check/{id}
///
/// With `Content-Type: application/json` the body must be `{"rawPassword": ...}`.
/// Any other body is taken verbatim as the password.
pub async fn check_password(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: String,
) -> AppResult<HttpResponse> {
    let check = if req.content_type() == "application/json" {
        PasswordCheck::from_json(&body).map_err(|e| AppError::BadRequest(e.to_string()))?
    } else {
        PasswordCheck::from_text(body)
    };
    state
        .posts
        .check_password(path.into_inner(), &check.raw_password)
        .await?;
    Ok(HttpResponse::Ok().finish())
}

async fn list(state: &AppState, page: u64) -> AppResult<HttpResponse> {
    let summaries = state.posts.list(page).await?;
    Ok(HttpResponse::Ok().json(summaries))
}

/// Page numbers that are missing, malformed or below 1 mean the first page.
fn parse_page(raw: &str) -> u64 {
    raw.trim().parse::<u64>().ok().filter(|p| *p >= 1).unwrap_or(1)
}
