//! Question endpoints: paginated listing, create, search, delete
//!
//! POST /questions is overloaded the way the original clients use it: a body
//! with `searchTerm` runs a search, anything else is a create. The create
//! path validates every field up front instead of defaulting the blanks.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::common::category_map;
use crate::db::repos::{CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery};
use crate::http::server::AppState;
use crate::models::{NewQuestion, Pagination, PaginationParams};

/// POST /questions body: either a create or a search
#[derive(Deserialize)]
pub struct QuestionsPostRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i16>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Question listing response.
///
/// `total_question` (singular) is a long-standing payload quirk the clients
/// rely on; every other listing uses `total_questions`.
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_question: i64,
    pub categories: BTreeMap<i32, String>,
    pub current_category: Option<i32>,
}

/// Delete response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub delete: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<i32>,
}

/// Create response
#[derive(Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// GET /questions?page=N - one page of all questions
///
/// A page past the end is a valid empty list; the total still reflects the
/// whole bank.
async fn list_questions(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = Pagination::from(params);
    let (questions, total) = QuestionRepo::new(&state.pool).list_page(page).await?;
    let categories = CategoryRepo::new(&state.pool).list().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_question: total,
        categories: category_map(categories),
        current_category: None,
    }))
}

/// DELETE /questions/{id} - remove one question
///
/// Unknown id is a 404, distinct from a storage failure. The response
/// carries a fresh first page so list views can refresh in place.
async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repo = QuestionRepo::new(&state.pool);
    repo.delete(id).await?;
    let (questions, total) = repo.list_page(Pagination::default()).await?;

    Ok(Json(DeleteResponse {
        success: true,
        delete: id,
        questions,
        total_questions: total,
        current_category: None,
    }))
}

/// POST /questions - create a question, or search when `searchTerm` is set
async fn create_or_search(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
    ApiJson(req): ApiJson<QuestionsPostRequest>,
) -> Result<Response, ApiError> {
    let repo = QuestionRepo::new(&state.pool);
    let page = Pagination::from(params);

    if let Some(term) = req.search_term {
        let (questions, total) = repo.search(&term, page).await?;
        return Ok(Json(SearchResponse {
            success: true,
            questions,
            total_questions: total,
        })
        .into_response());
    }

    let new = NewQuestion::new(req.question, req.answer, req.category, req.difficulty)?;
    let created = repo.create(&new).await?;
    let (questions, total) = repo.list_page(Pagination::default()).await?;

    Ok(Json(CreateResponse {
        success: true,
        created,
        questions,
        total_questions: total,
    })
    .into_response())
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", axum::routing::delete(delete_question))
}
