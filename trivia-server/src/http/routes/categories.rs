//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use super::common::category_map;
use crate::db::repos::{CategoryRepo, Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ApiQuery;
use crate::http::server::AppState;
use crate::models::{Pagination, PaginationParams};

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// Per-category question listing response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: i32,
}

/// GET /categories - all categories as an `{id: type}` map
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
///
/// Unknown category is a 404; a category with no questions is a valid
/// empty page.
async fn category_questions(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i32>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = CategoryRepo::new(&state.pool).get(category_id).await?;
    let page = Pagination::from(params);
    let (questions, total) = QuestionRepo::new(&state.pool)
        .list_by_category(category.id, page)
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions: total,
        current_category: category.id,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
