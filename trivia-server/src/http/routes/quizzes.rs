//! Quiz endpoint
//!
//! Stateless quiz play: the client sends the ids it has already seen and a
//! category selector; the server picks one unseen question at random. An
//! exhausted category comes back as `question: null` with `success: true`
//! so the client can end the quiz.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Question, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::quiz::{pick_unseen, QuizScope};

/// Category selector sent by the frontend (`{id: 0, type: "click"}` for all)
#[derive(Deserialize)]
pub struct QuizCategory {
    pub id: i32,
}

/// Quiz request body
#[derive(Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

/// Quiz response
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - pick the next unseen question
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let scope = QuizScope::from_category_id(req.quiz_category.map(|c| c.id));
    let candidates = QuestionRepo::new(&state.pool)
        .list_in_scope(scope.category())
        .await?;

    let question = pick_unseen(candidates, &req.previous_questions, &mut rand::thread_rng());

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}
