use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::models::anagram_check::{AnagramCheck, CreateCheckRequest};
use crate::services::anagram_service::{ExamplePair, EXAMPLES};
use crate::services::check_service;
use crate::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Serialize)]
pub struct CheckResponse {
    pub is_anagram: bool,
    pub message: String,
    pub word1: String,
    pub word2: String,
    pub record: AnagramCheck,
}

impl From<AnagramCheck> for CheckResponse {
    fn from(record: AnagramCheck) -> Self {
        Self {
            is_anagram: record.is_anagram,
            message: record.message.clone(),
            word1: record.word1.clone(),
            word2: record.word2.clone(),
            record,
        }
    }
}

/// 1. 提交一次变位词检查并保存结果
pub async fn create_check(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCheckRequest>,
) -> impl IntoResponse {
    let result = check_service::submit_check(state.store.as_ref(), &payload.word1, &payload.word2).await;

    match result {
        Ok(check) => (StatusCode::CREATED, Json(CheckResponse::from(check))).into_response(),
        Err(e) if e.is_validation() => {
            tracing::warn!("--- 检查被拒绝: {}", e);
            (StatusCode::BAD_REQUEST, Json(ErrorBody { error: e.user_message() })).into_response()
        }
        // 存储错误已在 service 中记录
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: e.user_message() })).into_response(),
    }
}

/// 2. 页面上的示例
pub async fn list_examples() -> Json<[ExamplePair; 3]> {
    Json(EXAMPLES)
}
