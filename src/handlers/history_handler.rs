use axum::{extract::Path, extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::services::history_service::HistoryView;
use crate::AppState;

/// 1. 获取最近 10 条检查记录 (存储失败时返回空列表)
pub async fn list_checks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let view = HistoryView::load(state.store.as_ref()).await;
    (StatusCode::OK, Json(view.into_checks()))
}

/// 2. 删除一条记录，返回删除后的历史列表
///
/// 删除失败只记录日志，返回的列表保持不变。
pub async fn delete_check(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let store = state.store.as_ref();
    let mut view = HistoryView::load(store).await;

    if view.delete(store, id).await {
        tracing::info!("<<< 已删除记录 id={}, 剩余 {} 条", id, view.checks().len());
    }
    (StatusCode::OK, Json(view.into_checks()))
}
