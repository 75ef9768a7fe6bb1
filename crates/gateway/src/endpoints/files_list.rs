//! # GET /files/list
//!
//! バケットの先頭1ページ分（最大10件）のオブジェクト名。
//! 順序はストレージのデフォルト（キーの辞書順）であり、新しい順ではない。

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use poc_storage_types::ListFilesResponse;

use crate::config::GatewayState;
use crate::error::GatewayError;

/// GET /files/list — オブジェクト名一覧。空の場合は明示的なメッセージを返す。
pub async fn handle_files_list(
    State(state): State<Arc<GatewayState>>,
) -> Result<Json<ListFilesResponse>, GatewayError> {
    let names = state.storage.list_objects(state.list_page_size).await?;
    Ok(Json(ListFilesResponse::from_names(names)))
}
