//! # GET /files-info

use std::sync::Arc;

use axum::extract::{Query, State};
use poc_storage_types::FilenameQuery;

use crate::config::GatewayState;
use crate::error::GatewayError;

/// GET /files-info — オブジェクトのメタデータを返す。
///
/// `Name: <n>, Size: <bytes>, Content-Type: <t>` 形式の平文。存在しない場合は404。
pub async fn handle_files_info(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<FilenameQuery>,
) -> Result<String, GatewayError> {
    let info = state.storage.object_info(&query.filename).await?;
    let info = info.ok_or(GatewayError::NotFound(query.filename))?;

    Ok(info.describe())
}
