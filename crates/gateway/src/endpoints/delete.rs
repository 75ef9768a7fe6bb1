//! # DELETE /delete

use std::sync::Arc;

use axum::extract::{Query, State};
use poc_storage_types::FilenameQuery;

use crate::config::GatewayState;
use crate::error::GatewayError;

/// DELETE /delete — オブジェクトを削除する。
///
/// 存在しないオブジェクトは404。同じキーを2回削除すると2回目は404になる。
pub async fn handle_delete(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<FilenameQuery>,
) -> Result<String, GatewayError> {
    let existed = state.storage.delete_object(&query.filename).await?;
    if !existed {
        return Err(GatewayError::NotFound(query.filename));
    }

    tracing::info!(object_key = %query.filename, "ファイルを削除");

    Ok(format!("ファイルを削除しました: {}", query.filename))
}
