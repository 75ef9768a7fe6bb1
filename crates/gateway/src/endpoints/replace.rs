//! # PUT /replace
//!
//! 旧オブジェクトを削除し、アップロードされたファイルを自身のファイル名で作成する。

use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use poc_storage_types::ReplaceQuery;

use crate::config::GatewayState;
use crate::endpoints::form::read_file_field;
use crate::error::GatewayError;

/// Content-Type未申告時に使う値
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// PUT /replace — 削除してから作成する。
///
/// `oldFilename` の削除結果（存在しなかった場合を含む）は無視する。
/// 新しいオブジェクトのキーはアップロードされたファイル名であり、
/// `oldFilename` と一致するとは限らない。サイズ・Content-Typeの検証は行わない。
pub async fn handle_replace(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<ReplaceQuery>,
    mut multipart: Multipart,
) -> Result<String, GatewayError> {
    let file = read_file_field(&mut multipart).await?;
    let new_key = file.object_key()?;
    let content_type = file
        .content_type
        .as_deref()
        .unwrap_or(FALLBACK_CONTENT_TYPE);

    let existed = state.storage.delete_object(&query.old_filename).await?;
    tracing::debug!(object_key = %query.old_filename, existed, "旧ファイルを削除");

    state
        .storage
        .put_object(new_key, &file.bytes, content_type)
        .await?;

    tracing::info!(
        old_object_key = %query.old_filename,
        object_key = %new_key,
        size = file.bytes.len(),
        "ファイルを置換"
    );

    Ok(format!("ファイルを置換しました: {new_key}"))
}
