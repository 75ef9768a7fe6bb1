//! # POST /upload/proxy
//!
//! Gateway経由のアップロード。サイズとContent-Typeを検証してから保存する。

use std::sync::Arc;

use axum::extract::{Multipart, State};

use crate::config::GatewayState;
use crate::endpoints::form::read_file_field;
use crate::error::GatewayError;

/// アップロード内容を検証する。サイズ → Content-Type の順で、最初の違反を返す。
///
/// Content-Typeは申告値のみで判定し、内容の判定は行わない。
pub fn validate_upload(
    state: &GatewayState,
    size: usize,
    content_type: Option<&str>,
) -> Result<(), GatewayError> {
    if size > state.max_upload_size {
        return Err(GatewayError::BadRequest(format!(
            "ファイルサイズが大きすぎます（最大{}MB）",
            state.max_upload_size / (1024 * 1024)
        )));
    }

    let allowed = content_type
        .map(|ct| state.allowed_content_types.iter().any(|t| t == ct))
        .unwrap_or(false);
    if !allowed {
        return Err(GatewayError::BadRequest(format!(
            "許可されていないファイル形式です: {}",
            content_type.unwrap_or("(未指定)")
        )));
    }

    Ok(())
}

/// POST /upload/proxy — ファイルを検証して保存し、公開URLを返す。
///
/// 同名のオブジェクトは確認なしに上書きされる（後勝ち）。
pub async fn handle_upload_proxy(
    State(state): State<Arc<GatewayState>>,
    mut multipart: Multipart,
) -> Result<String, GatewayError> {
    let file = read_file_field(&mut multipart).await?;

    validate_upload(&state, file.bytes.len(), file.content_type.as_deref())?;

    let key = file.object_key()?;
    // validate_upload通過後はContent-Typeが必ず存在する
    let content_type = file.content_type.as_deref().unwrap_or_default();

    state
        .storage
        .put_object(key, &file.bytes, content_type)
        .await?;

    tracing::info!(
        object_key = %key,
        size = file.bytes.len(),
        content_type = %content_type,
        "プロキシアップロード完了"
    );

    Ok(state.storage.public_url(key))
}
