//! # GET /upload/direct, GET /files/signed-url
//!
//! クライアントがGatewayを経由せずストレージへ直接アップロードするための
//! 署名付きURL発行。

use std::sync::Arc;

use axum::extract::{Query, State};
use poc_storage_types::FileNameQuery;

use crate::config::GatewayState;
use crate::error::GatewayError;

/// GET /upload/direct, GET /files/signed-url — 署名付きURL発行。
///
/// 指定キーへのPUTを許可するV4署名付きURLを平文で返す。
/// キーの文字種・パストラバーサルの検証は行わない。
pub async fn handle_signed_url(
    State(state): State<Arc<GatewayState>>,
    Query(query): Query<FileNameQuery>,
) -> Result<String, GatewayError> {
    let url = state
        .storage
        .presign_put(&query.file_name, state.presign_expiry_secs)
        .await?;

    tracing::info!(
        object_key = %query.file_name,
        expiry_secs = state.presign_expiry_secs,
        "署名付きURLを発行"
    );

    Ok(url)
}
