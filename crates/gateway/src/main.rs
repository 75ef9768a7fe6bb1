//! # PoC Storage Gateway
//!
//! 単一バケットのオブジェクトストレージの前段に置くHTTP Gateway。
//!
//! ## 役割
//! - 直接アップロード用の署名付きURL発行（15分有効）
//! - Gateway経由のアップロード（3MB以下、PDF/JPEG/PNGのみ）
//! - オブジェクトの置換・削除
//! - メタデータ取得・一覧取得
//!
//! 呼び出し元の認証は行わない。ストレージクライアントは起動時に一度だけ構築し、
//! 全リクエストで共有する。
//!
//! ## API エンドポイント
//! - `GET /upload/direct?fileName=` — 署名付きURL発行
//! - `POST /upload/proxy` — multipartの `file` を保存し公開URLを返す
//! - `PUT /replace?oldFilename=` — 旧ファイル削除 + 新ファイル作成
//! - `DELETE /delete?filename=` — 削除
//! - `GET /files-info?filename=` — メタデータ取得
//! - `GET /files/signed-url?fileName=` — 署名付きURL発行
//! - `GET /files/list` — 先頭10件の一覧
//! - `GET /health` — 稼働確認

mod config;
mod endpoints;
mod error;
mod storage;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};

use config::{GatewayState, BUCKET_NAME, MAX_REQUEST_BODY};
use storage::S3ObjectStorage;

/// Gatewayのルーターを構築する。
fn build_router(state: Arc<GatewayState>) -> axum::Router {
    axum::Router::new()
        .route("/upload/direct", get(endpoints::handle_signed_url))
        .route("/upload/proxy", post(endpoints::handle_upload_proxy))
        .route("/replace", put(endpoints::handle_replace))
        .route("/delete", delete(endpoints::handle_delete))
        .route("/files-info", get(endpoints::handle_files_info))
        .route("/files/signed-url", get(endpoints::handle_signed_url))
        .route("/files/list", get(endpoints::handle_files_list))
        .route("/health", get(endpoints::handle_health))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // オブジェクトストレージ（S3互換）
    let storage = S3ObjectStorage::from_env(BUCKET_NAME)?;

    let state = Arc::new(GatewayState::new(Box::new(storage)));
    let app = build_router(state);

    let addr = config::listen_addr_from_env();
    tracing::info!(bucket = BUCKET_NAME, "Gatewayを {} で起動します", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// テスト
// ---------------------------------------------------------------------------
