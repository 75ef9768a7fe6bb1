//! # Gateway エラー型
//!
//! 全エンドポイントで共通のエラー型。
//! ストレージ由来のエラー詳細はサーバー側ログにのみ出力し、
//! クライアントには汎用メッセージを返す。

use axum::http::StatusCode;

/// 500応答でクライアントに返す汎用メッセージ
pub const GENERIC_STORAGE_MESSAGE: &str = "ストレージ操作に失敗しました";

/// Gatewayエラー型。
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// 不正なリクエスト（サイズ超過、許可されていないContent-Type、フィールド欠落）
    #[error("{0}")]
    BadRequest(String),
    /// 対象オブジェクトが存在しない
    #[error("ファイルが見つかりません: {0}")]
    NotFound(String),
    /// ストレージ操作に失敗（SDK・ネットワーク・認証情報）
    #[error("ストレージ操作に失敗: {0}")]
    Storage(String),
}

impl axum::response::IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            GatewayError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            GatewayError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            GatewayError::Storage(_) => {
                tracing::error!(error = %self, "リクエスト処理に失敗");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_STORAGE_MESSAGE).into_response()
            }
        }
    }
}
