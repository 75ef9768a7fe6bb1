//! # Gateway設定・共有状態
//!
//! 固定値（バケット名・各種上限）とGatewayの共有状態の定義。

use crate::storage::ObjectStorage;

/// プロセス全体で唯一のバケット名
pub const BUCKET_NAME: &str = "ad-poc-storage";

/// プロキシアップロードの最大サイズ（3MiB）
pub const MAX_UPLOAD_SIZE: usize = 3 * 1024 * 1024;

/// プロキシアップロードで許可するContent-Type
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];

/// 署名付きURLの有効期限（15分）
pub const PRESIGN_EXPIRY_SECS: u32 = 15 * 60;

/// 一覧取得のページサイズ
pub const LIST_PAGE_SIZE: usize = 10;

/// リクエストボディの上限。
/// MAX_UPLOAD_SIZEを超えるファイルも受信し、サイズ検証で400を返すために余裕を持たせる。
pub const MAX_REQUEST_BODY: usize = 16 * 1024 * 1024;

/// 待ち受けアドレスのデフォルト値（GATEWAY_LISTEN_ADDRで上書き）
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Gatewayの共有状態。
///
/// プロセス起動時に一度だけ構築し、`Arc` で全ハンドラに共有する。
pub struct GatewayState {
    /// オブジェクトストレージ（S3互換等、トレイトで抽象化）
    pub storage: Box<dyn ObjectStorage>,
    /// アップロード最大サイズ（バイト）
    pub max_upload_size: usize,
    /// 許可するContent-Type
    pub allowed_content_types: Vec<String>,
    /// 署名付きURLの有効期限（秒）
    pub presign_expiry_secs: u32,
    /// 一覧取得のページサイズ
    pub list_page_size: usize,
}

impl GatewayState {
    /// 固定値の上限で共有状態を構築する。
    pub fn new(storage: Box<dyn ObjectStorage>) -> Self {
        Self {
            storage,
            max_upload_size: MAX_UPLOAD_SIZE,
            allowed_content_types: ALLOWED_CONTENT_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            presign_expiry_secs: PRESIGN_EXPIRY_SECS,
            list_page_size: LIST_PAGE_SIZE,
        }
    }
}

/// 待ち受けアドレスを環境変数から読み込む。
pub fn listen_addr_from_env() -> String {
    std::env::var("GATEWAY_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
}
