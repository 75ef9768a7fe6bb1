//! # PoC Storage 共有型定義
//!
//! Gatewayのクエリパラメータ・レスポンス・オブジェクトメタデータを
//! Rust構造体として提供する。
//!
//! ## 命名規則
//! - クエリパラメータ名はHTTP APIの既存クライアントに合わせる
//!   (`fileName`, `oldFilename`, `filename` が混在する)

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// クエリパラメータ
// ---------------------------------------------------------------------------

/// `?fileName=` を受け取るクエリ。
/// GET /upload/direct, GET /files/signed-url で使用。
#[derive(Debug, Clone, Deserialize)]
pub struct FileNameQuery {
    /// 署名対象のオブジェクトキー（検証なし）
    #[serde(rename = "fileName")]
    pub file_name: String,
}

/// `?filename=` を受け取るクエリ。
/// DELETE /delete, GET /files-info で使用。
#[derive(Debug, Clone, Deserialize)]
pub struct FilenameQuery {
    /// 対象のオブジェクトキー
    pub filename: String,
}

/// `?oldFilename=` を受け取るクエリ。
/// PUT /replace で使用。
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceQuery {
    /// 削除するオブジェクトキー
    #[serde(rename = "oldFilename")]
    pub old_filename: String,
}

// ---------------------------------------------------------------------------
// オブジェクトメタデータ
// ---------------------------------------------------------------------------

/// オブジェクトストレージ上のオブジェクト情報（読み取り専用の射影）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// オブジェクトキー
    pub name: String,
    /// サイズ（バイト）
    pub size: u64,
    /// Content-Type（ストレージ側に記録がない場合はNone）
    pub content_type: Option<String>,
}

impl ObjectInfo {
    /// GET /files-info のレスポンス本文。
    ///
    /// `Name: <n>, Size: <bytes>, Content-Type: <t>` 形式。
    pub fn describe(&self) -> String {
        format!(
            "Name: {}, Size: {}, Content-Type: {}",
            self.name,
            self.size,
            self.content_type.as_deref().unwrap_or("null")
        )
    }
}

// ---------------------------------------------------------------------------
// GET /files/list
// ---------------------------------------------------------------------------

/// GET /files/list レスポンス。
///
/// 空のページは空配列ではなく明示的なメッセージで返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListFilesResponse {
    /// オブジェクト名の一覧（ストレージのデフォルト順、最大1ページ分）
    Files(Vec<String>),
    /// バケットが空の場合のメッセージ
    Empty {
        /// 空状態を示すメッセージ
        message: String,
    },
}

impl ListFilesResponse {
    /// 空状態のメッセージ
    pub const EMPTY_MESSAGE: &'static str = "バケットにファイルがありません";

    /// オブジェクト名一覧からレスポンスを構築する。
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            ListFilesResponse::Empty {
                message: Self::EMPTY_MESSAGE.to_string(),
            }
        } else {
            ListFilesResponse::Files(names)
        }
    }
}
