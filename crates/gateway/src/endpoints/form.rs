//! # multipart/form-data の読み取り
//!
//! `file` フィールドをメモリに読み込む。Content-Typeは申告値をそのまま使う。

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::GatewayError;

/// ファイルを含むフォームフィールド名
pub const FILE_FIELD: &str = "file";

/// アップロードされたファイル。リクエスト処理後に破棄される。
pub struct UploadedFile {
    /// クライアントが申告した元のファイル名
    pub file_name: Option<String>,
    /// クライアントが申告したContent-Type（内容からの判定は行わない）
    pub content_type: Option<String>,
    /// ファイル本体
    pub bytes: Bytes,
}

impl UploadedFile {
    /// オブジェクトキーとして使うファイル名。未指定・空の場合は400。
    pub fn object_key(&self) -> Result<&str, GatewayError> {
        match self.file_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(GatewayError::BadRequest(
                "ファイル名が指定されていません".to_string(),
            )),
        }
    }
}

/// multipartから `file` フィールドを読み取る。
///
/// 他のフィールドは読み飛ばす。`file` がない場合は400。
pub async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, GatewayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::BadRequest(format!("multipartの解析に失敗: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| GatewayError::BadRequest(format!("ファイルの読み取りに失敗: {e}")))?;

        return Ok(UploadedFile {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(GatewayError::BadRequest(format!(
        "{FILE_FIELD}フィールドが必要です"
    )))
}
