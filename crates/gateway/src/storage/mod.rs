//! # オブジェクトストレージ
//!
//! Gatewayが操作するオブジェクトストレージの抽象インターフェース。
//! S3互換ストレージ実装は `s3` サブモジュールを参照。

#[cfg(feature = "vendor-aws")]
pub mod s3;

#[cfg(test)]
pub mod memory;

#[cfg(feature = "vendor-aws")]
pub use s3::S3ObjectStorage;

use poc_storage_types::ObjectInfo;

use crate::error::GatewayError;

/// 公開URLのデフォルトベース（Google Cloud Storageの公開URL規約）
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://storage.googleapis.com";

/// オブジェクトストレージの抽象インターフェース。
///
/// 1インスタンスは1バケットに固定される。
/// 同一キーへの並行書き込み・削除は調整せず、ストレージ側で後勝ちとなる。
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// 操作対象のバケット名
    fn bucket_name(&self) -> &str;

    /// オブジェクトを作成する。同名のオブジェクトは上書きされる。
    async fn put_object(
        &self,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), GatewayError>;

    /// オブジェクトのメタデータを取得する。存在しない場合は `None`。
    async fn object_info(&self, key: &str) -> Result<Option<ObjectInfo>, GatewayError>;

    /// オブジェクトを削除する。削除前に存在していたかを返す。
    async fn delete_object(&self, key: &str) -> Result<bool, GatewayError>;

    /// 先頭1ページ分のオブジェクト名を返す（ストレージのデフォルト順）。
    async fn list_objects(&self, max_keys: usize) -> Result<Vec<String>, GatewayError>;

    /// 指定キーへのPUTを許可する署名付きURL（V4署名）を生成する。
    async fn presign_put(&self, key: &str, expiry_secs: u32) -> Result<String, GatewayError>;

    /// オブジェクトの公開URL
    fn public_url(&self, key: &str) -> String;
}

/// `<base>/<bucket>/<key>` 形式の公開URLを構築する。
///
/// キーはパスセグメントごとにURLエンコードし、`/` は区切りとして残す。
pub fn public_object_url(base_url: &str, bucket: &str, key: &str) -> String {
    let encoded_key = key
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{}/{}", base_url.trim_end_matches('/'), bucket, encoded_key)
}
