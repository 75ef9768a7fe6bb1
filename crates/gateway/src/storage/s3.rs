//! # S3互換 ObjectStorage 実装
//!
//! Google Cloud Storage（XML相互運用API）、AWS S3、MinIO 等の
//! S3互換APIを使用するObjectStorage実装。

use poc_storage_types::ObjectInfo;

use super::{public_object_url, ObjectStorage, DEFAULT_PUBLIC_BASE_URL};
use crate::error::GatewayError;

/// デフォルトのストレージエンドポイント（GCS XML API）
const DEFAULT_ENDPOINT: &str = "https://storage.googleapis.com";

/// S3互換ストレージによるObjectStorage実装。
pub struct S3ObjectStorage {
    /// 操作対象のバケット（プロセス起動時に一度だけ構築）
    bucket: s3::Bucket,
    /// バケット名
    bucket_name: String,
    /// 公開URLのベース
    public_base_url: String,
    /// 署名に必要な認証情報が揃っているか。
    /// falseの場合、署名付きURLの生成はストレージエラーになる。
    can_sign: bool,
}

impl S3ObjectStorage {
    /// S3互換バケットからObjectStorageを構築する。
    pub fn new(bucket: s3::Bucket, public_base_url: String, can_sign: bool) -> Self {
        Self {
            bucket_name: bucket.name(),
            bucket,
            public_base_url,
            can_sign,
        }
    }

    /// エンドポイントからリージョンを推定する。
    ///
    /// GCSは `auto`、AWS S3エンドポイント（s3.REGION.amazonaws.com）は
    /// ホスト名から抽出し、それ以外は us-east-1 をフォールバックとして使用。
    fn detect_region(endpoint: &str) -> String {
        if endpoint.contains("storage.googleapis.com") {
            return "auto".to_string();
        }
        endpoint
            .find("s3.")
            .and_then(|start| {
                let rest = &endpoint[start + 3..];
                rest.find(".amazonaws.com").map(|end| rest[..end].to_string())
            })
            .unwrap_or_else(|| "us-east-1".to_string())
    }

    /// 環境変数から認証情報を解決する。
    ///
    /// STORAGE_ACCESS_KEY / STORAGE_SECRET_KEY → AWS標準の環境変数 → 匿名 の順。
    fn resolve_credentials() -> anyhow::Result<s3::creds::Credentials> {
        if let (Ok(access_key), Ok(secret_key)) = (
            std::env::var("STORAGE_ACCESS_KEY"),
            std::env::var("STORAGE_SECRET_KEY"),
        ) {
            return Ok(s3::creds::Credentials::new(
                Some(&access_key),
                Some(&secret_key),
                None,
                None,
                None,
            )?);
        }

        match s3::creds::Credentials::from_env() {
            Ok(credentials) => Ok(credentials),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "ストレージ認証情報が未設定です。匿名で接続します（署名・書き込みは失敗します）"
                );
                Ok(s3::creds::Credentials::anonymous()?)
            }
        }
    }

    /// S3互換バケットを初期化する。
    fn init_bucket(
        endpoint: &str,
        region: &str,
        credentials: s3::creds::Credentials,
        bucket_name: &str,
    ) -> anyhow::Result<s3::Bucket> {
        let region = s3::Region::Custom {
            region: region.to_string(),
            endpoint: endpoint.to_string(),
        };

        let bucket = s3::Bucket::new(bucket_name, region, credentials)?.with_path_style();

        Ok(*bucket)
    }

    /// 環境変数から構築する。
    pub fn from_env(bucket_name: &str) -> anyhow::Result<Self> {
        let endpoint =
            std::env::var("STORAGE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let region =
            std::env::var("STORAGE_REGION").unwrap_or_else(|_| Self::detect_region(&endpoint));
        let public_base_url = std::env::var("STORAGE_PUBLIC_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string());

        let credentials = Self::resolve_credentials()?;
        let can_sign = credentials.access_key.is_some() && credentials.secret_key.is_some();

        tracing::info!(
            storage_endpoint = %endpoint,
            storage_region = %region,
            bucket = %bucket_name,
            can_sign,
            "オブジェクトストレージを設定"
        );

        let bucket = Self::init_bucket(&endpoint, &region, credentials, bucket_name)?;

        Ok(Self::new(bucket, public_base_url, can_sign))
    }
}

/// HTTPステータスが2xxでなければストレージエラーにする。
fn ensure_success(operation: &str, key: &str, status: u16) -> Result<(), GatewayError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(GatewayError::Storage(format!(
            "{operation}失敗: key={key}, HTTP {status}"
        )))
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3ObjectStorage {
    fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    async fn put_object(
        &self,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), GatewayError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, content, content_type)
            .await
            .map_err(|e| GatewayError::Storage(format!("オブジェクト作成失敗: {e}")))?;
        ensure_success("オブジェクト作成", key, response.status_code())
    }

    async fn object_info(&self, key: &str) -> Result<Option<ObjectInfo>, GatewayError> {
        let (head, status) = self
            .bucket
            .head_object(key)
            .await
            .map_err(|e| GatewayError::Storage(format!("メタデータ取得失敗: {e}")))?;

        if status == 404 {
            return Ok(None);
        }
        ensure_success("メタデータ取得", key, status)?;

        Ok(Some(ObjectInfo {
            name: key.to_string(),
            size: head.content_length.unwrap_or(0).max(0) as u64,
            content_type: head.content_type,
        }))
    }

    async fn delete_object(&self, key: &str) -> Result<bool, GatewayError> {
        // DeleteObjectは存在有無に関わらず204を返すため、事前に存在を確認する
        if self.object_info(key).await?.is_none() {
            return Ok(false);
        }

        let response = self
            .bucket
            .delete_object(key)
            .await
            .map_err(|e| GatewayError::Storage(format!("オブジェクト削除失敗: {e}")))?;
        ensure_success("オブジェクト削除", key, response.status_code())?;

        Ok(true)
    }

    async fn list_objects(&self, max_keys: usize) -> Result<Vec<String>, GatewayError> {
        let (page, status) = self
            .bucket
            .list_page(String::new(), None, None, None, Some(max_keys))
            .await
            .map_err(|e| GatewayError::Storage(format!("オブジェクト一覧取得失敗: {e}")))?;
        ensure_success("オブジェクト一覧取得", "", status)?;

        Ok(page
            .contents
            .into_iter()
            .take(max_keys)
            .map(|object| object.key)
            .collect())
    }

    async fn presign_put(&self, key: &str, expiry_secs: u32) -> Result<String, GatewayError> {
        if !self.can_sign {
            return Err(GatewayError::Storage(
                "署名用の認証情報が設定されていません".to_string(),
            ));
        }

        self.bucket
            .presign_put(key, expiry_secs, None, None)
            .await
            .map_err(|e| GatewayError::Storage(format!("署名付きアップロードURL生成失敗: {e}")))
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url(&self.public_base_url, &self.bucket_name, key)
    }
}
