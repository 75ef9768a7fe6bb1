//! # インメモリ ObjectStorage
//!
//! テスト用。S3への接続なしでオブジェクトの作成・削除・一覧を再現する。

use std::collections::BTreeMap;
use std::sync::Mutex;

use poc_storage_types::ObjectInfo;

use super::{public_object_url, ObjectStorage, DEFAULT_PUBLIC_BASE_URL};
use crate::error::GatewayError;

struct StoredObject {
    content: Vec<u8>,
    content_type: String,
}

/// テスト用のインメモリストレージ。
/// キーは辞書順に保持し、一覧はS3のデフォルト順と同じく辞書順で返す。
pub struct MemoryStorage {
    bucket: String,
    objects: Mutex<BTreeMap<String, StoredObject>>,
    /// trueの場合、全操作がストレージエラーになる
    failing: bool,
}

impl MemoryStorage {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            objects: Mutex::new(BTreeMap::new()),
            failing: false,
        }
    }

    /// 全操作が失敗するストレージ（認証情報欠落・ネットワーク障害の再現）
    pub fn failing(bucket: &str) -> Self {
        Self {
            failing: true,
            ..Self::new(bucket)
        }
    }

    fn check(&self) -> Result<(), GatewayError> {
        if self.failing {
            return Err(GatewayError::Storage(
                "mock backend unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ObjectStorage for MemoryStorage {
    fn bucket_name(&self) -> &str {
        &self.bucket
    }

    async fn put_object(
        &self,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), GatewayError> {
        self.check()?;
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                content: content.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn object_info(&self, key: &str) -> Result<Option<ObjectInfo>, GatewayError> {
        self.check()?;
        Ok(self.objects.lock().unwrap().get(key).map(|o| ObjectInfo {
            name: key.to_string(),
            size: o.content.len() as u64,
            content_type: Some(o.content_type.clone()),
        }))
    }

    async fn delete_object(&self, key: &str) -> Result<bool, GatewayError> {
        self.check()?;
        Ok(self.objects.lock().unwrap().remove(key).is_some())
    }

    async fn list_objects(&self, max_keys: usize) -> Result<Vec<String>, GatewayError> {
        self.check()?;
        Ok(self
            .objects
            .lock()
            .unwrap()
            .keys()
            .take(max_keys)
            .cloned()
            .collect())
    }

    async fn presign_put(&self, key: &str, expiry_secs: u32) -> Result<String, GatewayError> {
        self.check()?;
        Ok(format!(
            "{}?X-Amz-Expires={expiry_secs}&X-Amz-Signature=mock",
            public_object_url("http://mock-storage", &self.bucket, key)
        ))
    }

    fn public_url(&self, key: &str) -> String {
        public_object_url(DEFAULT_PUBLIC_BASE_URL, &self.bucket, key)
    }
}
