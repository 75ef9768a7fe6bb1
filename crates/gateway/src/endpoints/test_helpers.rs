//! # エンドポイントテスト用共通ヘルパー

use std::sync::Arc;

use crate::config::{GatewayState, BUCKET_NAME};
use crate::storage::memory::MemoryStorage;

/// インメモリストレージを持つテスト用GatewayStateを構築する。
pub fn test_state() -> Arc<GatewayState> {
    Arc::new(GatewayState::new(Box::new(MemoryStorage::new(BUCKET_NAME))))
}

/// 全操作が失敗するストレージを持つテスト用GatewayState。
pub fn failing_state() -> Arc<GatewayState> {
    Arc::new(GatewayState::new(Box::new(MemoryStorage::failing(BUCKET_NAME))))
}
