use std::sync::Arc;

use crate::catalog::{CatalogStore, MemoryCatalog};
use crate::core::Config;
use crate::pricing::FallbackPolicy;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，可直接作为 axum `State` 使用。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<dyn CatalogStore> | 商品目录存储 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 目录存储 (套餐包装、折扣、菜品)
    pub catalog: Arc<dyn CatalogStore>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    pub fn new(config: Config, catalog: Arc<dyn CatalogStore>) -> Self {
        Self { config, catalog }
    }

    /// 使用内存目录初始化
    pub fn initialize(config: &Config) -> Self {
        tracing::info!(
            fallback = ?config.discount_fallback,
            "Initializing in-memory catalog"
        );
        Self::new(config.clone(), Arc::new(MemoryCatalog::new()))
    }

    /// 折扣价格回退策略 (创建与编辑共用同一策略)
    pub fn discount_fallback(&self) -> FallbackPolicy {
        self.config.discount_fallback
    }

    /// 执行一次折扣过期扫描
    pub async fn sweep_expired_discounts(&self) -> usize {
        let now = shared::util::now_millis();
        match self.catalog.sweep_expired(now).await {
            Ok(0) => 0,
            Ok(changed) => {
                tracing::info!(changed, "Expired discounts un-approved");
                changed
            }
            Err(e) => {
                tracing::error!(error = %e, "Discount expiry sweep failed");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DiscountPayload, DiscountType};

    #[tokio::test]
    async fn test_sweep_unapproves_expired() {
        let state = ServerState::new(Config::default(), Arc::new(MemoryCatalog::new()));
        let payload = DiscountPayload {
            title: "Happy hour".to_string(),
            description: None,
            original_price: 10.0,
            discount_type: DiscountType::Fixed,
            discount_value: 2.0,
            discounted_price: 8.0,
            extras: vec![],
            expires_at: Some(1),
        };
        let discount = state
            .catalog
            .create_discount("v1", payload, 0)
            .await
            .unwrap();
        state
            .catalog
            .set_discount_approval(&discount.id, true, 0)
            .await
            .unwrap();

        assert_eq!(state.sweep_expired_discounts().await, 1);
        assert_eq!(state.sweep_expired_discounts().await, 0);
    }
}
