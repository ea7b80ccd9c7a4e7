//! Catalog Server - 商家目录服务
//!
//! # 架构概述
//!
//! 为商家后台表单提供定价和包装逻辑：
//!
//! - **定价** (`pricing`): 折扣价格计算、外卖包装选择、折扣过期
//! - **表单** (`forms`): 原始表单解析与提交校验
//! - **目录** (`catalog`): 包装、折扣、菜品存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # 配置、状态、错误、后台任务
//! ├── api/           # HTTP 路由和处理器
//! ├── catalog/       # 存储层
//! ├── forms/         # 表单适配
//! ├── pricing/       # 纯计算
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod forms;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use catalog::{CatalogStore, MemoryCatalog, RepoError};
pub use crate::core::{Config, Server, ServerState};
pub use pricing::FallbackPolicy;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// 日志保留天数
const LOG_RETENTION_DAYS: u64 = 14;

/// 设置运行环境: 加载 `.env`，初始化日志，清理旧日志
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    for warning in &config.warnings {
        tracing::warn!("Invalid configuration: {}", warning);
    }

    if let Some(dir) = &config.log_dir {
        match cleanup_old_logs(dir, LOG_RETENTION_DAYS) {
            Ok(0) => {}
            Ok(removed) => tracing::info!(removed, "Old log files cleaned up"),
            Err(e) => tracing::warn!(error = %e, "Failed to clean up old logs"),
        }
    }

    config
}
