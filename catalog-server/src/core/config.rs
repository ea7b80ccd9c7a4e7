use crate::pricing::FallbackPolicy;

/// 服务器配置 - 目录服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量 (或 `.env` 文件) 覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按天滚动写入文件 |
/// | DISCOUNT_FALLBACK | zero | 折扣无效时的价格回退策略 (zero / original) |
/// | EXPIRY_SWEEP_INTERVAL_SECS | 60 | 折扣过期扫描间隔(秒) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 DISCOUNT_FALLBACK=original cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 折扣价格回退策略 (创建与编辑共用)
    pub discount_fallback: FallbackPolicy,
    /// 折扣过期扫描间隔 (秒)
    pub expiry_sweep_interval_secs: u64,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 加载时遇到的无效配置 (日志尚未初始化，延后输出)
    pub warnings: Vec<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值；无法解析的值记录在
    /// [`Config::warnings`] 中，由调用方在日志初始化后输出
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        let discount_fallback = match get("DISCOUNT_FALLBACK") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warnings.push(format!("DISCOUNT_FALLBACK: {}; using default", e));
                FallbackPolicy::default()
            }),
            None => FallbackPolicy::default(),
        };

        Self {
            http_port: get("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR").filter(|d| !d.is_empty()),
            discount_fallback,
            expiry_sweep_interval_secs: get("EXPIRY_SWEEP_INTERVAL_SECS")
                .and_then(|p| p.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(60),
            shutdown_timeout_ms: get("SHUTDOWN_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            warnings,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, discount_fallback: FallbackPolicy) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.discount_fallback = discount_fallback;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
