/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a catalog record id.
///
/// Record ids are opaque strings (UUID v4) so that the web frontend and the
/// backing document store can use them verbatim.
pub fn record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
