// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 日志统一输出到 stderr，报告只写文件
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 日志格式环境变量（text / json）
pub const LOG_FORMAT_ENV: &str = "AMMO_ALLOCATOR_LOG_FORMAT";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=ammo_allocator=trace
/// - AMMO_ALLOCATOR_LOG_FORMAT=json: 输出结构化 JSON 日志
///
/// # 示例
/// ```no_run
/// use ammo_allocator::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.trim().eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true);

    // 重复初始化时忽略（库被多次调用时）
    if json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
