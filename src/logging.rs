//! 日志初始化。

use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEFAULT_FILTER: &str = "warn";

/// 安装全局的 `tracing` 订阅者。
///
/// 过滤规则取自 `RUST_LOG`，未设置时为 `warn`。日志写入 stderr，
/// stdout 只留给工具本身的输出。重复调用是安全的。
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
