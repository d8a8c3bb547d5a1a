//! HTTP 客户端的构造，以及把错误链整理成单行描述的工具函数。

use std::error::Error as StdError;

use reqwest::Client;

use crate::error::Result;

const USER_AGENT: &str = concat!("music-probe-rs/", env!("CARGO_PKG_VERSION"));

/// 创建两个工具共用的 HTTP 客户端。
///
/// 只设置 `User-Agent`，超时与重定向策略均保持 `reqwest` 的默认值。
pub fn build_client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// 将错误及其完整的 `source` 链拼接成一行文本，层级之间用 `": "` 分隔。
///
/// 已经出现在前文中的描述会被跳过，避免包装型错误重复输出同一段信息。
/// 返回值保证非空。
pub fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let part = cause.to_string();
        if !part.is_empty() && !message.contains(&part) {
            if !message.is_empty() {
                message.push_str(": ");
            }
            message.push_str(&part);
        }
        source = cause.source();
    }

    let message = message.replace(['\r', '\n'], " ");
    if message.trim().is_empty() {
        "未知错误".to_string()
    } else {
        message
    }
}
