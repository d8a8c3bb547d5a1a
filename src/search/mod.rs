//! 搜索模块
//!
//! 调用第三方音乐搜索接口，并将返回的 JSON 重新格式化为便于阅读的文本。

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::{ProbeError, Result},
    http::describe_error,
};

pub mod models;

pub use models::{SearchQuery, SearchType};

/// 发起一次搜索请求，并返回解析后的 JSON。
///
/// 只请求一次，不做任何重试。
///
/// # 错误
///
/// * 服务器返回非 2xx 状态码时返回 `ProbeError::HttpStatus`。
/// * 网络错误返回 `ProbeError::Reqwest`。
/// * 响应体不是合法 UTF-8 时返回 `ProbeError::FromUtf8`。
/// * 响应体不是合法 JSON 时返回 `ProbeError::JsonParse`。
pub async fn fetch_search(client: &Client, base_url: &str, query: &SearchQuery) -> Result<Value> {
    let url = query.build_url(base_url);
    debug!("请求搜索接口: {url}");

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::from_status(status));
    }

    let body = response.bytes().await?;
    let text = String::from_utf8(body.to_vec())?;
    let data: Value = serde_json::from_str(&text)?;

    if let Some(code) = data.get("code").and_then(Value::as_i64)
        && code != 0
    {
        warn!("搜索接口返回了非零的 code: {code}");
    }

    Ok(data)
}

/// 以两个空格缩进输出 JSON，非 ASCII 字符保持原样。
pub fn render_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// 执行完整的搜索流程，返回应当打印到控制台的文本。
///
/// 成功时是格式化后的 JSON；任何一步失败时是一行 `Error: <message>`。
pub async fn run_search(client: &Client, base_url: &str, query: &SearchQuery) -> String {
    match fetch_search(client, base_url, query)
        .await
        .and_then(|data| render_pretty(&data))
    {
        Ok(pretty) => pretty,
        Err(e) => {
            warn!("搜索失败: {e}");
            format!("Error: {}", describe_error(&e))
        }
    }
}
