//! 定义了整个 `music-probe` 库的错误类型 `ProbeError`。

use std::string::FromUtf8Error;

use reqwest::StatusCode;
use thiserror::Error;

/// `music-probe` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum ProbeError {
    /// 服务器返回了非成功的状态码
    #[error("HTTP Error {status}: {reason}")]
    HttpStatus {
        /// 数字状态码，例如 404。
        status: u16,
        /// 状态码的标准描述，例如 "Not Found"。
        reason: String,
    },

    /// 网络请求失败 (源自 `reqwest::Error`)
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// UTF-8 转换失败 (源自 `string::FromUtf8Error`)
    #[error("UTF-8 转换失败: {0}")]
    FromUtf8(#[from] FromUtf8Error),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// `ProbeError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// 由一个非成功的状态码构造 `HttpStatus` 错误。
    pub fn from_status(status: StatusCode) -> Self {
        Self::HttpStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}
