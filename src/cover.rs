//! 封面链接可用性检查。
//!
//! 对每个链接发送一次 `HEAD` 请求，并把结果归为三类：成功的状态码、
//! HTTP 错误状态码、以及其它所有失败（DNS、连接、超时等）。

use std::{
    fmt,
    io::{self, Write},
};

use reqwest::Client;
use tracing::{debug, warn};

use crate::http::describe_error;

/// 单个链接的检查结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverOutcome {
    /// 服务器返回了 2xx 状态码。
    Status(u16),
    /// 服务器返回了非 2xx 状态码。
    HttpError(u16),
    /// 请求未能得到响应，附带错误描述。
    Failed(String),
}

/// 一个链接及其检查结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverCheck {
    /// 被检查的链接。
    pub url: String,
    /// 检查结果。
    pub outcome: CoverOutcome,
}

impl fmt::Display for CoverOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) | Self::HttpError(code) => write!(f, "{code}"),
            Self::Failed(message) => f.write_str(message),
        }
    }
}

impl fmt::Display for CoverCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.url, self.outcome)
    }
}

impl CoverCheck {
    /// 在无法发出任何请求时（例如客户端构造失败），为链接生成失败结果。
    pub fn failed(url: impl Into<String>, err: &(dyn std::error::Error + 'static)) -> Self {
        Self {
            url: url.into(),
            outcome: CoverOutcome::Failed(describe_error(err)),
        }
    }
}

/// 对单个链接发送 `HEAD` 请求并分类结果。
///
/// 重定向由客户端自动跟随，报告的是最终响应的状态码。
pub async fn check_cover(client: &Client, url: &str) -> CoverCheck {
    debug!("HEAD {url}");

    let outcome = match client.head(url).send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                CoverOutcome::Status(status.as_u16())
            } else {
                warn!("封面 {url} 返回了 {status}");
                CoverOutcome::HttpError(status.as_u16())
            }
        }
        Err(e) => {
            warn!("封面 {url} 请求失败: {e}");
            CoverOutcome::Failed(describe_error(&e))
        }
    };

    CoverCheck {
        url: url.to_string(),
        outcome,
    }
}

/// 按顺序逐个检查所有链接，每个链接对应一个结果。
///
/// 单个链接的失败不会影响后续链接的检查。
pub async fn check_covers<S: AsRef<str>>(client: &Client, urls: &[S]) -> Vec<CoverCheck> {
    let mut results = Vec::with_capacity(urls.len());
    for url in urls {
        results.push(check_cover(client, url.as_ref()).await);
    }
    results
}

/// 按顺序逐个检查所有链接，并在每个请求结束后立即把结果写入 `out`。
///
/// 每写完一行就刷新一次，后续链接卡住时已完成的结果也已经输出。
pub async fn report_covers<S: AsRef<str>, W: Write>(
    client: &Client,
    urls: &[S],
    out: &mut W,
) -> io::Result<()> {
    for url in urls {
        let check = check_cover(client, url.as_ref()).await;
        writeln!(out, "{check}")?;
        out.flush()?;
    }
    Ok(())
}
