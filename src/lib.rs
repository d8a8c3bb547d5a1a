#![warn(missing_docs)]

//! # Music Probe RS
//!
//! 两个独立的小工具共用的库：
//!
//! - **封面检查** (`check_cover`): 对一组 QQ 音乐封面链接逐个发送 `HEAD` 请求，打印状态码或错误。
//! - **搜索抓取** (`fetch_data`): 以固定关键词调用第三方音乐搜索接口，格式化打印返回的 JSON。
//!
//! 两个工具都只请求一次，不重试，也不覆盖 HTTP 客户端的默认超时。
//! 所有错误都会被转换成一行输出，进程始终以 0 退出。
//!
//! ## 检查封面
//!
//! ```rust,no_run
//! use music_probe_rs::{ProbeConfig, cover, http};
//!
//! async {
//!     let config = ProbeConfig::default();
//!     let client = http::build_client().unwrap();
//!     for check in cover::check_covers(&client, &config.cover_urls).await {
//!         println!("{check}");
//!     }
//! };
//! ```
//!
//! ## 搜索
//!
//! ```rust,no_run
//! use music_probe_rs::{ProbeConfig, http, search};
//!
//! async {
//!     let config = ProbeConfig::default();
//!     let client = http::build_client().unwrap();
//!     let output = search::run_search(&client, &config.search_api_url, &config.search).await;
//!     println!("{output}");
//! };
//! ```
pub mod config;
pub mod cover;
pub mod error;
pub mod http;
pub mod logging;
pub mod search;

pub use crate::{
    config::ProbeConfig,
    cover::{CoverCheck, CoverOutcome},
    error::{ProbeError, Result},
    search::{SearchQuery, SearchType},
};
