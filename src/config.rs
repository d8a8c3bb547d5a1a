//! 两个工具使用的固定参数。
//!
//! 工具本身不接受命令行参数或配置文件，所有取值都集中在这里。

use crate::search::SearchQuery;

/// 需要检查的封面链接。
pub const DEFAULT_COVER_URLS: [&str; 2] = [
    "https://y.qq.com/music/photo_new/T062R300x300M000060P0rWL1eOJah.jpg",
    "https://y.qq.com/music/photo_new/T062R300x300M0000048JRIA3PGl5x.jpg",
];

/// 第三方搜索接口地址。
pub const SEARCH_API_URL: &str = "https://api.ygking.top/api/search";

/// 默认搜索关键词。
pub const DEFAULT_KEYWORD: &str = "传奇 (2023 JJ20世界巡回演唱会武汉站";

/// 工具运行所需的全部参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// 按顺序检查的封面链接。
    pub cover_urls: Vec<String>,
    /// 搜索接口地址（不含查询字符串）。
    pub search_api_url: String,
    /// 搜索参数。
    pub search: SearchQuery,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            cover_urls: DEFAULT_COVER_URLS.iter().map(|u| u.to_string()).collect(),
            search_api_url: SEARCH_API_URL.to_string(),
            search: SearchQuery::new(DEFAULT_KEYWORD),
        }
    }
}
