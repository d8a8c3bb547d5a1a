//! 搜索接口的请求参数模型。

use strum_macros::{AsRefStr, Display, EnumString};

/// 搜索接口 `type` 参数的取值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SearchType {
    /// 歌曲
    #[default]
    Song,
}

/// 一次关键词搜索所需的全部查询参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// 搜索关键词，可以包含任意 Unicode 字符。
    pub keyword: String,
    /// 搜索类型。
    pub search_type: SearchType,
    /// 每页返回的结果数。
    pub num: u32,
    /// 页码（从 1 开始）。
    pub page: u32,
}

impl SearchQuery {
    /// 以默认参数（歌曲、每页 1 条、第 1 页）创建一个查询。
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            search_type: SearchType::Song,
            num: 1,
            page: 1,
        }
    }

    /// 生成 `keyword=...&type=...&num=...&page=...` 形式的查询字符串。
    ///
    /// 关键词中的保留字符与非 ASCII 字符全部经过百分号编码。
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "keyword={}&type={}&num={}&page={}",
            urlencoding::encode(&self.keyword),
            self.search_type,
            self.num,
            self.page
        )
    }

    /// 将查询字符串拼接到 `base_url` 之后，得到完整的请求地址。
    #[must_use]
    pub fn build_url(&self, base_url: &str) -> String {
        format!("{base_url}?{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const KEYWORD: &str = "传奇 (2023 JJ20世界巡回演唱会武汉站";

    fn encoded_keyword(query: &str) -> &str {
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("keyword="))
            .expect("查询字符串中应包含 keyword")
    }

    #[test]
    fn test_query_string_layout() {
        let query = SearchQuery::new("abc");
        assert_eq!(query.to_query_string(), "keyword=abc&type=song&num=1&page=1");
    }

    #[test]
    fn test_keyword_round_trip() {
        let query = SearchQuery::new(KEYWORD);
        let query_string = query.to_query_string();
        let encoded = encoded_keyword(&query_string);

        assert!(encoded.is_ascii(), "编码后的关键词应只包含 ASCII 字符");
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('('));

        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(decoded, KEYWORD);
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let keyword = "a&b=c?d/e#f+g";
        let query = SearchQuery::new(keyword);
        let query_string = query.to_query_string();
        let encoded = encoded_keyword(&query_string);

        assert_eq!(query_string.matches('&').count(), 3, "关键词中的 & 不应破坏参数结构");
        assert_eq!(urlencoding::decode(encoded).unwrap(), keyword);
    }

    #[test]
    fn test_build_url() {
        let query = SearchQuery::new("x");
        assert_eq!(
            query.build_url("https://example.com/api/search"),
            "https://example.com/api/search?keyword=x&type=song&num=1&page=1"
        );
    }

    #[test]
    fn test_search_type_strings() {
        assert_eq!(SearchType::Song.to_string(), "song");
        assert_eq!(SearchType::Song.as_ref(), "song");
        assert_eq!(SearchType::from_str("SONG").unwrap(), SearchType::Song);
        assert!(SearchType::from_str("album").is_err());
    }
}
