//! 逐个检查固定封面链接的可用性，每个链接打印一行 `<url>: <状态码或错误>`。
//!
//! ```bash
//! cargo run --bin check_cover
//! ```

use std::io::{self, Write};

use music_probe_rs::{CoverCheck, ProbeConfig, cover, http, logging};
use tracing::warn;

#[tokio::main]
async fn main() {
    logging::init_tracing();

    let config = ProbeConfig::default();
    let mut out = io::stdout().lock();

    let written = match http::build_client() {
        Ok(client) => cover::report_covers(&client, &config.cover_urls, &mut out).await,
        Err(e) => config.cover_urls.iter().try_for_each(|url| {
            writeln!(out, "{}", CoverCheck::failed(url.as_str(), &e))
        }),
    };

    if let Err(e) = written {
        warn!("写入标准输出失败: {e}");
    }
}
