//! 以固定关键词调用搜索接口，并格式化打印返回的 JSON。
//!
//! ```bash
//! cargo run --bin fetch_data
//! ```

use music_probe_rs::{ProbeConfig, http, logging, search};

#[tokio::main]
async fn main() {
    logging::init_tracing();

    let config = ProbeConfig::default();

    let output = match http::build_client() {
        Ok(client) => search::run_search(&client, &config.search_api_url, &config.search).await,
        Err(e) => format!("Error: {}", http::describe_error(&e)),
    };

    println!("{output}");
}
