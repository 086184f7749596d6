//! CLI command implementations
//!
//! Each command loads config, talks to the catalog client, and maps errors
//! to semantic exit codes.

use crate::api::CatalogClient;
use crate::cli::{ExitCode, Output, VideosCmd};
use crate::config::Config;

/// `watchtui videos` - fetch and print the catalog listing
pub async fn videos_cmd(cmd: VideosCmd, output: &Output) -> ExitCode {
    let config = Config::load();
    let client = match config.catalog_url {
        Some(ref url) => CatalogClient::with_base_url(url.clone()),
        None => CatalogClient::new(),
    };
    let token = config.bearer_token();

    let mut videos = match client.videos(&token, &cmd.search).await {
        Ok(videos) => videos,
        Err(e) => return output.error(format!("Catalog request failed: {}", e), ExitCode::NetworkError),
    };

    if let Some(limit) = cmd.limit {
        videos.truncate(limit);
    }

    if output.json {
        if output.print(&videos).is_err() {
            return ExitCode::Error;
        }
    } else if videos.is_empty() {
        output.line("No search results found");
    } else {
        for video in &videos {
            output.line(video);
        }
    }

    ExitCode::Success
}
