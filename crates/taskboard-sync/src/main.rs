/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: One workspace operation against the remote board/task store
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod cli;
mod logging;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use taskboard_adapter::TaskboardClient;
use taskboard_sync::{ChannelNotifier, TaskboardConfig, Workspace};
use tracing::info;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config =
        TaskboardConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(user_id) = args.user_id {
        config.user_id = user_id;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }

    let _log_guard = logging::init_tracing(&config.log_level, config.log_file.as_deref())?;
    info!(base_url = %config.base_url, user_id = %config.user_id, "starting taskboard");

    let client = TaskboardClient::with_config_and_base_url(config.client_config(), &config.base_url)
        .context("build taskboard client")?;
    let (notifier, mut notifications) = ChannelNotifier::new();
    let mut workspace = Workspace::new(Arc::new(client), config.actor(), Arc::new(notifier));

    cli::run(args.command, &mut workspace, &mut notifications).await
}
