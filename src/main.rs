// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Guild Scheduler CLI
//!
//! Restores the persisted session and prints the signed-in user's weekly
//! availability grid.

use guild_scheduler::{
    config::Config,
    models::availability::{DAYS_PER_WEEK, HOURS_PER_DAY},
    AppContext,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(api = %config.api_base_url, "Starting Guild Scheduler client");

    let mut ctx = AppContext::from_config(config);
    ctx.start().await;

    let Some(user) = ctx.session.user() else {
        tracing::info!("Not signed in");
        ctx.dispose();
        return Ok(());
    };

    ctx.schedule.init().await;

    println!("{} ({})", user.display_name, user.in_game_nickname);
    let header: String = (0..HOURS_PER_DAY).map(|h| format!("{:<2}", h % 10)).collect();
    println!("     {}", header);
    for day in 0..DAYS_PER_WEEK {
        let row: String = ctx
            .schedule
            .grid()
            .day(day)
            .iter()
            .map(|&available| if available { "# " } else { ". " })
            .collect();
        println!("day{} {}", day, row);
    }
    println!("{} hours available", ctx.schedule.grid().available_count());

    ctx.dispose();
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("guild_scheduler=debug,info")
            }),
        )
        .with(format)
        .init();
}
