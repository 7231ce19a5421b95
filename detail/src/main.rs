//! # Profile Detail - Console Entry Point
//!
//! Opens the detail screen for one login, drives it until every load has
//! resolved, closes it and prints the close result as JSON.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p detail -- --login octocat --avatar https://avatars.githubusercontent.com/u/583231
//! ```
//!
//! Optional flags: `--api-url <url>`, `--chart-url <prefix>`, `--card`,
//! `--glyphs` (Material icon glyphs instead of text labels).

use detail::core::{DetailConfig, Result};
use detail::services::api::ApiClient;
use detail::services::image::HttpImageLoader;
use detail::ui::console::ConsolePresenter;
use detail::utils::validation::{validate_avatar_url, validate_login};
use detail::{debug, DetailScreen};
use std::sync::Arc;

struct Args {
    login: String,
    avatar: String,
    api_url: Option<String>,
    chart_url: Option<String>,
    card: bool,
    glyphs: bool,
}

fn parse_args() -> Result<Args> {
    let mut pargs = pico_args::Arguments::from_env();

    let args = Args {
        card: pargs.contains("--card"),
        glyphs: pargs.contains("--glyphs"),
        login: pargs.opt_value_from_str("--login")?.unwrap_or_default(),
        avatar: pargs.opt_value_from_str("--avatar")?.unwrap_or_default(),
        api_url: pargs.opt_value_from_str("--api-url")?,
        chart_url: pargs.opt_value_from_str("--chart-url")?,
    };

    let rest = pargs.finish();
    if !rest.is_empty() {
        tracing::warn!(unused = ?rest, "Ignoring unknown arguments");
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Keep guard alive so buffered log lines are flushed on exit
    let _log_guard = debug::init();

    tracing::info!(debug_mode = debug::is_debug_mode(), "Starting profile detail");

    let args = parse_args()?;
    let mut config = DetailConfig::from_env();
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    if let Some(chart_url) = args.chart_url {
        config.chart_url = chart_url;
    }

    for check in [validate_login(&args.login), validate_avatar_url(&args.avatar)] {
        if let Some(error) = check.error {
            tracing::warn!(error = %error, "Suspicious launch input");
        }
    }

    let presenter = ConsolePresenter::stdout().with_glyphs(args.glyphs);
    let result_handle = presenter.result_handle();
    let mut screen = DetailScreen::from_config(
        &config,
        Arc::new(ApiClient::from_config(&config)),
        Arc::new(HttpImageLoader::from_config(&config)),
        Box::new(presenter),
    );

    if let Err(e) = screen.on_create(&args.login, &args.avatar) {
        tracing::warn!(error = %e, "Screen opened without loading");
    }

    // Each stage is bounded by the HTTP timeout; three stages run in sequence
    let deadline = config.http_timeout * 3;
    let settled = tokio::time::timeout(deadline, async {
        while !screen.is_settled() {
            if !screen.pump().await {
                break;
            }
        }
    })
    .await;
    if settled.is_err() {
        tracing::warn!(deadline_secs = deadline.as_secs(), phase = ?screen.phase(), "Screen did not settle - closing anyway");
    }

    let result = if args.card {
        screen.on_card_click()
    } else {
        screen.on_close()
    };
    drop(screen);

    tracing::debug!(
        recorded = result_handle.lock().is_some(),
        active_tasks = debug::active_task_count(),
        "Result delivered to presenter"
    );
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!(error = %e, "Failed to serialise result"),
    }

    Ok(())
}
