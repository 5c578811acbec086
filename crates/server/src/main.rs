// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod report;

use clap::Parser;
use roster_api::{InMemoryPreferenceStore, RosterDocument, RosterSession, StaticSuggestionService};
use roster_grid::{DEFAULT_VIEWPORT_HEIGHT, GridEvent, GridView, HostIntent};
use std::path::PathBuf;
use tracing::{info, warn};

/// Roster - renders and edits one month of a staff roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the roster document (JSON).
    #[arg(short, long)]
    roster: PathBuf,

    /// The user whose column layout is used.
    #[arg(short, long, default_value = "local")]
    user: String,

    /// Disable every edit.
    #[arg(long)]
    read_only: bool,

    /// Merge day-off suggestions from this JSON file.
    #[arg(short, long)]
    suggestions: Option<PathBuf>,

    /// Visible height of the grid body in pixels.
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    viewport_height: u32,

    /// Vertical scroll offset in pixels.
    #[arg(long, default_value_t = 0)]
    scroll_top: u32,

    /// Write the edited roster here.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(roster = %args.roster.display(), "Loading roster");
    let document: RosterDocument = RosterDocument::load(&args.roster).await?;

    let mut session: RosterSession<InMemoryPreferenceStore> = RosterSession::new(
        document,
        &args.user,
        args.read_only,
        InMemoryPreferenceStore::new(),
    );
    session.dispatch(GridEvent::ViewportResized {
        height: args.viewport_height,
    })?;
    session.dispatch(GridEvent::Scrolled {
        scroll_offset: args.scroll_top,
    })?;

    if let Some(path) = &args.suggestions {
        let service: StaticSuggestionService = StaticSuggestionService::load(path).await?;
        let remaining: Vec<HostIntent> = session.request_suggestions(&service).await?;
        for intent in remaining {
            warn!(?intent, "Intent not handled by the command line");
        }
    }

    let view: GridView = session.view()?;
    print!("{}", report::render_report(&session.document().schedule, &view)?);

    if let Some(path) = &args.output {
        let text: String = serde_json::to_string_pretty(session.document())?;
        tokio::fs::write(path, text).await?;
        info!(
            output = %path.display(),
            version = session.version(),
            "Roster written"
        );
    }

    Ok(())
}
