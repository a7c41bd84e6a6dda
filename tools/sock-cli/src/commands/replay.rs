//! Replay a recorded session.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use sock_commerce::{Dispatch, Storefront, UiEvent};
use sock_observability::SessionPlayer;

use super::show::print_storefront;
use super::ReplayArgs;
use crate::context::Context;

/// Counts from one replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub ignored: usize,
}

/// Run the replay command.
pub fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let path = ctx.resolve_path(&args.recording);

    ctx.output.header(&format!("Replaying {}", path.display()));
    let summary = replay_file(&mut store, &path, ctx)?;

    if !ctx.output.is_json() {
        ctx.output.kv("Applied", &summary.applied.to_string());
        ctx.output.kv("Ignored", &summary.ignored.to_string());
    }
    print_storefront(&store, ctx);

    if let Some(html) = args.html {
        let html_path = ctx.resolve_path(&html);
        fs::write(&html_path, sock_pdp::render_page(&store))
            .with_context(|| format!("Failed to write {}", html_path.display()))?;
        ctx.output.success(&format!("Wrote {}", html_path.display()));
    }

    Ok(())
}

/// Load a recording and apply its events to `store` in order.
pub fn replay_file(store: &mut Storefront, path: &Path, ctx: &Context) -> Result<ReplaySummary> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recording {}", path.display()))?;
    let player = SessionPlayer::from_json(&json)
        .with_context(|| format!("Invalid recording {}", path.display()))?;

    ctx.logger
        .info_builder("Replaying session")
        .field("recorded_session", player.recording().session_id.as_str())
        .field_u64("events", player.recording().events.len() as u64)
        .emit();

    let events: Vec<UiEvent> = player.events()?;
    replay_events(store, events, ctx)
}

/// Apply events in order, stopping at the first one that cannot be applied.
pub fn replay_events(
    store: &mut Storefront,
    events: Vec<UiEvent>,
    ctx: &Context,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (n, event) in events.into_iter().enumerate() {
        match store
            .dispatch(event)
            .with_context(|| format!("event #{}", n))?
        {
            Dispatch::Applied => summary.applied += 1,
            Dispatch::Ignored { reason } => {
                summary.ignored += 1;
                ctx.output.debug(&format!("event #{} ignored: {}", n, reason));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use sock_commerce::review::{Rating, ReviewTab};
    use sock_observability::{SessionId, SessionRecorder, StructuredLogger};
    use std::path::PathBuf;

    fn context() -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, false),
            logger: StructuredLogger::new(SessionId::from_string("test")),
            cwd: PathBuf::from("."),
        }
    }

    #[test]
    fn test_replay_counts_ignored_clicks() {
        let ctx = context();
        let mut store = ctx.storefront().unwrap();
        let events = vec![
            UiEvent::AddToCart,
            UiEvent::HoverVariant(1),
            UiEvent::AddToCart,
            UiEvent::HoverVariant(0),
            UiEvent::AddToCart,
        ];

        let summary = replay_events(&mut store, events, &ctx).unwrap();
        assert_eq!(summary, ReplaySummary { applied: 4, ignored: 1 });
        assert_eq!(store.cart().count(), 2);
    }

    #[test]
    fn test_replay_stops_at_bad_index() {
        let ctx = context();
        let mut store = ctx.storefront().unwrap();
        let events = vec![UiEvent::AddToCart, UiEvent::HoverVariant(9), UiEvent::AddToCart];

        let err = replay_events(&mut store, events, &ctx).unwrap_err();
        assert!(format!("{:#}", err).contains("event #1"));
        assert_eq!(store.cart().count(), 1);
    }

    #[test]
    fn test_replay_file() {
        let ctx = context();
        let mut recorder = SessionRecorder::new(SessionId::from_string("rec"));
        for event in [
            UiEvent::SelectTab(ReviewTab::MakeAReview),
            UiEvent::EditName("Ann".into()),
            UiEvent::EditReview("Warm".into()),
            UiEvent::SelectRating(Rating::new(4).unwrap()),
            UiEvent::SubmitReview,
        ] {
            recorder.record(&event).unwrap();
        }
        let recording = recorder.finalize("2026-01-01T00:00:00Z");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, recording.to_json().unwrap()).unwrap();

        let mut store = ctx.storefront().unwrap();
        let summary = replay_file(&mut store, &path, &ctx).unwrap();
        assert_eq!(summary.applied, 5);
        assert_eq!(store.panel().reviews().len(), 1);
        assert_eq!(store.panel().reviews()[0].name, "Ann");
    }
}
