//! Interactive storefront session.

use std::fs;

use anyhow::{Context as _, Result};
use chrono::Utc;
use dialoguer::{Input, Select};
use sock_commerce::review::{Rating, ReviewTab, Submission};
use sock_commerce::{Dispatch, Storefront, UiEvent};
use sock_observability::{SessionId, SessionRecorder};

use super::show::print_storefront;
use super::ShopArgs;
use crate::context::Context;

/// One line of the shop menu.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Event(UiEvent),
    EnterName,
    EnterReview,
    PickRating,
    Quit,
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let mut recorder = args
        .record
        .as_ref()
        .map(|_| SessionRecorder::new(SessionId::generate()));

    ctx.output.header(&store.selector().title());

    loop {
        print_storefront(&store, ctx);
        ctx.output.info("");

        let items = menu(&store);
        let labels: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let event = match &items[choice].1 {
            Action::Quit => break,
            Action::Event(event) => event.clone(),
            Action::EnterName => {
                let name: String = Input::new()
                    .with_prompt("Name")
                    .allow_empty(true)
                    .interact_text()?;
                UiEvent::EditName(name)
            }
            Action::EnterReview => {
                let review: String = Input::new()
                    .with_prompt("Review")
                    .allow_empty(true)
                    .interact_text()?;
                UiEvent::EditReview(review)
            }
            Action::PickRating => {
                let ratings: Vec<Rating> = Rating::descending().collect();
                let labels: Vec<String> = ratings.iter().map(|r| r.to_string()).collect();
                let picked = Select::new()
                    .with_prompt("Rating")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                UiEvent::SelectRating(ratings[picked])
            }
        };

        if let Some(recorder) = recorder.as_mut() {
            recorder.record(&event)?;
        }
        apply(&mut store, event, ctx)?;
    }

    if let (Some(path), Some(recorder)) = (args.record, recorder) {
        let path = ctx.resolve_path(&path);
        let count = recorder.len();
        let recording = recorder.finalize(Utc::now().to_rfc3339());
        fs::write(&path, recording.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output
            .success(&format!("Recorded {} events to {}", count, path.display()));
    }

    Ok(())
}

/// Apply one event and tell the shopper what happened.
fn apply(store: &mut Storefront, event: UiEvent, ctx: &Context) -> Result<()> {
    if event == UiEvent::SubmitReview {
        match store.submit_review() {
            Submission::Accepted(record) => {
                ctx.output.success(&format!("Thanks for the review, {}!", record.name))
            }
            Submission::Rejected(errors) => {
                ctx.output.warn(&format!("{} problem(s) with the review", errors.len()))
            }
        }
        return Ok(());
    }

    match store.dispatch(event)? {
        Dispatch::Applied => {}
        Dispatch::Ignored { reason } => ctx.output.warn(&format!("Button disabled: {}", reason)),
    }
    Ok(())
}

/// Menu entries for the current state.
fn menu(store: &Storefront) -> Vec<(String, Action)> {
    let selector = store.selector();
    let mut items = Vec::new();

    for (index, variant) in selector.product().variants().iter().enumerate() {
        if index != selector.selected_index() {
            items.push((
                format!("Look at {}", variant.color),
                Action::Event(UiEvent::HoverVariant(index)),
            ));
        }
    }

    if store.cart_buttons_enabled() {
        items.push(("Add to cart".to_string(), Action::Event(UiEvent::AddToCart)));
        items.push(("Remove from cart".to_string(), Action::Event(UiEvent::RemoveFromCart)));
    }

    match store.panel().selected_tab() {
        ReviewTab::Reviews => items.push((
            format!("Open \"{}\"", ReviewTab::MakeAReview),
            Action::Event(UiEvent::SelectTab(ReviewTab::MakeAReview)),
        )),
        ReviewTab::MakeAReview => {
            let draft = store.intake().draft();
            items.push((
                format!("Name: {}", draft.name.as_deref().unwrap_or("")),
                Action::EnterName,
            ));
            items.push((
                format!("Review: {}", draft.review.as_deref().unwrap_or("")),
                Action::EnterReview,
            ));
            items.push((
                format!(
                    "Rating: {}",
                    draft.rating.map(|r| r.to_string()).unwrap_or_default()
                ),
                Action::PickRating,
            ));
            items.push(("Submit".to_string(), Action::Event(UiEvent::SubmitReview)));
            items.push((
                format!("Back to \"{}\"", ReviewTab::Reviews),
                Action::Event(UiEvent::SelectTab(ReviewTab::Reviews)),
            ));
        }
    }

    items.push(("Quit".to_string(), Action::Quit));
    items
}
