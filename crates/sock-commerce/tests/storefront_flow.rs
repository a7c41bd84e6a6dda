//! End-to-end session through `Storefront::dispatch`.

use std::cell::RefCell;
use std::rc::Rc;

use sock_commerce::prelude::*;

fn rating(value: i64) -> Rating {
    Rating::new(value).unwrap()
}

#[test]
fn test_full_shopping_session() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let mut store = Storefront::default();
    store.subscribe(move |e: &StorefrontEvent| sink.borrow_mut().push(e.kind()));

    let session = vec![
        UiEvent::AddToCart,
        UiEvent::AddToCart,
        UiEvent::HoverVariant(1),
        UiEvent::AddToCart,
        UiEvent::HoverVariant(0),
        UiEvent::RemoveFromCart,
        UiEvent::SelectTab(ReviewTab::MakeAReview),
        UiEvent::EditName("Ada".to_string()),
        UiEvent::SubmitReview,
        UiEvent::EditName("Ada".to_string()),
        UiEvent::EditReview("Soft and warm".to_string()),
        UiEvent::SelectRating(rating(5)),
        UiEvent::SubmitReview,
        UiEvent::SelectTab(ReviewTab::Reviews),
    ];

    let outcomes: Vec<Dispatch> = session
        .into_iter()
        .map(|e| store.dispatch(e).unwrap())
        .collect();

    // The out-of-stock add is the only ignored click.
    let ignored = outcomes
        .iter()
        .filter(|o| matches!(o, Dispatch::Ignored { .. }))
        .count();
    assert_eq!(ignored, 1);

    assert_eq!(store.cart().entries(), &[VariantId::new(2234)]);
    assert_eq!(store.panel().selected_tab(), ReviewTab::Reviews);
    assert_eq!(
        store.panel().reviews(),
        &[ReviewRecord {
            name: "Ada".to_string(),
            review: "Soft and warm".to_string(),
            rating: rating(5),
        }]
    );
    assert!(store.intake().errors().is_empty());
    assert!(store.intake().draft().is_empty());

    assert_eq!(
        *events.borrow(),
        vec![
            "cart_changed",
            "cart_changed",
            "variant_selected",
            "variant_selected",
            "cart_changed",
            "tab_selected",
            "review_rejected",
            "review_accepted",
            "tab_selected",
        ]
    );
}

#[test]
fn test_rejection_clears_input() {
    let mut store = Storefront::default();
    store.dispatch(UiEvent::EditName("Ada".to_string())).unwrap();
    store
        .dispatch(UiEvent::EditReview("Nice".to_string()))
        .unwrap();
    store.dispatch(UiEvent::SubmitReview).unwrap();

    assert_eq!(store.intake().errors(), &[ValidationError::RatingRequired]);
    assert_eq!(store.intake().draft(), &FormDraft::new());

    // Resubmitting only the rating is still rejected: nothing was kept.
    store.dispatch(UiEvent::SelectRating(rating(3))).unwrap();
    store.dispatch(UiEvent::SubmitReview).unwrap();
    assert_eq!(
        store.intake().errors(),
        &[ValidationError::NameRequired, ValidationError::ReviewRequired]
    );
    assert!(store.panel().is_empty());
}

#[test]
fn test_session_from_json() {
    let json = r#"[
        {"type": "add_to_cart"},
        {"type": "add_to_cart"},
        {"type": "remove_from_cart"},
        {"type": "select_rating", "value": 2}
    ]"#;
    let session: Vec<UiEvent> = serde_json::from_str(json).unwrap();

    let mut store = Storefront::default();
    for event in session {
        store.dispatch(event).unwrap();
    }

    assert_eq!(store.cart().count(), 1);
    assert_eq!(store.intake().draft().rating, Some(rating(2)));
}
