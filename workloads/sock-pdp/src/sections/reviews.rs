//! Review panel renderer.

use sock_commerce::review::{ReviewPanel, ReviewRecord, ReviewTab, NO_REVIEWS_MESSAGE};

use super::escape_html;

/// Render the tab strip and the Reviews view.
///
/// The Reviews view is hidden while the form tab is active; the form itself
/// is rendered by [`crate::sections::render_review_form`].
pub fn render_review_tabs(panel: &ReviewPanel) -> String {
    ReviewTab::ALL
        .iter()
        .map(|tab| {
            let active = if *tab == panel.selected_tab() {
                " activeTab"
            } else {
                ""
            };
            format!(
                r#"<span class="tab{active}">{label}</span>"#,
                active = active,
                label = tab.label()
            )
        })
        .collect()
}

/// Render the list of accepted reviews.
pub fn render_review_list(panel: &ReviewPanel) -> String {
    let hidden = if panel.selected_tab() == ReviewTab::Reviews {
        ""
    } else {
        r#" style="display: none;""#
    };

    let body = if panel.is_empty() {
        format!("<p>{}</p>", NO_REVIEWS_MESSAGE)
    } else {
        let items: String = panel.reviews().iter().map(render_single_review).collect();
        format!("<ul>{}</ul>", items)
    };

    format!(
        r#"<div class="reviews-list" data-tab="reviews"{hidden}>
    <h2>Reviews</h2>
    {body}
</div>"#,
        hidden = hidden,
        body = body
    )
}

fn render_single_review(review: &ReviewRecord) -> String {
    format!(
        r#"<li>
        <p>Name: {name}</p>
        <p>Review: {text}</p>
        <p>{rating}</p>
    </li>"#,
        name = escape_html(&review.name),
        text = escape_html(&review.review),
        rating = review.rating
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sock_commerce::review::Rating;

    #[test]
    fn test_empty_reviews_message() {
        let html = render_review_list(&ReviewPanel::new());
        assert!(html.contains("<p>there are no reviews yet.</p>"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_reviews_in_insertion_order() {
        let mut panel = ReviewPanel::new();
        for (name, stars) in [("Ada", 5), ("Grace", 2)] {
            panel.add_review(ReviewRecord {
                name: name.to_string(),
                review: "Nice & warm".to_string(),
                rating: Rating::new(stars).unwrap(),
            });
        }

        let html = render_review_list(&panel);
        let ada = html.find("Name: Ada").unwrap();
        let grace = html.find("Name: Grace").unwrap();
        assert!(ada < grace);
        assert!(html.contains("Review: Nice &amp; warm"));
        assert!(html.contains("<p>5</p>"));
        assert!(!html.contains(NO_REVIEWS_MESSAGE));
    }

    #[test]
    fn test_active_tab_marked() {
        let mut panel = ReviewPanel::new();
        panel.select_tab(ReviewTab::MakeAReview);
        let tabs = render_review_tabs(&panel);
        assert!(tabs.contains(r#"<span class="tab activeTab">Make a Review</span>"#));
        assert!(tabs.contains(r#"<span class="tab">Reviews</span>"#));
        assert!(render_review_list(&panel).contains("display: none;"));
    }
}
