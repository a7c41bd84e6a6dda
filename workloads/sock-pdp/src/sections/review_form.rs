//! Review form renderer.

use sock_commerce::review::{error_heading, Rating, ReviewIntake, ReviewTab};

use super::escape_html;

/// Render the review form with any errors from the last attempt.
pub fn render_review_form(intake: &ReviewIntake, selected_tab: ReviewTab) -> String {
    let hidden = if selected_tab == ReviewTab::MakeAReview {
        ""
    } else {
        r#" style="display: none;""#
    };

    let errors = intake.errors();
    let errors_html = if errors.is_empty() {
        String::new()
    } else {
        let items: String = errors
            .iter()
            .map(|error| format!("<li>{}</li>", error))
            .collect();
        format!(
            r#"<div class="form-errors">
        <b>{heading}</b>
        <ul>{items}</ul>
    </div>"#,
            heading = error_heading(errors.len()),
            items = items
        )
    };

    let draft = intake.draft();
    let options: String = Rating::descending()
        .map(|rating| {
            let selected = if draft.rating == Some(rating) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = rating,
                selected = selected
            )
        })
        .collect();

    format!(
        r#"<form class="review-form" data-tab="make-a-review"{hidden}>
    {errors_html}
    <p>
        <label for="name">Name:</label>
        <input id="name" placeholder="name" value="{name}">
    </p>
    <p>
        <label for="review">Review:</label>
        <textarea id="review">{review}</textarea>
    </p>
    <p>
        <label for="rating">Rating:</label>
        <select id="rating">{options}</select>
    </p>
    <p>
        <input type="submit" value="Submit">
    </p>
</form>"#,
        hidden = hidden,
        errors_html = errors_html,
        name = escape_html(draft.name.as_deref().unwrap_or("")),
        review = escape_html(draft.review.as_deref().unwrap_or("")),
        options = options
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_errors_before_submit() {
        let html = render_review_form(&ReviewIntake::new(), ReviewTab::MakeAReview);
        assert!(!html.contains("Please correct"));
        assert!(!html.contains("display: none;"));
    }

    #[test]
    fn test_errors_rendered_in_order() {
        let mut intake = ReviewIntake::new();
        intake.submit();
        let html = render_review_form(&intake, ReviewTab::MakeAReview);

        assert!(html.contains("<b>Please correct the following errors</b>"));
        let name = html.find("<li>Name required</li>").unwrap();
        let review = html.find("<li>Review required</li>").unwrap();
        let rating = html.find("<li>Rating required</li>").unwrap();
        assert!(name < review && review < rating);
    }

    #[test]
    fn test_single_error_heading() {
        let mut intake = ReviewIntake::new();
        intake.set_name("Ada");
        intake.set_review("Nice");
        intake.submit();
        let html = render_review_form(&intake, ReviewTab::MakeAReview);
        assert!(html.contains("<b>Please correct the following error</b>"));
    }

    #[test]
    fn test_rating_options_descend() {
        let html = render_review_form(&ReviewIntake::new(), ReviewTab::Reviews);
        let five = html.find(r#"<option value="5">"#).unwrap();
        let one = html.find(r#"<option value="1">"#).unwrap();
        assert!(five < one);
        assert!(html.contains("display: none;"));
    }

    #[test]
    fn test_draft_values_bound() {
        let mut intake = ReviewIntake::new();
        intake.set_name("Ada <3");
        intake.set_rating(Rating::new(4).unwrap());
        let html = render_review_form(&intake, ReviewTab::MakeAReview);
        assert!(html.contains(r#"value="Ada &lt;3""#));
        assert!(html.contains(r#"<option value="4" selected>4</option>"#));
    }
}
