//! Detail page for one tool: description, team, reviews, and review form.

#[cfg(test)]
#[path = "tool_detail_test.rs"]
mod tool_detail_test;

use leptos::prelude::*;

use crate::components::vote_button::VoteButton;
use crate::net::types::{Review, Tool};
use crate::state::catalog::{use_catalog, use_page_data};

/// Highest rating a review may carry.
pub const MAX_RATING: u8 = 5;

/// Form target for posting a review on `id`.
pub fn review_action(id: u32) -> String {
    format!("/ai/{id}/review")
}

/// Filled and empty stars for a rating, clamped to `1..=MAX_RATING`.
pub fn stars(rating: u8) -> String {
    let filled = rating.clamp(1, MAX_RATING);
    let mut out = "★".repeat(usize::from(filled));
    out.push_str(&"☆".repeat(usize::from(MAX_RATING - filled)));
    out
}

/// Summary line for the rating badge.
pub fn rating_summary(tool: &Tool) -> String {
    match tool.average_rating() {
        None => "No reviews yet".to_owned(),
        Some(avg) => {
            let n = tool.reviews.len();
            let noun = if n == 1 { "review" } else { "reviews" };
            format!("{avg:.1} / {MAX_RATING} ({n} {noun})")
        }
    }
}

#[component]
pub fn ToolDetailPage(id: u32) -> impl IntoView {
    let catalog = use_catalog();
    let Some(tool) = catalog.find(id).cloned() else {
        return view! {
            <section class="detail-page detail-page--missing">
                <div class="panel">
                    <h1>"AI tool not found."</h1>
                    <a href="/" class="nav-button-primary">"Back to all tools"</a>
                </div>
            </section>
        }
        .into_any();
    };
    let signed_in = use_page_data().viewer.signed_in();

    let team = (!tool.ceo_team.is_empty()).then(|| {
        view! {
            <div class="detail-team">
                <h3>"Team"</h3>
                <ul>{tool.ceo_team.iter().map(|name| view! { <li>{name.clone()}</li> }).collect_view()}</ul>
            </div>
        }
    });

    let reviews = if tool.reviews.is_empty() {
        view! { <p class="empty-state">"Be the first to review this tool."</p> }.into_any()
    } else {
        view! {
            <ul class="review-list">
                {tool.reviews.iter().cloned().map(|review| view! { <ReviewItem review/> }).collect_view()}
            </ul>
        }
        .into_any()
    };

    let review_form = if signed_in {
        view! {
            <form class="review-form" action=review_action(id) method="post">
                <label for="review-rating">"Rating"</label>
                <select id="review-rating" name="rating" required>
                    {(1..=MAX_RATING)
                        .rev()
                        .map(|r| view! { <option value=r.to_string()>{format!("{r} {}", stars(r))}</option> })
                        .collect_view()}
                </select>
                <label for="review-comment">"Comment"</label>
                <textarea id="review-comment" name="comment" rows="4" required></textarea>
                <button type="submit" class="nav-button-primary">"Submit review"</button>
            </form>
        }
        .into_any()
    } else {
        view! {
            <p class="review-login-prompt">
                <a href="/login">"Log in"</a>
                " to leave a review."
            </p>
        }
        .into_any()
    };

    view! {
        <section class="detail-page">
            <div class="detail-header panel">
                <img class="detail-logo" src=tool.logo_url.clone() alt=format!("{} logo", tool.name)/>
                <div class="detail-title">
                    <h1>{tool.name.clone()}</h1>
                    <span class="tool-category">{tool.category.clone()}</span>
                    <span class="detail-pricing">{tool.pricing.clone().unwrap_or_else(|| "Free".to_owned())}</span>
                    <span class="detail-rating">{rating_summary(&tool)}</span>
                </div>
                <VoteButton tool_id=id count=tool.upvotes/>
            </div>
            <div class="detail-body panel">
                <p class="detail-description">{tool.detail_text().to_owned()}</p>
                <a class="nav-button-primary" href=tool.url.clone() target="_blank" rel="noopener noreferrer">
                    "Visit website"
                </a>
                {team}
            </div>
            <div class="detail-reviews panel">
                <h2>"Reviews"</h2>
                {reviews}
                {review_form}
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    view! {
        <li class="review-item">
            <div class="review-item__meta">
                <strong>{review.username}</strong>
                <span class="review-stars" aria-label=format!("{} out of {MAX_RATING}", review.rating)>
                    {stars(review.rating)}
                </span>
                <span class="review-date">{review.date}</span>
            </div>
            <p>{review.comment}</p>
        </li>
    }
}
