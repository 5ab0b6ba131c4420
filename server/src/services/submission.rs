//! Normalization of user-submitted tools and reviews.

use client::net::types::Review;
use time::Date;

use super::store::NewTool;

const LOGO_SERVICE: &str = "https://logo.clearbit.com";
const DEFAULT_PRICING: &str = "Free";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please provide a {0}.")]
    MissingField(&'static str),
    #[error("Please choose a rating from 1 to 5.")]
    InvalidRating,
}

/// Raw submit-form fields.
#[derive(Debug, Clone, Default)]
pub struct ToolForm {
    pub name: String,
    pub url: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    pub team: String,
    pub pricing: String,
}

/// Prefix `https://` unless the URL already names an http(s) scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    }
}

/// Host part (`netloc`) of an http(s) URL.
fn host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.split(['/', '?', '#']).next().unwrap_or_default()
}

/// Registrable-looking domain: the last two labels when the host has more
/// than two, otherwise the host itself.
pub fn logo_domain(url: &str) -> String {
    let host = host(url);
    let labels: Vec<&str> = host.split('.').collect();
    match labels.as_slice() {
        [.., second, last] if labels.len() > 2 => format!("{second}.{last}"),
        _ => host.to_owned(),
    }
}

pub fn logo_url(url: &str) -> String {
    format!("{LOGO_SERVICE}/{}", logo_domain(url))
}

/// Comma-separated names, trimmed, blanks dropped.
pub fn split_team(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|name| !name.is_empty()).map(str::to_owned).collect()
}

/// Turn the submit form into a storable tool.
///
/// # Errors
///
/// `MissingField` when the name, URL, category, or description is blank.
pub fn build_tool(form: &ToolForm) -> Result<NewTool, SubmitError> {
    let required = |value: &str, label: &'static str| {
        let value = value.trim();
        if value.is_empty() { Err(SubmitError::MissingField(label)) } else { Ok(value.to_owned()) }
    };
    let name = required(&form.name, "name")?;
    let raw_url = required(&form.url, "website URL")?;
    let category = required(&form.category, "category")?;
    let description = required(&form.description, "description")?;

    let url = normalize_url(&raw_url);
    let long_description = match form.long_description.trim() {
        "" => description.clone(),
        long => long.to_owned(),
    };
    let pricing = match form.pricing.trim() {
        "" => DEFAULT_PRICING.to_owned(),
        pricing => pricing.to_owned(),
    };

    Ok(NewTool {
        name,
        category,
        description,
        long_description,
        logo_url: logo_url(&url),
        url,
        ceo_team: split_team(&form.team),
        pricing,
    })
}

/// Parse a form rating and clamp it into `1..=5`.
///
/// # Errors
///
/// `InvalidRating` when the value is not an integer.
pub fn parse_rating(raw: &str) -> Result<u8, SubmitError> {
    let value: i64 = raw.trim().parse().map_err(|_| SubmitError::InvalidRating)?;
    let clamped = value.clamp(1, 5);
    u8::try_from(clamped).map_err(|_| SubmitError::InvalidRating)
}

/// `MM/DD/YYYY`.
pub fn review_date(date: Date) -> String {
    format!("{:02}/{:02}/{:04}", u8::from(date.month()), date.day(), date.year())
}

/// Build a review dated `today`.
///
/// # Errors
///
/// `InvalidRating` for a non-numeric rating, `MissingField` for a blank
/// comment.
pub fn build_review(username: &str, rating: &str, comment: &str, today: Date) -> Result<Review, SubmitError> {
    let rating = parse_rating(rating)?;
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(SubmitError::MissingField("comment"));
    }
    Ok(Review { username: username.to_owned(), rating, comment: comment.to_owned(), date: review_date(today) })
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
