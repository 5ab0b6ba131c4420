use time::Month;

use super::*;

fn form() -> ToolForm {
    ToolForm {
        name: "Gemini".to_owned(),
        url: "gemini.google.com/app".to_owned(),
        category: "Chatbot".to_owned(),
        description: "Google's assistant".to_owned(),
        long_description: String::new(),
        team: "Sundar Pichai, , Demis Hassabis ".to_owned(),
        pricing: String::new(),
    }
}

fn day(year: i32, month: Month, d: u8) -> Date {
    Date::from_calendar_date(year, month, d).unwrap()
}

// =============================================================================
// URL + logo
// =============================================================================

#[test]
fn normalize_url_adds_https() {
    assert_eq!(normalize_url("perplexity.ai"), "https://perplexity.ai");
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url(" https://example.com "), "https://example.com");
}

#[test]
fn logo_domain_keeps_two_label_hosts() {
    assert_eq!(logo_domain("https://perplexity.ai"), "perplexity.ai");
}

#[test]
fn logo_domain_strips_subdomains() {
    assert_eq!(logo_domain("https://www.google.com/search?q=x"), "google.com");
    assert_eq!(logo_domain("https://gemini.google.com/app"), "google.com");
}

#[test]
fn logo_domain_single_label_host() {
    assert_eq!(logo_domain("http://localhost/tools"), "localhost");
}

#[test]
fn split_team_trims_and_drops_blanks() {
    assert_eq!(split_team("Ana, , Bob ,"), ["Ana", "Bob"]);
    assert!(split_team("").is_empty());
}

// =============================================================================
// build_tool
// =============================================================================

#[test]
fn build_tool_applies_defaults() {
    let tool = build_tool(&form()).unwrap();
    assert_eq!(tool.url, "https://gemini.google.com/app");
    assert_eq!(tool.logo_url, "https://logo.clearbit.com/google.com");
    assert_eq!(tool.long_description, "Google's assistant");
    assert_eq!(tool.pricing, "Free");
    assert_eq!(tool.ceo_team, ["Sundar Pichai", "Demis Hassabis"]);
}

#[test]
fn build_tool_keeps_explicit_values() {
    let mut f = form();
    f.long_description = "Multimodal assistant".to_owned();
    f.pricing = "Freemium".to_owned();
    let tool = build_tool(&f).unwrap();
    assert_eq!(tool.long_description, "Multimodal assistant");
    assert_eq!(tool.pricing, "Freemium");
}

#[test]
fn build_tool_requires_name() {
    let mut f = form();
    f.name = "   ".to_owned();
    assert_eq!(build_tool(&f).unwrap_err(), SubmitError::MissingField("name"));
}

// =============================================================================
// reviews
// =============================================================================

#[test]
fn parse_rating_clamps() {
    assert_eq!(parse_rating("4"), Ok(4));
    assert_eq!(parse_rating("0"), Ok(1));
    assert_eq!(parse_rating("11"), Ok(5));
    assert_eq!(parse_rating("-3"), Ok(1));
    assert_eq!(parse_rating("five"), Err(SubmitError::InvalidRating));
}

#[test]
fn review_date_is_month_day_year() {
    assert_eq!(review_date(day(2025, Month::March, 4)), "03/04/2025");
    assert_eq!(review_date(day(2024, Month::December, 31)), "12/31/2024");
}

#[test]
fn build_review_requires_comment() {
    let today = day(2025, Month::January, 2);
    let review = build_review("ana", "5", "  Great  ", today).unwrap();
    assert_eq!(review.comment, "Great");
    assert_eq!(review.date, "01/02/2025");
    assert_eq!(build_review("ana", "5", " ", today).unwrap_err(), SubmitError::MissingField("comment"));
}
