use super::*;

fn tool(id: u32, name: &str, category: &str, description: &str, upvotes: i64) -> Tool {
    Tool {
        id,
        name: name.to_owned(),
        category: category.to_owned(),
        description: description.to_owned(),
        long_description: None,
        logo_url: String::new(),
        url: String::new(),
        upvotes,
        pricing: None,
        ceo_team: Vec::new(),
        reviews: Vec::new(),
    }
}

fn sample() -> Vec<Tool> {
    vec![
        tool(1, "ChatGPT", "Chatbot", "Conversational assistant", 40),
        tool(2, "Midjourney", "Image", "Image generation from prompts", 25),
        tool(3, "Claude", "Chatbot", "Helpful assistant", 40),
        tool(4, "Runway", "Video", "Video editing with AI", 10),
        tool(5, "Perplexity", "Search", "Answer engine with chat", 30),
    ]
}

#[test]
fn catalog_find_by_id() {
    let catalog = Catalog::new(sample());
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.find(4).map(|t| t.name.as_str()), Some("Runway"));
    assert!(catalog.find(99).is_none());
}

#[test]
fn catalog_default_is_empty() {
    let catalog = Catalog::default();
    assert!(catalog.is_empty());
    assert!(catalog.find(1).is_none());
}

#[test]
fn home_listing_without_search_takes_top_three_by_upvotes() {
    let listing = home_listing(&sample(), None);
    assert_eq!(listing.heading, "Today's Top 3 AI Tools");
    let ids: Vec<u32> = listing.tools.iter().map(|t| t.id).collect();
    // Ties (ChatGPT, Claude at 40) keep catalog order.
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn home_listing_empty_search_behaves_like_none() {
    assert_eq!(home_listing(&sample(), Some("")), home_listing(&sample(), None));
}

#[test]
fn home_listing_search_matches_name_description_or_category() {
    let listing = home_listing(&sample(), Some("chat"));
    let ids: Vec<u32> = listing.tools.iter().map(|t| t.id).collect();
    // name (ChatGPT), category (Chatbot: ChatGPT, Claude), description (Perplexity)
    assert_eq!(ids, vec![1, 3, 5]);
    assert_eq!(listing.heading, "Found 3 results for \"chat\"");
}

#[test]
fn home_listing_search_is_case_insensitive() {
    let listing = home_listing(&sample(), Some("VIDEO"));
    assert_eq!(listing.tools.len(), 1);
    assert_eq!(listing.tools[0].name, "Runway");
    assert_eq!(listing.heading, "Found 1 results for \"video\"");
}

#[test]
fn home_listing_search_without_matches_is_empty() {
    let listing = home_listing(&sample(), Some("quantum"));
    assert!(listing.tools.is_empty());
    assert_eq!(listing.heading, "Found 0 results for \"quantum\"");
}

#[test]
fn home_listing_with_small_catalog_returns_everything() {
    let tools = vec![tool(1, "A", "X", "", 1)];
    assert_eq!(home_listing(&tools, None).tools.len(), 1);
}
