use crate::store::{FixtureReviews, StaticReviews};
use crate::tests::utils::{body_string, card_ids, get};

#[test]
fn home_lists_approved_reviews_newest_first() {
    let resp = get(&FixtureReviews, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert_eq!(card_ids(&body), vec![1, 2, 3, 5, 6]);
}

#[test]
fn home_shows_platform_stats() {
    let body = body_string(get(&FixtureReviews, "/"));
    assert!(body.contains("4.6"));
    assert!(body.contains("Average rating"));
    assert!(body.contains("Total reviews"));
    assert!(body.contains("98%"));
}

#[test]
fn stats_ignore_filters() {
    let body = body_string(get(&FixtureReviews, "/?category=support"));
    assert_eq!(card_ids(&body), vec![5]);
    assert!(body.contains("4.6"));
}

#[test]
fn five_star_filter() {
    let body = body_string(get(&FixtureReviews, "/?rating=5"));
    let mut ids = card_ids(&body);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn sort_by_rating_is_stable() {
    let body = body_string(get(&FixtureReviews, "/?sort=rating"));
    assert_eq!(card_ids(&body), vec![1, 3, 5, 2, 6]);
}

#[test]
fn filter_bar_preselects_current_values() {
    let body = body_string(get(&FixtureReviews, "/?category=goods&rating=4&sort=rating"));
    assert!(body.contains(r#"<option value="goods" selected>"#));
    assert!(body.contains(r#"<option value="4" selected>"#));
    assert!(body.contains(r#"<option value="rating" selected>"#));
    assert_eq!(card_ids(&body), vec![2, 6]);
}

#[test]
fn malformed_filter_renders_empty_state() {
    let body = body_string(get(&FixtureReviews, "/?category=food"));
    assert!(card_ids(&body).is_empty());
    assert!(body.contains("No reviews match the selected filters."));
}

#[test]
fn nav_links_keep_filters() {
    let body = body_string(get(&FixtureReviews, "/?rating=5"));
    assert!(body.contains(r#"href="/moderation?rating=5""#));
    assert!(body.contains(r#"href="/faq?rating=5""#));
}

#[test]
fn empty_collection_guards_average() {
    let body = body_string(get(&StaticReviews(Vec::new()), "/"));
    assert!(body.contains("No ratings yet"));
    assert!(!body.contains("NaN"));
}

#[test]
fn json_listing_matches_page() {
    let resp = get(&FixtureReviews, "/api/reviews?rating=5&sort=rating");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["tab"], "home");
    assert_eq!(json["stats"]["total_reviews"], 5);
    let ids: Vec<i64> = json["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 5]);
    assert_eq!(json["reviews"][0]["category"], "services");
}

#[test]
fn rating_filter_uses_leading_digits() {
    let body = body_string(get(&FixtureReviews, "/?rating=4abc"));
    assert_eq!(card_ids(&body), vec![2, 6]);
}
