use crate::router::handle;
use crate::errors::ServerError;
use crate::store::FixtureReviews;
use crate::tests::utils::{body_string, card_ids, get};
use astra::Body;
use http::{Method, Request};

#[test]
fn moderation_lists_only_pending() {
    let resp = get(&FixtureReviews, "/moderation");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(card_ids(&body), vec![4]);
    assert!(body.contains("1 awaiting moderation"));
    assert!(body.contains("Approve"));
    assert!(body.contains("Reject"));
    assert!(body.contains("25.09.2025"));
}

#[test]
fn moderation_respects_filters_but_badge_does_not() {
    let body = body_string(get(&FixtureReviews, "/moderation?category=services"));
    assert!(card_ids(&body).is_empty());
    assert!(body.contains("1 awaiting moderation"));
}

#[test]
fn moderation_json() {
    let body = body_string(get(&FixtureReviews, "/api/reviews?tab=moderation"));
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["tab"], "moderation");
    assert_eq!(json["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(json["reviews"][0]["status"], "pending");
}

#[test]
fn json_rejects_non_listing_tabs() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/reviews?tab=faq")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &FixtureReviews).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
