use crate::store::FixtureReviews;
use crate::tests::utils::{body_string, card_ids, get, post_form};

#[test]
fn submit_redirects_home() {
    let resp = post_form(
        &FixtureReviews,
        "/reviews",
        "author=Anna&category=goods&rating=2&text=Slow+delivery",
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap().to_str().unwrap(), "/");
}

#[test]
fn submit_does_not_change_the_collection() {
    let before = body_string(get(&FixtureReviews, "/"));
    post_form(&FixtureReviews, "/reviews", "author=Anna&rating=1&text=Meh");
    let after = body_string(get(&FixtureReviews, "/"));

    assert_eq!(before, after);
    assert!(!after.contains("Anna"));

    let pending = body_string(get(&FixtureReviews, "/moderation"));
    assert_eq!(card_ids(&pending), vec![4]);
}

#[test]
fn submit_accepts_empty_body() {
    let resp = post_form(&FixtureReviews, "/reviews", "");
    assert_eq!(resp.status(), 302);
}
