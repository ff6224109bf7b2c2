use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::{handle, respond};
use crate::store::FixtureReviews;
use crate::tests::utils::{body_string, get};
use astra::Body;
use http::{Method, Request};

#[test]
fn faq_renders_all_questions() {
    let resp = get(&FixtureReviews, "/faq");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    for (question, _) in crate::templates::pages::faq::FAQ_ITEMS {
        assert!(body.contains(question), "missing {question}");
    }
    assert_eq!(body.matches("<details").count(), 5);
}

#[test]
fn about_has_contacts() {
    let body = body_string(get(&FixtureReviews, "/about"));
    assert!(body.contains("Our mission"));
    assert!(body.contains("support@reviews.com"));
    assert!(body.contains("+7 (800) 123-45-67"));
}

#[test]
fn active_tab_is_marked() {
    let body = body_string(get(&FixtureReviews, "/about"));
    assert!(body.contains(r#"href="/about" class="text-sm font-medium text-primary" aria-current="page""#));
}

#[test]
fn new_review_dialog_defaults() {
    let body = body_string(get(&FixtureReviews, "/reviews/new"));
    assert!(body.contains(r#"action="/reviews""#));
    assert!(body.contains(r#"value="5" class="sr-only" checked"#));
    assert!(body.contains(r#"<option value="services" selected>"#));
}

#[test]
fn new_review_dialog_prefills_from_query() {
    let body = body_string(get(&FixtureReviews, "/reviews/new?author=Anna&rating=2&category=goods"));
    assert!(body.contains(r#"value="Anna""#));
    assert!(body.contains(r#"value="2" class="sr-only" checked"#));
    assert!(body.contains(r#"<option value="goods" selected>"#));
    assert_eq!(body.matches("star star-filled").count(), 2);
}

#[test]
fn unknown_route_is_not_found() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &FixtureReviews).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn respond_turns_errors_into_pages() {
    let req = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())
        .unwrap();

    let resp = respond(req, &FixtureReviews);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    assert_eq!(respond(req, &FixtureReviews).status(), 200);
}

#[test]
fn dialog_highlights_no_tab_and_keeps_referring_filters() {
    let body = body_string(get(
        &FixtureReviews,
        "/reviews/new?from=%2Fmoderation%3Frating%3D5&rating=2",
    ));

    assert!(!body.contains("aria-current"));
    assert!(body.contains(r#"href="/moderation?rating=5" class="text-sm font-medium text-muted-foreground""#));
    assert!(body.contains(r#"href="/?rating=5""#));
    assert!(body.contains(r#"href="/moderation?rating=5" class="btn outline""#));
    assert!(body.contains(r#"value="2" class="sr-only" checked"#));
}

#[test]
fn dialog_without_origin_falls_back_to_home_links() {
    let body = body_string(get(&FixtureReviews, "/reviews/new?from=%2Fnowhere"));
    assert!(!body.contains("aria-current"));
    assert!(body.contains(r#"href="/" class="btn outline""#));
}

#[test]
fn add_review_link_carries_current_page() {
    let body = body_string(get(&FixtureReviews, "/?rating=5"));
    assert!(body.contains(r#"href="/reviews/new?from=%2F%3Frating%3D5""#));

    let body = body_string(get(&FixtureReviews, "/faq"));
    assert!(body.contains(r#"href="/reviews/new?from=%2Ffaq""#));
}
