use crate::router::handle;
use crate::store::ReviewSource;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub fn get(source: &dyn ReviewSource, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    handle(req, source).expect("Handler failed")
}

pub fn post_form(source: &dyn ReviewSource, uri: &str, form: &str) -> Response {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap();

    handle(req, source).expect("Handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Review ids in the order their cards appear in the page.
pub fn card_ids(body: &str) -> Vec<i64> {
    body.split("data-review-id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter_map(|id| id.parse().ok())
        .collect()
}
