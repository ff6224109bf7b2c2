use crate::domain::{aggregate, derive_view, parse_params, DraftReview, Tab, ViewState};
use crate::errors::ServerError;
use crate::responses::{error_to_response, html_response, json_response, redirect, ResultResp};
use crate::store::ReviewSource;
use crate::templates::pages::{self, BoardVm};
use astra::{Request, Response};
use serde::Serialize;
use std::io::Read;
use tracing::{debug, info};

/// Entry point for the server: always yields a response, turning
/// handler errors into error pages.
pub fn respond(req: Request, source: &dyn ReviewSource) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, source) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    };

    debug!("{method} {path} -> {}", resp.status());
    resp
}

pub fn handle(req: Request, source: &dyn ReviewSource) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let query = req.uri().query().unwrap_or("").to_owned();

    debug!("{method} {path}");

    match (method.as_str(), path.as_str()) {
        ("GET", "/reviews/new") => new_review(&query),
        ("POST", "/reviews") => submit_review(req),
        ("GET", "/api/reviews") => reviews_json(source, &query),
        ("GET", tab_path) => match Tab::from_path(tab_path) {
            Some(tab) => tab_page(source, ViewState::from_params(tab, &parse_params(&query))),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

fn tab_page(source: &dyn ReviewSource, state: ViewState) -> ResultResp {
    match state.tab {
        Tab::Faq => html_response(pages::faq_page(&state)),
        Tab::About => html_response(pages::about_page(&state)),
        Tab::Home | Tab::Moderation => {
            let all = source.list_reviews()?;
            let vm = BoardVm {
                reviews: derive_view(&all, &state),
                stats: aggregate(&all),
                state,
            };

            if vm.state.tab == Tab::Moderation {
                html_response(pages::moderation_page(&vm))
            } else {
                html_response(pages::home_page(&vm))
            }
        }
    }
}

/// Dialog page. Draft fields and the `from` href of the underlying page
/// share the query string.
fn new_review(query: &str) -> ResultResp {
    let from = parse_params(query)
        .get("from")
        .and_then(|href| ViewState::from_href(href))
        .unwrap_or_default();

    html_response(pages::new_review_page(&DraftReview::from_form(query), &from))
}

/// Submit stub: the draft is read and logged, then dropped. Nothing is
/// stored and the collection is unchanged.
fn submit_review(req: Request) -> ResultResp {
    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    let draft = DraftReview::from_form(&body);
    info!(
        author = %draft.author,
        category = draft.category.slug(),
        rating = draft.rating.get(),
        "review draft submitted and discarded"
    );

    redirect("/")
}

#[derive(Serialize)]
struct ReviewsPayload<'a> {
    tab: &'static str,
    query: String,
    stats: crate::domain::ReviewStats,
    reviews: &'a [crate::domain::Review],
}

fn reviews_json(source: &dyn ReviewSource, query: &str) -> ResultResp {
    let params = parse_params(query);
    let tab = match params.get("tab").map(String::as_str) {
        None | Some("home") => Tab::Home,
        Some("moderation") => Tab::Moderation,
        Some(other) => return Err(ServerError::BadRequest(format!("no review listing for tab {other:?}"))),
    };

    let state = ViewState::from_params(tab, &params);
    let all = source.list_reviews()?;
    let reviews = derive_view(&all, &state);

    json_response(&ReviewsPayload {
        tab: if tab == Tab::Moderation { "moderation" } else { "home" },
        query: state.to_query(),
        stats: aggregate(&all),
        reviews: &reviews,
    })
}
