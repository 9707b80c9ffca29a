//! Page handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::{AppState, Page};

/// Landing page, or the sign-in page for `?page=login`.
///
/// Query pairs are taken as a list so repeated keys never reject the request;
/// the first `page` value wins.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let page = Page::from_query(page_param(&params));
    render(&state, page, false)
}

fn page_param(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str())
}

/// Sign-in page.
pub async fn login_page(State(state): State<AppState>) -> Response {
    render(&state, Page::Login, false)
}

/// Sign-in form target.
///
/// The submitted credentials are never read; the response is the sign-in
/// page with a static acknowledgment.
pub async fn submit_login(State(state): State<AppState>) -> Response {
    tracing::debug!("Sign-in form submitted");
    render(&state, Page::Login, true)
}

fn render(state: &AppState, page: Page, sign_in_submitted: bool) -> Response {
    match state.render(page, sign_in_submitted) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
