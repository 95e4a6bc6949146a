use crate::app::{base_context, page};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use bigapp::{AppState, Routes};
use bigapp::auth::{AllowedSeparators, generate_csrf_token, is_email_address_valid, is_username_valid};
use bigapp::forms::{Addon, Button, FormSet, Input, NULL_MARKER, Switch, Wrap, hidden};
use serde::{Deserialize, Serialize};

pub fn register(routes: Routes) -> Routes {
    routes.route("/account/login", get(login)).route("/account/check", get(check))
}

fn login_form() -> FormSet {
    let row = || Wrap::class("mb-3");
    let mut form = FormSet::new();
    form.add("csrf", &hidden(NULL_MARKER, &generate_csrf_token()));
    form.add("username", &Input::default().label("username").required(true).wrap(row()).render());
    form.add(
        "email",
        &Input::default()
            .input_type("email")
            .label("email address")
            .prepend(Addon::label("@"))
            .wrap(row())
            .render(),
    );
    form.add("remember", &Switch::default().label("Remember me").wrap(row()).render());
    form.add("submit", &Button::submit("Sign in").class("btn-primary").render());
    form
}

async fn login(State(state): State<AppState>) -> Response {
    let mut context = base_context(&state);
    context.insert("form", &login_form());
    page(&state, "account/login.html", &context)
}

#[derive(Debug, Deserialize)]
struct CheckQuery {
    username: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    username: Option<bool>,
    email: Option<bool>,
}

async fn check(Query(query): Query<CheckQuery>) -> Response {
    let separators = AllowedSeparators::DOT | AllowedSeparators::UNDER;
    Json(CheckResult {
        username: query.username.as_deref().map(|u| is_username_valid(u, separators)),
        email: query.email.as_deref().map(is_email_address_valid),
    })
    .into_response()
}
