use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::Datelike;
use serde::Deserialize;

use crate::{
    app::AppState,
    i18n::{Language, Translations},
};

#[derive(Debug, Deserialize)]
pub struct HomeParams {
    lang: Option<String>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    language: Language,
    other: Language,
    t: &'static Translations,
    base_url: Arc<str>,
    year: i32,
}

impl HomeTemplate {
    fn new(language: Language, base_url: Arc<str>) -> Self {
        Self {
            language,
            other: language.other(),
            t: language.translations(),
            base_url,
            year: chrono::Local::now().year(),
        }
    }
}

/// Unknown or missing `lang` values fall back to Spanish.
#[tracing::instrument(name = "Home page", skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
) -> impl IntoResponse {
    let language = params
        .lang
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or_default();

    HomeTemplate::new(language, Arc::clone(&state.base_url))
}
