pub mod chai;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Hello-site and catalog routes, merged.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about/", get(pages::about))
        .route("/contact/", get(pages::contact))
        .route("/chai/", get(chai::all_chai))
        .route("/chai/details/", get(chai::chai_details))
        .route("/chai/tailwind/", get(chai::show_tailwind))
}
