use axum::{extract::State, http::StatusCode, response::Html};
use tera::Context;

use crate::state::AppState;
use crate::templates;

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    templates::render(&state.templates, "index.html", &Context::new())
}

pub async fn about() -> Html<&'static str> {
    Html("Hello, world. You're at the DjangoProject01 about page.")
}

pub async fn contact() -> Html<&'static str> {
    Html("Hello, world. You're at the DjangoProject01 contact page.")
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};

    use crate::routes::test_support::{app, body_text, get, test_state};

    #[tokio::test]
    async fn test_home_renders_index_template() {
        let response = get(app(test_state().await), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
        let body = body_text(response).await;
        assert!(body.contains("DjangoProject01"));
    }

    #[tokio::test]
    async fn test_about_returns_fixed_text() {
        let response = get(app(test_state().await), "/about/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "Hello, world. You're at the DjangoProject01 about page."
        );
    }

    #[tokio::test]
    async fn test_contact_returns_fixed_text() {
        let response = get(app(test_state().await), "/contact/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert_eq!(content_type, "text/html; charset=utf-8");
        assert_eq!(
            body_text(response).await,
            "Hello, world. You're at the DjangoProject01 contact page."
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = get(app(test_state().await), "/nowhere/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
