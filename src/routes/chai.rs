use axum::{extract::State, http::StatusCode, response::Html};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};
use tera::Context;

use crate::entities::chai_table;
use crate::models::Chai;
use crate::state::AppState;
use crate::templates;

/// Every stored row, unfiltered, in storage (primary key) order.
pub async fn chai_list<C: ConnectionTrait>(db: &C) -> Result<Vec<Chai>, DbErr> {
    chai_table::Entity::find()
        .order_by_asc(chai_table::Column::Id)
        .all(db)
        .await
}

pub async fn all_chai(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    let chai_list = chai_list(&state.db).await.map_err(|e| {
        tracing::error!("Failed to list chai: {e}");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("DB error: {e}"))
    })?;

    templates::render(
        &state.templates,
        "chai/chai_index.html",
        &templates::chai_list_context(&chai_list),
    )
}

/// Not implemented: there is no record identifier to look up yet.
pub async fn chai_details() -> (StatusCode, &'static str) {
    (StatusCode::NOT_IMPLEMENTED, "Chai details are not implemented")
}

pub async fn show_tailwind(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    templates::render(&state.templates, "chai/chai_tailwind.html", &Context::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::entities::chai_table::ChaiType;
    use crate::models::NewChai;
    use crate::routes::test_support::{app, body_text, get, test_state};

    async fn add(state: &AppState, name: &str, chai_type: ChaiType) -> Chai {
        NewChai {
            name: name.to_string(),
            image: format!("{}.png", name.to_lowercase()),
            chai_type,
        }
        .insert(&state.db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_chai_list_is_every_row_in_storage_order() {
        let state = test_state().await;
        assert!(chai_list(&state.db).await.unwrap().is_empty());

        let first = add(&state, "Kiwi", ChaiType::Kiwi).await;
        let second = add(&state, "Adrak", ChaiType::Ginger).await;
        let third = add(&state, "Plain", ChaiType::Plain).await;

        assert_eq!(
            chai_list(&state.db).await.unwrap(),
            vec![first, second, third]
        );
    }

    #[tokio::test]
    async fn test_all_chai_with_empty_table() {
        let response = get(app(test_state().await), "/chai/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("No chai yet"));
    }

    #[tokio::test]
    async fn test_all_chai_renders_rows_in_order() {
        let state = test_state().await;
        add(&state, "Zafrani", ChaiType::Masala).await;
        add(&state, "Elaichi", ChaiType::Elachi).await;

        let response = get(app(state), "/chai/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;

        let zafrani = body.find("Zafrani").expect("first row rendered");
        let elaichi = body.find("Elaichi").expect("second row rendered");
        assert!(zafrani < elaichi);
        assert!(body.contains("Masale Tea"));
        assert!(body.contains("Elachi Tea"));
        assert!(body.contains("zafrani.png"));
    }

    #[tokio::test]
    async fn test_chai_details_is_not_implemented() {
        let response = get(app(test_state().await), "/chai/details/").await;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn test_show_tailwind_renders_demo_page() {
        let response = get(app(test_state().await), "/chai/tailwind/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("tailwind"));
    }
}
