use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tera::Tera;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Templates are parsed once at startup
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, templates: Tera) -> Self {
        Self {
            db,
            templates: Arc::new(templates),
        }
    }
}
