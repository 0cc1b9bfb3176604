pub mod library;
pub mod ticketing;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(ticketing::routes())
        .merge(library::routes())
}
