pub mod health;
pub mod render;

use axum::Router;
use tower_http::trace::TraceLayer;

pub fn build_router() -> Router {
    Router::new()
        .merge(health::routes())
        .merge(render::routes())
        .layer(TraceLayer::new_for_http())
}
