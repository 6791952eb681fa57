//! HTTP routes.
//!
//! The route table is an explicit list of `(path, handler, Cache-Control)`
//! entries folded into a router. Paths are matched exactly and any method is
//! accepted; everything else falls through to axum's default 404.

pub mod calculate;
pub mod home;

use axum::{
    middleware,
    routing::{any, MethodRouter},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_CALCULATE, CACHE_CONTROL_ROOT};
use crate::middleware::request_id_layer;
use crate::state::AppState;

type RouteEntry = (&'static str, MethodRouter<AppState>, &'static str);

fn route_table() -> [RouteEntry; 2] {
    [
        ("/", any(home::index), CACHE_CONTROL_ROOT),
        ("/calculate", any(calculate::calculate), CACHE_CONTROL_CALCULATE),
    ]
}

/// Creates the Axum router with both routes and their cache headers.
pub fn create_router(state: AppState) -> Router {
    route_table()
        .into_iter()
        .fold(Router::new(), |router, (path, handler, cache_control)| {
            router.merge(Router::new().route(path, handler).layer(
                SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static(cache_control),
                ),
            ))
        })
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
