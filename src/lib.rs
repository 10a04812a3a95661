//! LifeTrack: a small wellness-tracking API.
//!
//! Users register with an emergency contact, then record medicine, meal,
//! hydration, appointment and safety tasks. Completing a task e-mails the
//! emergency contact. Tracker views (see [`trackers`]) are derived on the
//! client from the unfiltered task list.
//!
//! | Route | Handler |
//! |---|---|
//! | `POST /api/register` | [`handlers::handle_register`] |
//! | `POST /api/login` | [`handlers::handle_login`] |
//! | `POST /api/tasks` | [`handlers::create_task`] |
//! | `GET /api/tasks/:userId` | [`handlers::list_tasks`] |
//! | `PUT /api/tasks/:id` | [`handlers::complete_task`] |
//! | `DELETE /api/tasks/:id` | [`handlers::delete_task`] |

pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod trackers;
pub mod validation;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};
use crate::config::ServerConfig;
use crate::state::AppState;

pub fn router(state: AppState, server: &ServerConfig) -> Router {
    // `/api/tasks/:id` is the owner's id for GET and the task's id for PUT/DELETE.
    let api = Router::new()
        .route("/register", post(handlers::handle_register))
        .route("/login", post(handlers::handle_login))
        .route("/tasks", post(handlers::create_task))
        .route(
            "/tasks/:id",
            get(handlers::list_tasks)
                .put(handlers::complete_task)
                .delete(handlers::delete_task),
        );

    let mut app = Router::new()
        .route("/test", get(handlers::health))
        .nest("/api", api);

    // Bundled frontend
    if let Some(dir) = &server.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(server.max_body_size))
        .with_state(state)
}
