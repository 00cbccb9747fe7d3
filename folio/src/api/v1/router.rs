use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let projects = Router::new()
        .route(
            "/",
            get(handlers::projects::list_projects).post(handlers::projects::create_project),
        )
        .route(
            "/{projectId}",
            get(handlers::projects::get_project)
                .patch(handlers::projects::update_project)
                .delete(handlers::projects::delete_project),
        );

    let messages = Router::new()
        .route(
            "/",
            get(handlers::messages::list_messages).post(handlers::messages::submit_message),
        )
        .route(
            "/{messageId}",
            get(handlers::messages::get_message).delete(handlers::messages::delete_message),
        )
        .route(
            "/{messageId}/read",
            post(handlers::messages::mark_message_read),
        );

    let chat = Router::new()
        .route("/sessions", post(handlers::chat::create_session))
        .route("/sessions/{sessionId}", get(handlers::chat::get_session))
        .route(
            "/sessions/{sessionId}/messages",
            post(handlers::chat::send_message),
        )
        .route(
            "/sessions/{sessionId}/clear",
            post(handlers::chat::clear_session),
        )
        .route(
            "/sessions/{sessionId}/toggle",
            post(handlers::chat::toggle_session),
        );

    let tools = Router::new()
        .route(
            "/skill-analysis",
            post(handlers::tools::analyze_skill_handler),
        )
        .route("/resume", post(handlers::tools::build_resume))
        .route("/project-ideas", post(handlers::tools::suggest_projects))
        .route(
            "/content",
            get(handlers::tools::list_content)
                .post(handlers::tools::generate_content)
                .delete(handlers::tools::clear_content),
        )
        .route("/content/{index}", delete(handlers::tools::delete_content));

    let portfolio = Router::new()
        .route("/", get(handlers::portfolio::get_portfolio))
        .route(
            "/export/{format}",
            get(handlers::portfolio::export_portfolio),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .route(
            "/projects:watch",
            get(handlers::projects::watch_projects_feed),
        )
        .route(
            "/messages:watch",
            get(handlers::messages::watch_messages_feed),
        )
        .nest("/projects", projects)
        .nest("/messages", messages)
        .nest("/chat", chat)
        .nest("/tools", tools)
        .nest("/portfolio", portfolio)
}
