use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "1.0.0",
        description = "Developer portfolio back end: projects, contact messages, a rule-based chat assistant and portfolio exports.",
    ),
    paths(
        handlers::health::health_check,
        handlers::projects::create_project,
        handlers::projects::get_project,
        handlers::projects::update_project,
        handlers::projects::delete_project,
        handlers::projects::list_projects,
        handlers::projects::watch_projects_feed,
        handlers::messages::submit_message,
        handlers::messages::list_messages,
        handlers::messages::get_message,
        handlers::messages::mark_message_read,
        handlers::messages::delete_message,
        handlers::messages::watch_messages_feed,
        handlers::chat::create_session,
        handlers::chat::get_session,
        handlers::chat::send_message,
        handlers::chat::clear_session,
        handlers::chat::toggle_session,
        handlers::tools::analyze_skill_handler,
        handlers::tools::build_resume,
        handlers::tools::suggest_projects,
        handlers::tools::generate_content,
        handlers::tools::list_content,
        handlers::tools::delete_content,
        handlers::tools::clear_content,
        handlers::portfolio::get_portfolio,
        handlers::portfolio::export_portfolio,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Common
        dto::common::V1MessageType,
        dto::common::V1ContentType,
        dto::common::V1Priority,
        dto::common::DeletedResponse,
        // Projects
        dto::projects::CreateProjectRequest,
        dto::projects::UpdateProjectRequest,
        dto::projects::ListProjectsQuery,
        dto::projects::ProjectResponse,
        dto::projects::ListProjectsResponse,
        // Messages
        dto::messages::SubmitMessageRequest,
        dto::messages::MessageResponse,
        dto::messages::SubmitMessageResponse,
        dto::messages::ListMessagesResponse,
        dto::messages::MarkReadResponse,
        // Chat
        dto::chat::SendMessageRequest,
        dto::chat::ChatMessageResponse,
        dto::chat::ChatSessionResponse,
        dto::chat::SendMessageResponse,
        dto::chat::ToggleChatResponse,
        // Tools
        dto::tools::SkillAnalysisRequest,
        dto::tools::SkillAnalysisResponse,
        dto::tools::ResumeRequest,
        dto::tools::ResumeResponse,
        dto::tools::ProjectIdeasRequest,
        dto::tools::ProjectIdeaResponse,
        dto::tools::ProjectIdeasResponse,
        dto::tools::GenerateContentRequest,
        dto::tools::GeneratedContentResponse,
        dto::tools::ContentLibraryResponse,
        // Portfolio
        dto::portfolio::PortfolioProjectResponse,
        dto::portfolio::PortfolioResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        handlers::health::AssistantStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "projects", description = "Project CRUD, filtering and the live project feed"),
        (name = "messages", description = "Contact form submissions and the message inbox"),
        (name = "chat", description = "Chat assistant sessions"),
        (name = "tools", description = "Skill analyzer, resume builder, project ideas and content generator"),
        (name = "portfolio", description = "Portfolio record and exports"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
