//! v1 Chat assistant handlers.

use axum::extract::{Path, State};

use crate::api::v1::dto::{
    ChatMessageResponse, ChatSessionResponse, SendMessageRequest, SendMessageResponse,
    ToggleChatResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;

/// `POST /api/v1/chat/sessions`
///
/// Opens a new session holding only the welcome message.
#[utoipa::path(
    post,
    path = "/api/v1/chat/sessions",
    tag = "chat",
    operation_id = "chat.createSession",
    responses(
        (status = 201, description = "Session created", body = ChatSessionResponse),
    )
)]
pub async fn create_session(State(state): State<AppState>) -> ApiResponse<ChatSessionResponse> {
    match state.assistant.create_session() {
        Ok((id, session)) => ApiResponse::created(ChatSessionResponse::new(id, &session)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/chat/sessions/{sessionId}`
#[utoipa::path(
    get,
    path = "/api/v1/chat/sessions/{sessionId}",
    tag = "chat",
    operation_id = "chat.getSession",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session transcript", body = ChatSessionResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<ChatSessionResponse> {
    match state.assistant.get_session(&id).await {
        Ok(session) => ApiResponse::success(ChatSessionResponse::new(id, &session)),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/chat/sessions/{sessionId}/messages`
///
/// Appends the visitor message and the assistant reply. Returns 409 while a
/// previous reply for the same session is still pending, or when the session
/// is cleared before this reply is ready.
#[utoipa::path(
    post,
    path = "/api/v1/chat/sessions/{sessionId}/messages",
    tag = "chat",
    operation_id = "chat.send",
    params(("sessionId" = String, Path, description = "Session ID")),
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "User message and reply", body = SendMessageResponse),
        (status = 400, description = "Empty message", body = ApiError),
        (status = 404, description = "Session not found", body = ApiError),
        (status = 409, description = "A reply is already pending, or the session was cleared", body = ApiError),
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    axum::Json(req): axum::Json<SendMessageRequest>,
) -> ApiResponse<SendMessageResponse> {
    let content = req.content.trim();
    if content.is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Message cannot be empty");
    }

    match state.assistant.send(&id, content).await {
        Ok(messages) => ApiResponse::success(SendMessageResponse {
            messages: messages.into_iter().map(ChatMessageResponse::from).collect(),
        }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/chat/sessions/{sessionId}/clear`
///
/// Resets the transcript to the welcome message.
#[utoipa::path(
    post,
    path = "/api/v1/chat/sessions/{sessionId}/clear",
    tag = "chat",
    operation_id = "chat.clear",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session cleared", body = ChatSessionResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn clear_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<ChatSessionResponse> {
    match state.assistant.clear(&id).await {
        Ok(session) => ApiResponse::success(ChatSessionResponse::new(id, &session)),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/chat/sessions/{sessionId}/toggle`
#[utoipa::path(
    post,
    path = "/api/v1/chat/sessions/{sessionId}/toggle",
    tag = "chat",
    operation_id = "chat.toggle",
    params(("sessionId" = String, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Panel visibility after the toggle", body = ToggleChatResponse),
        (status = 404, description = "Session not found", body = ApiError),
    )
)]
pub async fn toggle_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<ToggleChatResponse> {
    match state.assistant.toggle(&id).await {
        Ok(is_open) => ApiResponse::success(ToggleChatResponse { is_open }),
        Err(e) => e.into(),
    }
}
