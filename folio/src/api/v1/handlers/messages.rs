//! v1 Contact message handlers.

use std::convert::Infallible;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::{Stream, StreamExt};

use crate::api::v1::dto::{
    DeletedResponse, ListMessagesResponse, MarkReadResponse, MessageResponse,
    SubmitMessageRequest, SubmitMessageResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::db::watch_messages;
use crate::error::FolioError;
use crate::models::ContactForm;

/// `POST /api/v1/messages`
///
/// Submits the contact form. Failures carry the visitor-facing notice as the
/// error message.
#[utoipa::path(
    post,
    path = "/api/v1/messages",
    tag = "messages",
    operation_id = "messages.submit",
    request_body = SubmitMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = SubmitMessageResponse),
        (status = 400, description = "A form field is empty or invalid", body = ApiError),
        (status = 500, description = "The message could not be stored", body = ApiError),
    )
)]
pub async fn submit_message(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<SubmitMessageRequest>,
) -> ApiResponse<SubmitMessageResponse> {
    let mut form = ContactForm::from(req);
    let outcome = state.contact.submit(&mut form).await;

    match outcome.result {
        Ok(record) => ApiResponse::created(SubmitMessageResponse {
            notice: outcome.notice.to_string(),
            message: MessageResponse::from(record),
        }),
        Err(FolioError::Validation(detail)) => {
            tracing::debug!(%detail, "Contact form rejected");
            ApiResponse::error(ErrorCode::InvalidRequest, outcome.notice)
        }
        Err(_) => ApiResponse::error(ErrorCode::InternalError, outcome.notice),
    }
}

/// `GET /api/v1/messages`
#[utoipa::path(
    get,
    path = "/api/v1/messages",
    tag = "messages",
    operation_id = "messages.list",
    responses(
        (status = 200, description = "Messages listed, newest first", body = ListMessagesResponse),
    )
)]
pub async fn list_messages(State(state): State<AppState>) -> ApiResponse<ListMessagesResponse> {
    match state.db.list_messages().await {
        Ok(messages) => {
            let total = messages.len();
            ApiResponse::success_with_meta(
                ListMessagesResponse {
                    messages: messages.into_iter().map(MessageResponse::from).collect(),
                },
                ResponseMeta::total(total),
            )
        }
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/messages/{messageId}`
#[utoipa::path(
    get,
    path = "/api/v1/messages/{messageId}",
    tag = "messages",
    operation_id = "messages.get",
    params(("messageId" = String, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message found", body = MessageResponse),
        (status = 404, description = "Message not found", body = ApiError),
    )
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<MessageResponse> {
    match state.db.get_message(&id).await {
        Ok(Some(message)) => ApiResponse::success(MessageResponse::from(message)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, format!("Message {id} not found")),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/messages/{messageId}/read`
#[utoipa::path(
    post,
    path = "/api/v1/messages/{messageId}/read",
    tag = "messages",
    operation_id = "messages.markRead",
    params(("messageId" = String, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message marked read", body = MarkReadResponse),
        (status = 404, description = "Message not found", body = ApiError),
    )
)]
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<MarkReadResponse> {
    match state.db.mark_message_read(&id).await {
        Ok(true) => ApiResponse::success(MarkReadResponse {
            message_id: id,
            read: true,
        }),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, format!("Message {id} not found")),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/messages/{messageId}`
#[utoipa::path(
    delete,
    path = "/api/v1/messages/{messageId}",
    tag = "messages",
    operation_id = "messages.delete",
    params(("messageId" = String, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message deleted", body = DeletedResponse),
        (status = 404, description = "Message not found", body = ApiError),
    )
)]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<DeletedResponse> {
    match state.db.delete_message(&id).await {
        Ok(true) => ApiResponse::success(DeletedResponse { id, deleted: true }),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, format!("Message {id} not found")),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/messages:watch`
///
/// Server-sent `messages` events, each the full message list newest first.
#[utoipa::path(
    get,
    path = "/api/v1/messages:watch",
    tag = "messages",
    operation_id = "messages.watch",
    responses(
        (status = 200, description = "Event stream of message snapshots", body = String, content_type = "text/event-stream"),
    )
)]
pub async fn watch_messages_feed(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = watch_messages(state.db.clone()).map(|snapshot| {
        let event = match snapshot {
            Ok(messages) => {
                let messages: Vec<MessageResponse> =
                    messages.into_iter().map(MessageResponse::from).collect();
                Event::default()
                    .event("messages")
                    .json_data(messages)
                    .unwrap_or_else(|e| Event::default().event("error").data(e.to_string()))
            }
            Err(e) => {
                tracing::error!(error = %e, "Message feed failed");
                Event::default()
                    .event("error")
                    .data("An internal error occurred")
            }
        };
        Ok(event)
    });

    Sse::new(stream.take_until(state.shutdown.clone().cancelled_owned()))
        .keep_alive(KeepAlive::default())
}
