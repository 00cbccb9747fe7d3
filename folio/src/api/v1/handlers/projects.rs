//! v1 Project handlers.

use std::convert::Infallible;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum_extra::extract::Query;
use futures::{Stream, StreamExt};
use validator::Validate;

use crate::api::v1::dto::{
    CreateProjectRequest, DeletedResponse, ListProjectsQuery, ListProjectsResponse,
    ProjectResponse, UpdateProjectRequest,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::db::watch_projects;
use crate::models::ProjectFilter;

/// `POST /api/v1/projects`
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    tag = "projects",
    operation_id = "projects.create",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<CreateProjectRequest>,
) -> ApiResponse<ProjectResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }
    if req.title.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Title cannot be empty");
    }

    match state.db.add_project(req.into()).await {
        Ok(project) => ApiResponse::created(ProjectResponse::from(project)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/projects/{projectId}`
#[utoipa::path(
    get,
    path = "/api/v1/projects/{projectId}",
    tag = "projects",
    operation_id = "projects.get",
    params(("projectId" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ApiError),
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<ProjectResponse> {
    match state.db.get_project(&id).await {
        Ok(Some(project)) => ApiResponse::success(ProjectResponse::from(project)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, format!("Project {id} not found")),
        Err(e) => e.into(),
    }
}

/// `PATCH /api/v1/projects/{projectId}`
#[utoipa::path(
    patch,
    path = "/api/v1/projects/{projectId}",
    tag = "projects",
    operation_id = "projects.update",
    params(("projectId" = String, Path, description = "Project ID")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Project not found", body = ApiError),
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    axum::Json(req): axum::Json<UpdateProjectRequest>,
) -> ApiResponse<ProjectResponse> {
    if let Err(e) = req.validate() {
        return ApiResponse::error(ErrorCode::InvalidRequest, e.to_string());
    }

    match state.db.update_project(&id, req.into()).await {
        Ok(project) => ApiResponse::success(ProjectResponse::from(project)),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/projects/{projectId}`
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{projectId}",
    tag = "projects",
    operation_id = "projects.delete",
    params(("projectId" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = DeletedResponse),
        (status = 404, description = "Project not found", body = ApiError),
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<DeletedResponse> {
    match state.db.delete_project(&id).await {
        Ok(true) => ApiResponse::success(DeletedResponse { id, deleted: true }),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, format!("Project {id} not found")),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/projects`
///
/// Lists all projects newest first, optionally keeping only those that use a
/// given technology.
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "projects",
    operation_id = "projects.list",
    params(ListProjectsQuery),
    responses(
        (status = 200, description = "Projects listed", body = ListProjectsResponse),
    )
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> ApiResponse<ListProjectsResponse> {
    let filter = ProjectFilter::parse(query.filter.as_deref());

    let projects = match state.db.list_projects().await {
        Ok(projects) => filter.apply(&projects),
        Err(e) => return e.into(),
    };

    let total = projects.len();
    let filter_name = match &filter {
        ProjectFilter::All => "all".to_string(),
        ProjectFilter::Technology(tech) => tech.clone(),
    };

    ApiResponse::success_with_meta(
        ListProjectsResponse {
            filter: filter_name,
            projects: projects.into_iter().map(ProjectResponse::from).collect(),
        },
        ResponseMeta::total(total),
    )
}

/// `GET /api/v1/projects:watch`
///
/// Server-sent events. Each `projects` event carries the full project list as
/// a JSON array; a new event follows every project write. A failed query
/// sends one `error` event and closes the stream.
#[utoipa::path(
    get,
    path = "/api/v1/projects:watch",
    tag = "projects",
    operation_id = "projects.watch",
    responses(
        (status = 200, description = "Event stream of project snapshots", body = String, content_type = "text/event-stream"),
    )
)]
pub async fn watch_projects_feed(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = watch_projects(state.db.clone()).map(|snapshot| {
        let event = match snapshot {
            Ok(projects) => {
                let projects: Vec<ProjectResponse> =
                    projects.into_iter().map(ProjectResponse::from).collect();
                Event::default()
                    .event("projects")
                    .json_data(projects)
                    .unwrap_or_else(|e| Event::default().event("error").data(e.to_string()))
            }
            Err(e) => {
                tracing::error!(error = %e, "Project feed failed");
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
