//! Portfolio record and export handlers.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::api::v1::dto::PortfolioResponse;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::export::{self, ExportFormat};

/// `GET /api/v1/portfolio`
#[utoipa::path(
    get,
    path = "/api/v1/portfolio",
    tag = "portfolio",
    operation_id = "portfolio.get",
    responses(
        (status = 200, description = "The portfolio record", body = PortfolioResponse),
    )
)]
pub async fn get_portfolio(State(state): State<AppState>) -> ApiResponse<PortfolioResponse> {
    ApiResponse::success(PortfolioResponse::from(state.portfolio.as_ref()))
}

/// `GET /api/v1/portfolio/export/{format}`
///
/// Returns the raw document as an attachment named `portfolio-<slug>.<ext>`.
/// Only errors use the JSON envelope.
#[utoipa::path(
    get,
    path = "/api/v1/portfolio/export/{format}",
    tag = "portfolio",
    operation_id = "portfolio.export",
    params(("format" = String, Path, description = "markdown, json, html or print")),
    responses(
        (status = 200, description = "Rendered document"),
        (status = 400, description = "Unknown format", body = ApiError),
    )
)]
pub async fn export_portfolio(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Response {
    let format: ExportFormat = match format.parse() {
        Ok(format) => format,
        Err(message) => {
            return ApiResponse::<()>::error(ErrorCode::InvalidRequest, message).into_response()
        }
    };

    let body = match export::render(format, &state.portfolio) {
        Ok(body) => body,
        Err(e) => return ApiResponse::<()>::from(e).into_response(),
    };

    tracing::info!(format = format.extension(), "Portfolio exported");

    let disposition = format!(
        "attachment; filename=\"{}\"",
        format.file_name(&state.portfolio)
    );
    (
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}
