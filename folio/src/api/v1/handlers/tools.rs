//! v1 handlers for the assistant tools: skill analyzer, resume builder,
//! project ideas and the content generator.

use axum::extract::{Path, State};

use crate::api::v1::dto::{
    ContentLibraryResponse, GenerateContentRequest, GeneratedContentResponse, ProjectIdeaResponse,
    ProjectIdeasRequest, ProjectIdeasResponse, ResumeRequest, ResumeResponse,
    SkillAnalysisRequest, SkillAnalysisResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::assistant::templates::{cover_letter, resume_section};
use crate::assistant::{analysis_title, analyze_skill, recommend_projects, tokenize};

/// `POST /api/v1/tools/skill-analysis`
#[utoipa::path(
    post,
    path = "/api/v1/tools/skill-analysis",
    tag = "tools",
    operation_id = "tools.analyzeSkill",
    request_body = SkillAnalysisRequest,
    responses(
        (status = 200, description = "Skill assessment", body = SkillAnalysisResponse),
        (status = 400, description = "Empty skill", body = ApiError),
    )
)]
pub async fn analyze_skill_handler(
    axum::Json(req): axum::Json<SkillAnalysisRequest>,
) -> ApiResponse<SkillAnalysisResponse> {
    let skill = req.skill.trim();
    if skill.is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Skill cannot be empty");
    }

    let analysis = analyze_skill(skill);
    ApiResponse::success(SkillAnalysisResponse {
        title: analysis_title(&analysis.skill),
        content: analysis.content,
        priority: analysis.priority.into(),
    })
}

/// `POST /api/v1/tools/resume`
///
/// Builds a resume section and a cover letter from the portfolio, optionally
/// tailored to a job description.
#[utoipa::path(
    post,
    path = "/api/v1/tools/resume",
    tag = "tools",
    operation_id = "tools.buildResume",
    request_body = ResumeRequest,
    responses(
        (status = 200, description = "Resume and cover letter", body = ResumeResponse),
        (status = 500, description = "The portfolio has too few projects", body = ApiError),
    )
)]
pub async fn build_resume(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<ResumeRequest>,
) -> ApiResponse<ResumeResponse> {
    let job_description = req.job_description.trim();

    match resume_section(&state.portfolio, job_description) {
        Ok(resume) => ApiResponse::success(ResumeResponse {
            resume,
            cover_letter: cover_letter(&state.portfolio, job_description),
        }),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/tools/project-ideas`
#[utoipa::path(
    post,
    path = "/api/v1/tools/project-ideas",
    tag = "tools",
    operation_id = "tools.suggestProjects",
    request_body = ProjectIdeasRequest,
    responses(
        (status = 200, description = "Up to three project ideas", body = ProjectIdeasResponse),
    )
)]
pub async fn suggest_projects(
    axum::Json(req): axum::Json<ProjectIdeasRequest>,
) -> ApiResponse<ProjectIdeasResponse> {
    let keywords = tokenize(&req.interests);
    let ideas = recommend_projects(&keywords);
    let total = ideas.len();

    ApiResponse::success_with_meta(
        ProjectIdeasResponse {
            keywords,
            ideas: ideas.into_iter().map(ProjectIdeaResponse::from).collect(),
        },
        ResponseMeta::total(total),
    )
}

/// `POST /api/v1/tools/content`
#[utoipa::path(
    post,
    path = "/api/v1/tools/content",
    tag = "tools",
    operation_id = "tools.generateContent",
    request_body = GenerateContentRequest,
    responses(
        (status = 201, description = "Content generated and stored", body = GeneratedContentResponse),
        (status = 400, description = "Empty input", body = ApiError),
    )
)]
pub async fn generate_content(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<GenerateContentRequest>,
) -> ApiResponse<GeneratedContentResponse> {
    match state
        .content
        .generate(req.content_type.into(), &req.input)
        .await
    {
        Ok(item) => ApiResponse::created(GeneratedContentResponse::from(item)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/tools/content`
#[utoipa::path(
    get,
    path = "/api/v1/tools/content",
    tag = "tools",
    operation_id = "tools.listContent",
    responses(
        (status = 200, description = "Content library, newest first", body = ContentLibraryResponse),
    )
)]
pub async fn list_content(State(state): State<AppState>) -> ApiResponse<ContentLibraryResponse> {
    let items = state.content.list().await;
    let total = items.len();

    ApiResponse::success_with_meta(
        ContentLibraryResponse {
            items: items
                .into_iter()
                .map(GeneratedContentResponse::from)
                .collect(),
        },
        ResponseMeta::total(total),
    )
}

/// `DELETE /api/v1/tools/content/{index}`
#[utoipa::path(
    delete,
    path = "/api/v1/tools/content/{index}",
    tag = "tools",
    operation_id = "tools.deleteContent",
    params(("index" = usize, Path, description = "Library position, 0 is newest")),
    responses(
        (status = 200, description = "Removed item", body = GeneratedContentResponse),
        (status = 404, description = "No item at that index", body = ApiError),
    )
)]
pub async fn delete_content(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> ApiResponse<GeneratedContentResponse> {
    match state.content.delete(index).await {
        Ok(item) => ApiResponse::success(GeneratedContentResponse::from(item)),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/tools/content`
#[utoipa::path(
    delete,
    path = "/api/v1/tools/content",
    tag = "tools",
    operation_id = "tools.clearContent",
    responses(
        (status = 200, description = "Library emptied", body = ContentLibraryResponse),
    )
)]
pub async fn clear_content(State(state): State<AppState>) -> ApiResponse<ContentLibraryResponse> {
    match state.content.clear().await {
        Ok(()) => ApiResponse::success(ContentLibraryResponse { items: Vec::new() }),
        Err(e) => e.into(),
    }
}
