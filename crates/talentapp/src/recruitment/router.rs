use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{CandidateId, JobId, RecruitmentId};
use super::repository::{EntityStore, Page, RepositoryError, DEFAULT_PAGE_LIMIT};
use super::service::{RecruitmentService, RecruitmentServiceError};
use super::validation::{
    check, CandidateCreateRequest, CandidateScoreCreateRequest, JobCreateRequest,
    RecruitmentCreateRequest, RecruitmentUpdateStatusRequest, ValidationErrors,
};
use validator::Validate;

const MAX_PAGE_LIMIT: usize = 100;

type SharedService<S> = State<Arc<RecruitmentService<S>>>;

/// Router builder exposing the JSON API for jobs, candidates, recruitments and scores.
pub fn recruitment_router<S>(service: Arc<RecruitmentService<S>>) -> Router
where
    S: EntityStore + 'static,
{
    Router::new()
        .route("/job", get(list_jobs_handler::<S>).post(create_job_handler::<S>))
        .route("/job/:id", get(get_job_handler::<S>))
        .route(
            "/candidate",
            get(list_candidates_handler::<S>).post(create_candidate_handler::<S>),
        )
        .route("/candidate/:id", get(get_candidate_handler::<S>))
        .route(
            "/recruitment",
            get(list_recruitments_handler::<S>).post(create_recruitment_handler::<S>),
        )
        .route(
            "/recruitment/:id",
            get(get_recruitment_handler::<S>).put(toggle_status_handler::<S>),
        )
        .route(
            "/recruitment/:id/score",
            get(list_scores_handler::<S>).post(submit_score_handler::<S>),
        )
        .route(
            "/recruitment/:id/candidate/:candidate_id/score",
            get(get_score_handler::<S>),
        )
        .with_state(service)
}

/// Optional `limit`/`offset` query parameters for list routes.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl PageQuery {
    pub fn into_page(self) -> Result<Page, ApiError> {
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(ApiError::BadRequest(format!(
                "limit must be between 1 and {MAX_PAGE_LIMIT}"
            )));
        }
        Ok(Page::new(limit, self.offset.unwrap_or(0)))
    }
}

/// Failure modes of the HTTP layer, rendered as the `{message, error}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Service(#[from] RecruitmentServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, payload) = match &self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "bad request", "error": message }),
            ),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "message": "invalid request", "error": &errors.0 }),
            ),
            ApiError::Service(RecruitmentServiceError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                json!({ "message": "not found", "error": self.to_string() }),
            ),
            ApiError::Service(RecruitmentServiceError::InvalidDate(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "message": "invalid request", "error": self.to_string() }),
            ),
            ApiError::Service(RecruitmentServiceError::Store(RepositoryError::Conflict)) => (
                StatusCode::CONFLICT,
                json!({ "message": "conflict", "error": self.to_string() }),
            ),
            ApiError::Service(RecruitmentServiceError::Store(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "something bad happened", "error": self.to_string() }),
            ),
        };

        (status, Json(payload)).into_response()
    }
}

fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(json!({ "message": "success", "data": data }))).into_response()
}

fn respond<T: Serialize>(status: StatusCode, result: Result<T, ApiError>) -> Response {
    match result {
        Ok(data) => success(status, data),
        Err(error) => error.into_response(),
    }
}

fn validated<T: Validate>(payload: T) -> Result<T, ApiError> {
    check(&payload)?;
    Ok(payload)
}

pub(crate) async fn create_job_handler<S>(
    State(service): SharedService<S>,
    Json(payload): Json<JobCreateRequest>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = validated(payload)
        .and_then(|request| service.create_job(request.into()).map_err(ApiError::from));
    respond(StatusCode::CREATED, result)
}

pub(crate) async fn list_jobs_handler<S>(
    State(service): SharedService<S>,
    Query(query): Query<PageQuery>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = query
        .into_page()
        .and_then(|page| service.list_jobs(page).map_err(ApiError::from));
    respond(StatusCode::OK, result)
}

pub(crate) async fn get_job_handler<S>(
    State(service): SharedService<S>,
    Path(id): Path<String>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = service.get_job(&JobId(id)).map_err(ApiError::from);
    respond(StatusCode::OK, result)
}

pub(crate) async fn create_candidate_handler<S>(
    State(service): SharedService<S>,
    Json(payload): Json<CandidateCreateRequest>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = validated(payload).and_then(|request| {
        service
            .create_candidate(request.into())
            .map_err(ApiError::from)
    });
    respond(StatusCode::CREATED, result)
}

pub(crate) async fn list_candidates_handler<S>(
    State(service): SharedService<S>,
    Query(query): Query<PageQuery>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = query
        .into_page()
        .and_then(|page| service.list_candidates(page).map_err(ApiError::from));
    respond(StatusCode::OK, result)
}

pub(crate) async fn get_candidate_handler<S>(
    State(service): SharedService<S>,
    Path(id): Path<String>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = service.get_candidate(&CandidateId(id)).map_err(ApiError::from);
    respond(StatusCode::OK, result)
}

pub(crate) async fn create_recruitment_handler<S>(
    State(service): SharedService<S>,
    Json(payload): Json<RecruitmentCreateRequest>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = validated(payload).and_then(|request| {
        service
            .create_recruitment(request.job_id(), &request.deadline)
            .map_err(ApiError::from)
    });
    respond(StatusCode::CREATED, result)
}

pub(crate) async fn list_recruitments_handler<S>(
    State(service): SharedService<S>,
    Query(query): Query<PageQuery>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = query
        .into_page()
        .and_then(|page| service.list_recruitments(page).map_err(ApiError::from));
    respond(StatusCode::OK, result)
}

pub(crate) async fn get_recruitment_handler<S>(
    State(service): SharedService<S>,
    Path(id): Path<String>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = service
        .get_recruitment(&RecruitmentId(id))
        .map_err(ApiError::from);
    respond(StatusCode::OK, result)
}

pub(crate) async fn toggle_status_handler<S>(
    State(service): SharedService<S>,
    Path(id): Path<String>,
    Json(payload): Json<RecruitmentUpdateStatusRequest>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = validated(payload).and_then(|request| {
        service
            .toggle_recruitment_status(&RecruitmentId(id), &request.status)
            .map_err(ApiError::from)
    });
    respond(StatusCode::OK, result)
}

pub(crate) async fn submit_score_handler<S>(
    State(service): SharedService<S>,
    Path(id): Path<String>,
    Json(payload): Json<CandidateScoreCreateRequest>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = validated(payload).and_then(|request| {
        service
            .submit_candidate_score(RecruitmentId(id), request.into())
            .map_err(ApiError::from)
    });
    respond(StatusCode::CREATED, result)
}

pub(crate) async fn list_scores_handler<S>(
    State(service): SharedService<S>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = query.into_page().and_then(|page| {
        service
            .list_scores_for_recruitment(&RecruitmentId(id), page)
            .map_err(ApiError::from)
    });
    respond(StatusCode::OK, result)
}

pub(crate) async fn get_score_handler<S>(
    State(service): SharedService<S>,
    Path((id, candidate_id)): Path<(String, String)>,
) -> Response
where
    S: EntityStore + 'static,
{
    let result = service
        .get_candidate_score(&RecruitmentId(id), &CandidateId(candidate_id))
        .map_err(ApiError::from);
    respond(StatusCode::OK, result)
}
