use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{JobId, JobPostingPatch, NewApplication, NewJobPosting};
use super::filter::JobFilter;
use super::service::{BoardError, JobBoardService};
use super::store::{ApplicationStore, JobStore, StoreError};

type SharedService<J, A> = State<Arc<JobBoardService<J, A>>>;

/// Router builder exposing the posting, application, and filter-option endpoints.
pub fn board_router<J, A>(service: Arc<JobBoardService<J, A>>) -> Router
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs",
            get(list_handler::<J, A>).post(create_handler::<J, A>),
        )
        .route(
            "/api/v1/jobs/:job_id",
            get(get_handler::<J, A>)
                .patch(update_handler::<J, A>)
                .delete(delete_handler::<J, A>),
        )
        .route(
            "/api/v1/jobs/:job_id/applications",
            get(applications_handler::<J, A>),
        )
        .route("/api/v1/applications", post(submit_handler::<J, A>))
        .route("/api/v1/filters", get(filters_handler::<J, A>))
        .with_state(service)
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn not_found(id: &JobId) -> Response {
    let payload = json!({
        "error": "job posting not found",
        "job_id": id.0,
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn error_response(error: BoardError) -> Response {
    match error {
        BoardError::Validation(errors) => {
            let payload = json!({
                "error": errors.to_string(),
                "fields": errors.fields,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        BoardError::UnknownJob(job_id) => {
            let payload = json!({
                "error": format!("job posting {job_id} does not exist"),
                "fields": [{ "field": "job_id", "message": "must reference an existing posting" }],
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        BoardError::Store(StoreError::Conflict(detail)) => {
            let payload = json!({ "error": format!("record already exists: {detail}") });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        BoardError::Store(other) => {
            error!(error = %other, "job board store fault");
            let payload = json!({ "error": other.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_handler<J, A>(
    State(service): SharedService<J, A>,
    filter: Result<Query<JobFilter>, QueryRejection>,
) -> Response
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    let Query(filter) = match filter {
        Ok(filter) => filter,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match service.list(&filter) {
        Ok(postings) => (StatusCode::OK, Json(postings)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_handler<J, A>(
    State(service): SharedService<J, A>,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    let id = JobId(job_id);
    match service.get(&id) {
        Ok(Some(posting)) => (StatusCode::OK, Json(posting)).into_response(),
        Ok(None) => not_found(&id),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_handler<J, A>(
    State(service): SharedService<J, A>,
    payload: Result<Json<NewJobPosting>, JsonRejection>,
) -> Response
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    let Json(posting) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match service.create(posting) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<J, A>(
    State(service): SharedService<J, A>,
    Path(job_id): Path<String>,
    payload: Result<Json<JobPostingPatch>, JsonRejection>,
) -> Response
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    let Json(patch) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let id = JobId(job_id);
    match service.update(&id, patch) {
        Ok(Some(updated)) => (StatusCode::OK, Json(updated)).into_response(),
        Ok(None) => not_found(&id),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<J, A>(
    State(service): SharedService<J, A>,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    let id = JobId(job_id);
    match service.delete(&id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => not_found(&id),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn applications_handler<J, A>(
    State(service): SharedService<J, A>,
    Path(job_id): Path<String>,
) -> Response
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    match service.list_applications(&JobId(job_id)) {
        Ok(applications) => (StatusCode::OK, Json(applications)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submit_handler<J, A>(
    State(service): SharedService<J, A>,
    payload: Result<Json<NewApplication>, JsonRejection>,
) -> Response
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    let Json(application) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match service.submit_application(application) {
        Ok(submitted) => (StatusCode::CREATED, Json(submitted)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn filters_handler<J, A>(State(service): SharedService<J, A>) -> Response
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    (StatusCode::OK, Json(service.filter_options())).into_response()
}
