// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Job application endpoints.
//!
//! The "my applications" list is the only protected route in the service:
//! the caller must hold a valid session cookie and the `email` query must
//! match the verified identity. Its items are enriched at read time with
//! fields copied from the referenced job; a dangling `job_id` yields the
//! bare application with the job fields omitted.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::auth::{require_owner, Auth};
use crate::error::ApiError;
use crate::models::{
    CreateApplicationRequest, DocumentId, EnrichedApplication, JobApplication,
    UpdateApplicationStatusRequest,
};
use crate::state::AppState;
use crate::storage::{ApplicationRepository, JobRepository};

/// Owner email the caller claims to be listing for.
#[derive(Debug, Deserialize, IntoParams)]
pub struct OwnerQuery {
    /// Applicant email; must match the authenticated identity.
    pub email: String,
}

/// List the authenticated caller's applications, enriched with job fields.
#[utoipa::path(
    get,
    path = "/job-applications",
    tag = "applications",
    params(OwnerQuery),
    responses(
        (status = 200, description = "The caller's applications", body = Vec<EnrichedApplication>),
        (status = 401, description = "Missing or invalid session cookie"),
        (status = 403, description = "Query email does not match the session identity")
    )
)]
pub async fn list_my_applications(
    State(state): State<AppState>,
    Auth(identity): Auth,
    Query(params): Query<OwnerQuery>,
) -> Result<Json<Vec<EnrichedApplication>>, ApiError> {
    require_owner(&identity, &params.email)?;

    let applications = ApplicationRepository::new(&state.storage).list_by_applicant(&params.email)?;

    let jobs = JobRepository::new(&state.storage);
    let mut enriched = Vec::with_capacity(applications.len());
    for application in applications {
        let job = match jobs.find(&application.job_id) {
            Ok(job) => job,
            Err(e) => {
                tracing::warn!(
                    job_id = %application.job_id,
                    error = %e,
                    "skipping enrichment for unreadable job"
                );
                None
            }
        };
        enriched.push(EnrichedApplication::new(application, job));
    }

    Ok(Json(enriched))
}

/// List every application submitted for a job.
#[utoipa::path(
    get,
    path = "/job-applications/jobs/{job_id}",
    tag = "applications",
    params(("job_id" = String, Path, description = "Job identifier")),
    responses(
        (status = 200, description = "Applications for the job", body = Vec<JobApplication>)
    )
)]
pub async fn list_for_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<JobApplication>>, ApiError> {
    let applications =
        ApplicationRepository::new(&state.storage).list_by_job(&DocumentId::from(job_id))?;
    Ok(Json(applications))
}

/// Submit a job application.
#[utoipa::path(
    post,
    path = "/job-applications",
    tag = "applications",
    request_body = CreateApplicationRequest,
    responses(
        (status = 201, description = "Application created", body = JobApplication)
    )
)]
pub async fn create_application(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<JobApplication>), ApiError> {
    let application = JobApplication::from_request(request);
    ApplicationRepository::new(&state.storage).create(&application)?;

    tracing::info!(
        application_id = %application.id,
        job_id = %application.job_id,
        "application created"
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// Update an application's review status.
#[utoipa::path(
    patch,
    path = "/job-applications/{id}",
    tag = "applications",
    params(("id" = String, Path, description = "Application identifier")),
    request_body = UpdateApplicationStatusRequest,
    responses(
        (status = 200, description = "Updated application", body = JobApplication),
        (status = 404, description = "No such application")
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<JobApplication>, ApiError> {
    let updated = ApplicationRepository::new(&state.storage)
        .update_status(&DocumentId::from(id), request.status)?;
    Ok(Json(updated))
}

/// Delete an application.
#[utoipa::path(
    delete,
    path = "/job-applications/{id}",
    tag = "applications",
    params(("id" = String, Path, description = "Application identifier")),
    responses(
        (status = 204, description = "Application deleted"),
        (status = 404, description = "No such application")
    )
)]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ApplicationRepository::new(&state.storage).delete(&DocumentId::from(id))?;
    Ok(StatusCode::NO_CONTENT)
}
