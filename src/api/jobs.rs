// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Job listing endpoints.
//!
//! Listings are public to read. Creation records the poster's email as the
//! owner; the owner filter on the list endpoint is how "my jobs" views are
//! served.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::{CreateJobRequest, DocumentId, Job};
use crate::state::AppState;
use crate::storage::JobRepository;

/// Optional poster filter for the job list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct JobListQuery {
    /// When set, only jobs posted by this email are returned.
    pub email: Option<String>,
}

/// List all jobs, optionally filtered by poster email.
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "jobs",
    params(JobListQuery),
    responses(
        (status = 200, description = "Job listings", body = Vec<Job>)
    )
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListQuery>,
) -> Result<Json<Vec<Job>>, ApiError> {
    let repo = JobRepository::new(&state.storage);
    let jobs = match params.email {
        Some(email) => repo.list_by_poster(&email)?,
        None => repo.list()?,
    };
    Ok(Json(jobs))
}

/// Fetch a single job. A missing job yields `null`, not 404.
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = String, Path, description = "Job identifier")),
    responses(
        (status = 200, description = "The job, or a null body when absent", body = Job)
    )
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Job>>, ApiError> {
    let repo = JobRepository::new(&state.storage);
    let job = repo.find(&DocumentId::from(id))?;
    Ok(Json(job))
}

/// Create a job listing.
#[utoipa::path(
    post,
    path = "/jobs",
    tag = "jobs",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created", body = Job)
    )
)]
pub async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let job = Job::from_request(request);
    JobRepository::new(&state.storage).create(&job)?;

    tracing::info!(job_id = %job.id, poster = %job.poster_email, "job created");
    Ok((StatusCode::CREATED, Json(job)))
}

/// Delete a job listing.
#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = "jobs",
    params(("id" = String, Path, description = "Job identifier")),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 404, description = "No such job")
    )
)]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    JobRepository::new(&state.storage).delete(&DocumentId::from(id))?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(poster_email: &str, title: &str) -> CreateJobRequest {
        CreateJobRequest {
            poster_email: poster_email.into(),
            title: title.into(),
            company: "Acme".into(),
            company_logo: None,
            job_type: "Full-time".into(),
            location: "Remote".into(),
            category: "Engineering".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let (state, _temp_dir) = crate::state::test_support::test_state();

        let (status, Json(job)) = create_job(
            State(state.clone()),
            Json(sample_request("hr@acme.com", "Engineer")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(fetched) = get_job(State(state), Path(job.id.to_string()))
            .await
            .unwrap();
        assert_eq!(fetched, Some(job));
    }

    #[tokio::test]
    async fn get_missing_job_is_null() {
        let (state, _temp_dir) = crate::state::test_support::test_state();

        let Json(fetched) = get_job(State(state), Path("missing".into())).await.unwrap();
        assert_eq!(fetched, None);
    }

    #[tokio::test]
    async fn list_filters_by_poster_email() {
        let (state, _temp_dir) = crate::state::test_support::test_state();

        for (poster, title) in [
            ("hr@acme.com", "Engineer"),
            ("hr@acme.com", "Designer"),
            ("hr@other.com", "Analyst"),
        ] {
            let (status, _) = create_job(State(state.clone()), Json(sample_request(poster, title)))
                .await
                .unwrap();
            assert_eq!(status, StatusCode::CREATED);
        }

        let Json(all) = list_jobs(State(state.clone()), Query(JobListQuery { email: None }))
            .await
            .unwrap();
        assert_eq!(all.len(), 3);

        let Json(acme) = list_jobs(
            State(state),
            Query(JobListQuery {
                email: Some("hr@acme.com".into()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(acme.len(), 2);
    }

    #[tokio::test]
    async fn delete_missing_job_is_404() {
        let (state, _temp_dir) = crate::state::test_support::test_state();

        let (status, Json(job)) = create_job(
            State(state.clone()),
            Json(sample_request("hr@acme.com", "Engineer")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let status = delete_job(State(state.clone()), Path(job.id.to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = delete_job(State(state), Path(job.id.to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
