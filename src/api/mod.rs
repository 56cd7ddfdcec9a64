// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! HTTP API surface.
//!
//! Route map:
//!
//! ```text
//! GET    /                                liveness
//! POST   /jwt                             issue session cookie
//! POST   /logout                          clear session cookie
//! GET    /jobs?email=                     list jobs, optional poster filter
//! POST   /jobs                            create job
//! GET    /jobs/{id}                       fetch job (null when missing)
//! DELETE /jobs/{id}                       delete job
//! GET    /job-applications?email=         my applications (auth + ownership)
//! POST   /job-applications                submit application
//! GET    /job-applications/jobs/{job_id}  applications for a job
//! PATCH  /job-applications/{id}           update status
//! DELETE /job-applications/{id}           delete application
//! ```
//!
//! Only `GET /job-applications` sits behind the auth middleware; the rest of
//! the surface is open. Swagger UI is served at `/docs`.

pub mod applications;
pub mod health;
pub mod jobs;
pub mod session;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::require_auth;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job Portal API",
        description = "Job listings, applications and cookie-based sessions"
    ),
    paths(
        health::liveness,
        session::issue_token,
        session::logout,
        jobs::list_jobs,
        jobs::get_job,
        jobs::create_job,
        jobs::delete_job,
        applications::list_my_applications,
        applications::list_for_job,
        applications::create_application,
        applications::update_status,
        applications::delete_application,
    ),
    components(schemas(
        crate::models::DocumentId,
        crate::models::Job,
        crate::models::CreateJobRequest,
        crate::models::JobApplication,
        crate::models::CreateApplicationRequest,
        crate::models::UpdateApplicationStatusRequest,
        crate::models::EnrichedApplication,
        crate::models::LoginRequest,
        crate::models::SessionResponse,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "session", description = "Cookie session management"),
        (name = "jobs", description = "Job listings"),
        (name = "applications", description = "Job applications")
    )
)]
struct ApiDoc;

/// Build the application router.
///
/// `client_origin` switches CORS between a permissive same-origin setup and
/// an exact-origin, credentialed one for a browser frontend on another
/// origin.
pub fn router(state: AppState, client_origin: Option<String>) -> Router {
    let protected = Router::new()
        .route("/job-applications", get(applications::list_my_applications))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let open = Router::new()
        .route("/", get(health::liveness))
        .route("/jwt", post(session::issue_token))
        .route("/logout", post(session::logout))
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/jobs/{id}", get(jobs::get_job).delete(jobs::delete_job))
        .route("/job-applications", post(applications::create_application))
        .route(
            "/job-applications/jobs/{job_id}",
            get(applications::list_for_job),
        )
        .route(
            "/job-applications/{id}",
            patch(applications::update_status).delete(applications::delete_application),
        );

    Router::new()
        .merge(protected)
        .merge(open)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(client_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the configured client origin.
///
/// With an origin set, the browser must be allowed to send the session
/// cookie, which rules out wildcards: exact origin, explicit methods and
/// headers, credentials on. Without one the API is same-origin and a
/// permissive layer costs nothing.
fn cors_layer(client_origin: Option<String>) -> CorsLayer {
    match client_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .expect("CLIENT_ORIGIN must be a valid header value");
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
        }
        None => CorsLayer::permissive(),
    }
}
