// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! # API Data Models
//!
//! Request, response and entity records used by the REST API. All types
//! derive `Serialize`, `Deserialize`, and `ToSchema` for automatic JSON
//! handling and OpenAPI documentation.
//!
//! ## Wire Format
//!
//! Field names on the wire match the original frontend contract: camelCase
//! `jobType`, snake_case `application_email`, `company_logo` and `job_id`.
//!
//! ## Model Categories
//!
//! - **Jobs**: listings owned by the poster's email
//! - **Job Applications**: one applicant email applying to one job
//! - **Sessions**: login payload and session response

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// =============================================================================
// Document Identifier Type
// =============================================================================

/// Opaque unique identifier for stored documents.
///
/// Serializes as a plain string. Generated server-side as a UUID v4; the
/// storage layer and the API treat it as an opaque token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(pub String);

impl DocumentId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        DocumentId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        DocumentId(value)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        DocumentId(value.to_string())
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

// =============================================================================
// Job Models
// =============================================================================

/// A job listing.
///
/// Owned by the poster (`poster_email`). Readable by anyone.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Job {
    /// Unique identifier for this job.
    pub id: DocumentId,
    /// Email of the poster who owns this listing.
    pub poster_email: String,
    /// Job title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Company logo URL, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    /// Employment type (e.g., "Full-time", "Remote").
    #[serde(rename = "jobType")]
    pub job_type: String,
    /// Job location.
    pub location: String,
    /// Job category.
    pub category: String,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
}

/// Request to create a new job listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateJobRequest {
    /// Email of the poster creating the listing.
    pub poster_email: String,
    /// Job title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Company logo URL, if provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    /// Employment type.
    #[serde(rename = "jobType")]
    pub job_type: String,
    /// Job location.
    pub location: String,
    /// Job category.
    pub category: String,
}

impl Job {
    /// Build a new listing from a creation request.
    pub fn from_request(request: CreateJobRequest) -> Self {
        Job {
            id: DocumentId::generate(),
            poster_email: request.poster_email,
            title: request.title,
            company: request.company,
            company_logo: request.company_logo,
            job_type: request.job_type,
            location: request.location,
            category: request.category,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Job Application Models
// =============================================================================

/// Default status assigned to a freshly submitted application.
pub const DEFAULT_APPLICATION_STATUS: &str = "pending";

/// A job application linking an applicant email to a job.
///
/// Owned by the applicant (`application_email`). `job_id` is a loose
/// reference: no referential integrity is enforced, and a dangling reference
/// simply yields no enrichment on reads.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct JobApplication {
    /// Unique identifier for this application.
    pub id: DocumentId,
    /// The job this application refers to.
    pub job_id: DocumentId,
    /// Email of the applicant who owns this application.
    pub application_email: String,
    /// Mutable review status (e.g., "pending", "accepted", "rejected").
    pub status: String,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
}

/// Request to submit a job application.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateApplicationRequest {
    /// The job being applied to.
    pub job_id: DocumentId,
    /// Email of the applicant.
    pub application_email: String,
    /// Initial status; defaults to "pending" when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl JobApplication {
    /// Build a new application from a submission request.
    pub fn from_request(request: CreateApplicationRequest) -> Self {
        JobApplication {
            id: DocumentId::generate(),
            job_id: request.job_id,
            application_email: request.application_email,
            status: request
                .status
                .unwrap_or_else(|| DEFAULT_APPLICATION_STATUS.to_string()),
            created_at: Utc::now(),
        }
    }
}

/// Request to update an application's status. No other field is mutable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateApplicationStatusRequest {
    /// New review status.
    pub status: String,
}

/// A job application enriched with denormalized fields from its job.
///
/// The job fields are copied at read time, never persisted. When the
/// referenced job is missing the optional fields are omitted from the JSON
/// body entirely.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct EnrichedApplication {
    /// Unique identifier for this application.
    pub id: DocumentId,
    /// The job this application refers to.
    pub job_id: DocumentId,
    /// Email of the applicant.
    pub application_email: String,
    /// Review status.
    pub status: String,
    /// When the application was submitted.
    pub created_at: DateTime<Utc>,
    /// Job title, copied from the referenced job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Company name, copied from the referenced job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Company logo URL, copied from the referenced job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    /// Employment type, copied from the referenced job.
    #[serde(default, rename = "jobType", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// Location, copied from the referenced job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Category, copied from the referenced job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EnrichedApplication {
    /// Join an application with its referenced job, if found.
    pub fn new(application: JobApplication, job: Option<Job>) -> Self {
        let mut enriched = EnrichedApplication {
            id: application.id,
            job_id: application.job_id,
            application_email: application.application_email,
            status: application.status,
            created_at: application.created_at,
            title: None,
            company: None,
            company_logo: None,
            job_type: None,
            location: None,
            category: None,
        };

        if let Some(job) = job {
            enriched.title = Some(job.title);
            enriched.company = Some(job.company);
            enriched.company_logo = job.company_logo;
            enriched.job_type = Some(job.job_type);
            enriched.location = Some(job.location);
            enriched.category = Some(job.category);
        }

        enriched
    }
}

// =============================================================================
// Session Models
// =============================================================================

/// Identity payload supplied on login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email identifying the caller.
    pub email: String,
}

/// Response body for session endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_from_and_into_string() {
        let from_str: DocumentId = "abc".into();
        assert_eq!(from_str.0, "abc");

        let from_string: DocumentId = String::from("def").into();
        assert_eq!(from_string.0, "def");

        let to_string: String = DocumentId("ghi".into()).into();
        assert_eq!(to_string, "ghi");
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(DocumentId::generate(), DocumentId::generate());
    }

    #[test]
    fn job_serializes_with_camel_case_job_type() {
        let job = Job::from_request(CreateJobRequest {
            poster_email: "hr@acme.com".into(),
            title: "Engineer".into(),
            company: "Acme".into(),
            company_logo: None,
            job_type: "Full-time".into(),
            location: "Remote".into(),
            category: "Engineering".into(),
        });

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["jobType"], "Full-time");
        assert!(json.get("job_type").is_none());
        // Absent logo is omitted, not null.
        assert!(json.get("company_logo").is_none());
    }

    #[test]
    fn application_defaults_to_pending_status() {
        let application = JobApplication::from_request(CreateApplicationRequest {
            job_id: DocumentId::generate(),
            application_email: "a@x.com".into(),
            status: None,
        });
        assert_eq!(application.status, DEFAULT_APPLICATION_STATUS);
    }

    #[test]
    fn enrichment_copies_job_fields() {
        let job = Job::from_request(CreateJobRequest {
            poster_email: "hr@acme.com".into(),
            title: "Eng".into(),
            company: "Acme".into(),
            company_logo: Some("https://acme.example/logo.png".into()),
            job_type: "Remote".into(),
            location: "Berlin".into(),
            category: "Engineering".into(),
        });
        let application = JobApplication::from_request(CreateApplicationRequest {
            job_id: job.id.clone(),
            application_email: "a@x.com".into(),
            status: None,
        });

        let enriched = EnrichedApplication::new(application.clone(), Some(job));
        assert_eq!(enriched.title.as_deref(), Some("Eng"));
        assert_eq!(enriched.company.as_deref(), Some("Acme"));
        assert_eq!(enriched.location.as_deref(), Some("Berlin"));
        assert_eq!(enriched.status, application.status);
    }

    #[test]
    fn enrichment_with_missing_job_omits_job_fields() {
        let application = JobApplication::from_request(CreateApplicationRequest {
            job_id: DocumentId::generate(),
            application_email: "a@x.com".into(),
            status: None,
        });

        let enriched = EnrichedApplication::new(application, None);
        let json = serde_json::to_value(&enriched).unwrap();
        assert!(json.get("title").is_none());
        assert!(json.get("company").is_none());
        assert!(json.get("jobType").is_none());
        assert_eq!(json["status"], DEFAULT_APPLICATION_STATUS);
    }
}
