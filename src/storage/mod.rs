// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! # Document Storage Module
//!
//! Persistent storage for the two collections the service owns:
//!
//! ```text
//! <DATA_DIR>/
//!   jobs/
//!     {job_id}.json
//!   job-applications/
//!     {application_id}.json
//! ```
//!
//! The store is a plain file-per-document JSON layout. One
//! [`DocumentStorage`] handle is created at startup and shared across all
//! requests; each repository call is an independent, atomic single-document
//! operation (writes are temp-file + rename).

pub mod document_fs;
pub mod paths;
pub mod repository;

pub use document_fs::{DocumentStorage, StorageError, StorageResult};
pub use paths::StoragePaths;
pub use repository::{ApplicationRepository, JobRepository};
