// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Job application repository over the document store.
//!
//! Each application is stored as a separate JSON file under the
//! `job-applications` collection directory. Only the `status` field is
//! mutable after creation.

use std::path::PathBuf;

use crate::models::{DocumentId, JobApplication};

use super::super::{paths, DocumentStorage, StorageError, StorageResult};

/// Repository for job application operations.
pub struct ApplicationRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> ApplicationRepository<'a> {
    /// Create a new ApplicationRepository.
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// Resolve the document path, rejecting identifiers with path syntax.
    fn document_path(&self, application_id: &DocumentId) -> StorageResult<PathBuf> {
        if !paths::is_valid_id(application_id.as_str()) {
            return Err(StorageError::NotFound(format!(
                "Application {application_id}"
            )));
        }
        Ok(self.storage.paths().application(application_id.as_str()))
    }

    /// Check if an application exists.
    pub fn exists(&self, application_id: &DocumentId) -> bool {
        self.document_path(application_id)
            .map(|path| self.storage.exists(path))
            .unwrap_or(false)
    }

    /// Get an application by ID.
    pub fn get(&self, application_id: &DocumentId) -> StorageResult<JobApplication> {
        let path = self.document_path(application_id)?;
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!(
                "Application {application_id}"
            )));
        }
        self.storage.read_json(path)
    }

    /// Store a new application.
    pub fn create(&self, application: &JobApplication) -> StorageResult<()> {
        let path = self.document_path(&application.id)?;
        if self.storage.exists(&path) {
            return Err(StorageError::AlreadyExists(format!(
                "Application {}",
                application.id
            )));
        }
        self.storage.write_json(path, application)
    }

    /// Patch the `status` field of an application, returning the updated record.
    pub fn update_status(
        &self,
        application_id: &DocumentId,
        status: String,
    ) -> StorageResult<JobApplication> {
        let mut application = self.get(application_id)?;
        application.status = status;
        self.storage
            .write_json(self.document_path(application_id)?, &application)?;
        Ok(application)
    }

    /// Delete an application by ID.
    pub fn delete(&self, application_id: &DocumentId) -> StorageResult<()> {
        let path = self.document_path(application_id)?;
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!(
                "Application {application_id}"
            )));
        }
        self.storage.delete(path)
    }

    /// List every stored application.
    fn list(&self) -> StorageResult<Vec<JobApplication>> {
        let ids = self
            .storage
            .list_files(self.storage.paths().applications_dir(), "json")?;

        let mut applications = Vec::new();
        for id in ids {
            match self
                .storage
                .read_json::<JobApplication>(self.storage.paths().application(&id))
            {
                Ok(application) => applications.push(application),
                Err(e) => tracing::warn!("Failed to read application {}: {}", id, e),
            }
        }
        Ok(applications)
    }

    /// List all applications submitted by the given email.
    pub fn list_by_applicant(&self, application_email: &str) -> StorageResult<Vec<JobApplication>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|application| application.application_email == application_email)
            .collect())
    }

    /// List all applications for the given job.
    pub fn list_by_job(&self, job_id: &DocumentId) -> StorageResult<Vec<JobApplication>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|application| &application.job_id == job_id)
            .collect())
    }
}
