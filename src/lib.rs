// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Job Portal - Job Board Backend Service
//!
//! REST backend for a job-posting platform: public job listings, job
//! applications, and cookie-based sessions signed with a server-side
//! secret.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Cookie session authentication (signed tokens, ownership)
//! - `storage` - File-per-document JSON store and repositories
//! - `models` - Wire and entity types

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
