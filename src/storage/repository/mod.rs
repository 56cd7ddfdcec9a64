// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Typed repositories over the document store, one per collection.

pub mod applications;
pub mod jobs;

pub use applications::ApplicationRepository;
pub use jobs::JobRepository;
