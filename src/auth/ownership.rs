// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Ownership checks for per-user resources.
//!
//! Routes that expose owner-scoped data call [`require_owner`] explicitly,
//! naming the owner value they compare against; nothing is applied globally.
//! The check is parameterized by the owner value, so new resource types reuse
//! it without modification.

use super::claims::Identity;
use super::error::AuthError;

/// Allow iff the verified identity matches the declared owner value.
pub fn require_owner(identity: &Identity, owner_email: &str) -> Result<(), AuthError> {
    if identity.email == owner_email {
        Ok(())
    } else {
        Err(AuthError::NotResourceOwner)
    }
}
