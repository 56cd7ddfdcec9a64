// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Job Portal Contributors

//! Liveness endpoint.

/// Plain-text liveness probe at the root path.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Server is running", body = String)
    )
)]
pub async fn liveness() -> &'static str {
    "Job portal server is running"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn liveness_reports_running() {
        assert_eq!(liveness().await, "Job portal server is running");
    }
}
