/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Session service endpoints: create a session, join an existing one.

use scriptide_types::{
    requests::{CreateSessionRequest, JoinSessionRequest},
    responses::{CreateSessionResponse, JoinSessionResponse},
};

use crate::error::ApiError;
use crate::{parse_api_response, MeetingApiClient};

pub(crate) fn join_path(meeting_id: &str) -> String {
    format!("/api/v1/sessions/{}/join", urlencoding::encode(meeting_id))
}

impl MeetingApiClient {
    /// Create a new communication session. The caller becomes its first
    /// attendee.
    ///
    /// Calls `POST /api/v1/sessions`.
    pub async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CreateSessionResponse, ApiError> {
        let response = self.post("/api/v1/sessions").json(request).send().await?;
        parse_api_response(response).await
    }

    /// Add an attendee to an existing session.
    ///
    /// Calls `POST /api/v1/sessions/{meeting_id}/join`.
    pub async fn join_session(
        &self,
        meeting_id: &str,
        name: &str,
    ) -> Result<JoinSessionResponse, ApiError> {
        let path = join_path(meeting_id);
        let body = JoinSessionRequest {
            name: name.to_string(),
        };
        let response = self.post(&path).json(&body).send().await?;
        parse_api_response(response).await
    }
}
