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

//! Meeting record endpoints: lookup by title, create.

use scriptide_types::{requests::AddMeetingRequest, responses::MeetingRecord};

use crate::error::ApiError;
use crate::{parse_api_response, parse_status_only, MeetingApiClient};

pub(crate) fn meeting_path(title: &str) -> String {
    format!("/api/v1/meetings/{}", urlencoding::encode(title))
}

impl MeetingApiClient {
    /// Look up a meeting record by its normalized title.
    ///
    /// Calls `GET /api/v1/meetings/{title}`. A 404 is not an error here: it
    /// means no meeting with that title exists yet and yields `Ok(None)`.
    pub async fn fetch_meeting(&self, title: &str) -> Result<Option<MeetingRecord>, ApiError> {
        let response = self.get(&meeting_path(title)).send().await?;
        match parse_api_response(response).await {
            Ok(record) => Ok(Some(record)),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Store a new meeting record.
    ///
    /// Calls `POST /api/v1/meetings`.
    pub async fn store_meeting(&self, request: &AddMeetingRequest) -> Result<(), ApiError> {
        let response = self.post("/api/v1/meetings").json(request).send().await?;
        parse_status_only(response).await
    }
}
