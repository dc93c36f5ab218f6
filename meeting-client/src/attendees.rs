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

//! Attendee record endpoints.

use scriptide_types::{requests::AddAttendeeRequest, responses::AttendeeRecord};

use crate::error::ApiError;
use crate::{parse_api_response, parse_status_only, MeetingApiClient};

pub(crate) fn attendee_path(attendee_id: &str) -> String {
    format!("/api/v1/attendees/{}", urlencoding::encode(attendee_id))
}

impl MeetingApiClient {
    /// Fetch an attendee record by the id the session service issued.
    ///
    /// Calls `GET /api/v1/attendees/{attendee_id}`.
    pub async fn fetch_attendee(&self, attendee_id: &str) -> Result<AttendeeRecord, ApiError> {
        let response = self.get(&attendee_path(attendee_id)).send().await?;
        parse_api_response(response).await
    }

    /// Store a new attendee record.
    ///
    /// Calls `POST /api/v1/attendees`.
    pub async fn store_attendee(&self, request: &AddAttendeeRequest) -> Result<(), ApiError> {
        let response = self.post("/api/v1/attendees").json(request).send().await?;
        parse_status_only(response).await
    }
}
