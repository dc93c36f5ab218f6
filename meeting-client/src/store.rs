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

//! Collaborator traits for the join/create workflow.
//!
//! The form only needs a handful of remote operations. Expressing them as
//! traits lets the UI drive either the REST client or an in-memory double.
//! Futures are not required to be `Send`: everything runs on the browser's
//! single event loop.

use scriptide_types::{
    requests::{AddAttendeeRequest, AddMeetingRequest, CreateSessionRequest},
    responses::{AttendeeRecord, CreateSessionResponse, JoinSessionResponse, MeetingRecord},
};

use crate::{ApiError, MeetingApiClient};

/// Remote data store holding meeting and attendee records.
#[allow(async_fn_in_trait)]
pub trait MeetingStore {
    /// `Ok(None)` when no meeting has that title.
    async fn get_meeting(&self, title: &str) -> Result<Option<MeetingRecord>, ApiError>;
    async fn add_meeting(&self, title: &str, meeting_id: &str, data: &str)
        -> Result<(), ApiError>;
    async fn get_attendee(&self, attendee_id: &str) -> Result<AttendeeRecord, ApiError>;
    async fn add_attendee(&self, attendee_id: &str, name: &str) -> Result<(), ApiError>;
}

/// Service that creates and joins communication sessions.
#[allow(async_fn_in_trait)]
pub trait SessionService {
    async fn create_meeting(
        &self,
        title: &str,
        name: &str,
        region: &str,
    ) -> Result<CreateSessionResponse, ApiError>;
    async fn join_meeting(&self, meeting_id: &str, name: &str)
        -> Result<JoinSessionResponse, ApiError>;
}

impl MeetingStore for MeetingApiClient {
    async fn get_meeting(&self, title: &str) -> Result<Option<MeetingRecord>, ApiError> {
        self.fetch_meeting(title).await
    }

    async fn add_meeting(
        &self,
        title: &str,
        meeting_id: &str,
        data: &str,
    ) -> Result<(), ApiError> {
        self.store_meeting(&AddMeetingRequest {
            title: title.to_string(),
            meeting_id: meeting_id.to_string(),
            data: data.to_string(),
        })
        .await
    }

    async fn get_attendee(&self, attendee_id: &str) -> Result<AttendeeRecord, ApiError> {
        self.fetch_attendee(attendee_id).await
    }

    async fn add_attendee(&self, attendee_id: &str, name: &str) -> Result<(), ApiError> {
        self.store_attendee(&AddAttendeeRequest {
            attendee_id: attendee_id.to_string(),
            name: name.to_string(),
        })
        .await
    }
}

impl SessionService for MeetingApiClient {
    async fn create_meeting(
        &self,
        title: &str,
        name: &str,
        region: &str,
    ) -> Result<CreateSessionResponse, ApiError> {
        self.create_session(&CreateSessionRequest {
            title: title.to_string(),
            name: name.to_string(),
            region: region.to_string(),
        })
        .await
    }

    async fn join_meeting(
        &self,
        meeting_id: &str,
        name: &str,
    ) -> Result<JoinSessionResponse, ApiError> {
        self.join_session(meeting_id, name).await
    }
}
