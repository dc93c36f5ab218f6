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

//! Request bodies for the meeting store and the session service.
//!
//! Used by clients for serialization and by servers for deserialization.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/meetings`.
///
/// `data` is the session descriptor serialized as JSON text. The store keeps
/// it verbatim; it is never re-encoded on the way back out.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AddMeetingRequest {
    /// Normalized (trimmed, lowercased) meeting title. Primary lookup key.
    pub title: String,
    pub meeting_id: String,
    pub data: String,
}

/// Request body for `POST /api/v1/attendees`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AddAttendeeRequest {
    pub attendee_id: String,
    pub name: String,
}

/// Request body for `POST /api/v1/sessions`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateSessionRequest {
    pub title: String,
    pub name: String,
    /// Media region the session is placed in, e.g. `"us-east-1"`.
    pub region: String,
}

/// Request body for `POST /api/v1/sessions/{meeting_id}/join`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JoinSessionRequest {
    pub name: String,
}
