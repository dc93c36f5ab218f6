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

//! Response types for the meeting store and the session service.
//!
//! Every endpoint returns an [`APIResponse<T>`] envelope:
//! - On success: `{ "success": true,  "result": <T> }`
//! - On failure: `{ "success": false, "result": <APIError> }`

use serde::{Deserialize, Serialize};

use crate::session::{AttendeeInfo, SessionDescriptor};

// ---------------------------------------------------------------------------
// Generic envelope
// ---------------------------------------------------------------------------

/// Top-level API response envelope.
///
/// # Success example
///
/// ```json
/// { "success": true, "result": { "title": "weekly sync", ... } }
/// ```
///
/// # Error example
///
/// ```json
/// { "success": false, "result": { "code": "MEETING_NOT_FOUND", "message": "..." } }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIResponse<A: Serialize> {
    pub success: bool,
    pub result: A,
}

// ---------------------------------------------------------------------------
// Data store records
// ---------------------------------------------------------------------------

/// A stored meeting, returned by `GET /api/v1/meetings/{title}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MeetingRecord {
    pub title: String,
    pub meeting_id: String,
    /// Session descriptor as JSON text, exactly as it was written.
    pub data: String,
}

impl MeetingRecord {
    /// Decode the stored session descriptor.
    pub fn descriptor(&self) -> Result<SessionDescriptor, serde_json::Error> {
        serde_json::from_str(&self.data)
    }
}

/// A stored attendee, returned by `GET /api/v1/attendees/{attendee_id}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AttendeeRecord {
    pub attendee_id: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Session service payloads
// ---------------------------------------------------------------------------

/// Response payload for `POST /api/v1/sessions`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSessionResponse {
    pub meeting: SessionDescriptor,
    pub attendee: AttendeeInfo,
}

/// Response payload for `POST /api/v1/sessions/{meeting_id}/join`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct JoinSessionResponse {
    pub attendee: AttendeeInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_record_decodes_stored_descriptor() {
        let record = MeetingRecord {
            title: "weekly sync".to_string(),
            meeting_id: "m-1".to_string(),
            data: r#"{"MeetingId":"m-1","MediaRegion":"us-east-1"}"#.to_string(),
        };
        let descriptor = record.descriptor().unwrap();
        assert_eq!(descriptor.meeting_id(), "m-1");
        assert_eq!(descriptor.media_region(), Some("us-east-1"));
    }

    #[test]
    fn meeting_record_rejects_garbage_descriptor() {
        let record = MeetingRecord {
            title: "standup".to_string(),
            meeting_id: "m-2".to_string(),
            data: "not json".to_string(),
        };
        assert!(record.descriptor().is_err());
    }

    #[test]
    fn create_session_response_uses_pascal_case() {
        let json = r#"{
            "success": true,
            "result": {
                "Meeting": { "MeetingId": "m-3", "ExternalMeetingId": "weekly sync" },
                "Attendee": { "AttendeeId": "a-1", "ExternalUserId": "Grace", "JoinToken": "t" }
            }
        }"#;
        let parsed: APIResponse<CreateSessionResponse> = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.result.meeting.meeting_id(), "m-3");
        assert_eq!(parsed.result.attendee.attendee_id, "a-1");
        assert_eq!(parsed.result.attendee.join_token, "t");
    }

    #[test]
    fn error_envelope_decodes_and_displays() {
        let json = r#"{"success":false,"result":{"code":"ATTENDEE_NOT_FOUND","message":"Attendee 'a-9' not found"}}"#;
        let parsed: APIResponse<crate::APIError> = serde_json::from_str(json).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.result.engineering_error, None);
        assert_eq!(
            parsed.result.to_string(),
            "[ATTENDEE_NOT_FOUND] Attendee 'a-9' not found"
        );
    }
}
