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

//! Session descriptor and join configuration.
//!
//! The descriptor is produced by the session service when a meeting is
//! created and is treated as opaque by everything else: the document is
//! carried through untouched so that a descriptor read back from the store
//! serializes to the same document that was written.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Media endpoints of a session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MediaPlacement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_host_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_fallback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signaling_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_control_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_data_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_viewing_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_sharing_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_ingestion_url: Option<String>,
}

/// A joinable meeting as described by the session service.
///
/// Backed by the JSON object the service returned. Serializing writes that
/// object back unchanged, explicit `null`s included; the typed accessors
/// only read from it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct SessionDescriptor {
    meeting_id: String,
    document: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for SessionDescriptor {
    type Error = String;

    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        let meeting_id = match document.get("MeetingId") {
            Some(Value::String(id)) => id.clone(),
            Some(other) => return Err(format!("MeetingId must be a string, got {other}")),
            None => return Err("missing field `MeetingId`".to_string()),
        };
        Ok(Self {
            meeting_id,
            document,
        })
    }
}

impl From<SessionDescriptor> for Map<String, Value> {
    fn from(descriptor: SessionDescriptor) -> Self {
        descriptor.document
    }
}

impl SessionDescriptor {
    pub fn meeting_id(&self) -> &str {
        &self.meeting_id
    }

    pub fn external_meeting_id(&self) -> Option<&str> {
        self.document.get("ExternalMeetingId").and_then(Value::as_str)
    }

    pub fn media_region(&self) -> Option<&str> {
        self.document.get("MediaRegion").and_then(Value::as_str)
    }

    /// `None` when absent, `null`, or not shaped like a placement.
    pub fn media_placement(&self) -> Option<MediaPlacement> {
        self.document
            .get("MediaPlacement")
            .filter(|value| !value.is_null())
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// The descriptor exactly as the session service sent it.
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Serialize for storage in the meeting record's `data` field.
    pub fn to_record_data(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.document)
    }
}

/// An attendee issued by the session service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AttendeeInfo {
    pub attendee_id: String,
    #[serde(default)]
    pub external_user_id: Option<String>,
    pub join_token: String,
}

/// Everything a communication session needs to join: which meeting, as whom.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfiguration {
    pub meeting: SessionDescriptor,
    pub attendee: AttendeeInfo,
}

impl SessionConfiguration {
    pub fn new(meeting: SessionDescriptor, attendee: AttendeeInfo) -> Self {
        Self { meeting, attendee }
    }

    pub fn meeting_id(&self) -> &str {
        self.meeting.meeting_id()
    }

    pub fn attendee_id(&self) -> &str {
        &self.attendee.attendee_id
    }
}
