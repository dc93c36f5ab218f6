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

//! In-memory doubles for the remote collaborators, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use scriptide_client::{ApiError, MeetingStore, SessionService};
use scriptide_types::responses::{
    AttendeeRecord, CreateSessionResponse, JoinSessionResponse, MeetingRecord,
};
use scriptide_types::{AttendeeInfo, SessionConfiguration, SessionDescriptor};

use crate::context::FormAction;
use crate::session::{AttendeeNameResolver, MeetingSession, SessionError, VideoInputDevice};

#[derive(Default)]
pub struct FakeStore {
    meetings: RefCell<HashMap<String, MeetingRecord>>,
    attendees: RefCell<HashMap<String, String>>,
    lookups: RefCell<Vec<String>>,
    meeting_writes: RefCell<Vec<MeetingRecord>>,
    attendee_writes: RefCell<Vec<(String, String)>>,
    fail_lookups: bool,
}

impl FakeStore {
    pub fn with_meeting(title: &str, meeting_id: &str, data: &str) -> Self {
        let store = Self::default();
        store.meetings.borrow_mut().insert(
            title.to_string(),
            MeetingRecord {
                title: title.to_string(),
                meeting_id: meeting_id.to_string(),
                data: data.to_string(),
            },
        );
        store
    }

    pub fn failing_lookups() -> Self {
        Self {
            fail_lookups: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    pub fn meeting_writes(&self) -> Vec<MeetingRecord> {
        self.meeting_writes.borrow().clone()
    }

    pub fn attendee_writes(&self) -> Vec<(String, String)> {
        self.attendee_writes.borrow().clone()
    }
}

impl MeetingStore for FakeStore {
    async fn get_meeting(&self, title: &str) -> Result<Option<MeetingRecord>, ApiError> {
        self.lookups.borrow_mut().push(title.to_string());
        if self.fail_lookups {
            return Err(ApiError::ServerError {
                status: 503,
                body: "store unavailable".into(),
            });
        }
        Ok(self.meetings.borrow().get(title).cloned())
    }

    async fn add_meeting(&self, title: &str, meeting_id: &str, data: &str) -> Result<(), ApiError> {
        let record = MeetingRecord {
            title: title.to_string(),
            meeting_id: meeting_id.to_string(),
            data: data.to_string(),
        };
        self.meeting_writes.borrow_mut().push(record.clone());
        self.meetings.borrow_mut().insert(title.to_string(), record);
        Ok(())
    }

    async fn get_attendee(&self, attendee_id: &str) -> Result<AttendeeRecord, ApiError> {
        self.attendees
            .borrow()
            .get(attendee_id)
            .map(|name| AttendeeRecord {
                attendee_id: attendee_id.to_string(),
                name: name.clone(),
            })
            .ok_or_else(|| ApiError::NotFound(attendee_id.to_string()))
    }

    async fn add_attendee(&self, attendee_id: &str, name: &str) -> Result<(), ApiError> {
        self.attendee_writes
            .borrow_mut()
            .push((attendee_id.to_string(), name.to_string()));
        self.attendees
            .borrow_mut()
            .insert(attendee_id.to_string(), name.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeService {
    created: RefCell<Vec<(String, String, String)>>,
    joins: RefCell<Vec<(String, String)>>,
    fail_joins: bool,
}

impl FakeService {
    pub fn failing_joins() -> Self {
        Self {
            fail_joins: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<(String, String, String)> {
        self.created.borrow().clone()
    }

    pub fn joins(&self) -> Vec<(String, String)> {
        self.joins.borrow().clone()
    }
}

fn attendee(attendee_id: &str, name: &str) -> AttendeeInfo {
    AttendeeInfo {
        attendee_id: attendee_id.to_string(),
        external_user_id: Some(name.to_string()),
        join_token: format!("token-{attendee_id}"),
    }
}

impl SessionService for FakeService {
    async fn create_meeting(
        &self,
        title: &str,
        name: &str,
        region: &str,
    ) -> Result<CreateSessionResponse, ApiError> {
        self.created
            .borrow_mut()
            .push((title.to_string(), name.to_string(), region.to_string()));
        let meeting: SessionDescriptor = serde_json::from_value(serde_json::json!({
            "MeetingId": "m-new",
            "ExternalMeetingId": title,
            "MediaRegion": region,
        }))
        .expect("fake descriptor is valid");
        Ok(CreateSessionResponse {
            meeting,
            attendee: attendee("a-new", name),
        })
    }

    async fn join_meeting(
        &self,
        meeting_id: &str,
        name: &str,
    ) -> Result<JoinSessionResponse, ApiError> {
        self.joins
            .borrow_mut()
            .push((meeting_id.to_string(), name.to_string()));
        if self.fail_joins {
            return Err(ApiError::ServerError {
                status: 500,
                body: "join failed".into(),
            });
        }
        Ok(JoinSessionResponse {
            attendee: attendee("a-joined", name),
        })
    }
}

#[derive(Default)]
pub struct FakeSession {
    devices: Vec<VideoInputDevice>,
    joined: RefCell<Option<SessionConfiguration>>,
    started: Cell<bool>,
    audio_muted: Cell<bool>,
    video_inputs: RefCell<Vec<String>>,
    video_enabled: Cell<bool>,
    name_resolver: RefCell<Option<AttendeeNameResolver>>,
}

impl FakeSession {
    pub fn with_devices(ids: &[&str]) -> Self {
        Self {
            devices: ids
                .iter()
                .map(|id| VideoInputDevice {
                    device_id: id.to_string(),
                    label: format!("Camera {id}"),
                })
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_video_enabled(self) -> Self {
        self.video_enabled.set(true);
        self
    }

    pub fn joined(&self) -> Option<SessionConfiguration> {
        self.joined.borrow().clone()
    }

    pub fn started(&self) -> bool {
        self.started.get()
    }

    pub fn audio_muted(&self) -> bool {
        self.audio_muted.get()
    }

    pub fn video_inputs(&self) -> Vec<String> {
        self.video_inputs.borrow().clone()
    }

    /// Runs the installed name resolver, as a roster would.
    pub async fn resolve_name(&self, attendee_id: &str) -> Option<String> {
        let resolver = self.name_resolver.borrow().clone()?;
        resolver(attendee_id.to_string()).await
    }
}

impl MeetingSession for FakeSession {
    fn set_attendee_name_resolver(&self, resolver: AttendeeNameResolver) {
        *self.name_resolver.borrow_mut() = Some(resolver);
    }

    async fn join(&self, config: SessionConfiguration) -> Result<(), SessionError> {
        *self.joined.borrow_mut() = Some(config);
        Ok(())
    }

    async fn start(&self) -> Result<(), SessionError> {
        self.started.set(true);
        Ok(())
    }

    async fn mute_local_audio(&self) -> Result<(), SessionError> {
        self.audio_muted.set(true);
        Ok(())
    }

    async fn list_video_input_devices(&self) -> Result<Vec<VideoInputDevice>, SessionError> {
        Ok(self.devices.clone())
    }

    async fn start_video_input(&self, device_id: &str) -> Result<(), SessionError> {
        self.video_inputs.borrow_mut().push(device_id.to_string());
        Ok(())
    }

    fn is_video_enabled(&self) -> bool {
        self.video_enabled.get()
    }

    fn toggle_video(&self) -> Result<bool, SessionError> {
        let enabled = !self.video_enabled.get();
        self.video_enabled.set(enabled);
        Ok(enabled)
    }
}

/// Collects dispatched form actions.
#[derive(Default)]
pub struct Recorder(RefCell<Vec<FormAction>>);

impl Recorder {
    pub fn dispatcher(&self) -> impl Fn(FormAction) + '_ {
        move |action| self.0.borrow_mut().push(action)
    }

    pub fn actions(&self) -> Vec<FormAction> {
        self.0.borrow().clone()
    }
}
