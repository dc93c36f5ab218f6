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

//! Join-or-create workflow behind the "Join Meeting" button.
//!
//! The meeting title is the lookup key. If the store already has a meeting
//! under that title its session descriptor is reused; otherwise a new session
//! is created, recorded, and the caller becomes the meeting's initiator.

use std::rc::Rc;

use scriptide_client::{ApiError, MeetingStore, SessionService};
use scriptide_types::SessionConfiguration;
use thiserror::Error;

use crate::context::FormAction;
use crate::devices::{bootstrap_devices, DeviceBootstrap};
use crate::session::{attendee_name_resolver, MeetingSession, SessionError};

#[derive(Debug, Error)]
pub enum JoinError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session descriptor could not be encoded or decoded: {0}")]
    Descriptor(#[from] serde_json::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Normalized form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    /// Trimmed and lowercased; used as the meeting record key.
    pub title: String,
    /// Trimmed display name.
    pub name: String,
}

impl JoinRequest {
    pub fn from_form(meeting_title: &str, attendee_name: &str) -> Self {
        Self {
            title: normalize_title(meeting_title),
            name: attendee_name.trim().to_string(),
        }
    }
}

pub fn normalize_title(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Joined a meeting somebody else created.
    Joined { attendee_id: String },
    /// Created the meeting; this attendee is its initiator.
    Created { attendee_id: String },
}

/// Look the meeting up by title, then join it or create it, and join the
/// communication session.
///
/// `SetMeetingActive(true)` is dispatched as soon as the lookup has
/// answered and is never reverted, even when a later step fails.
pub async fn join_or_create<S, V, M, F>(
    store: &S,
    service: &V,
    session: &M,
    media_region: &str,
    request: &JoinRequest,
    dispatch: F,
) -> Result<JoinOutcome, JoinError>
where
    S: MeetingStore,
    V: SessionService,
    M: MeetingSession,
    F: Fn(FormAction),
{
    match store.get_meeting(&request.title).await? {
        Some(record) => {
            dispatch(FormAction::SetMeetingActive(true));
            let descriptor = record.descriptor()?;
            let joined = service
                .join_meeting(descriptor.meeting_id(), &request.name)
                .await?;
            let attendee_id = joined.attendee.attendee_id.clone();
            store.add_attendee(&attendee_id, &request.name).await?;

            session
                .join(SessionConfiguration::new(descriptor, joined.attendee))
                .await?;
            session.mute_local_audio().await?;
            Ok(JoinOutcome::Joined { attendee_id })
        }
        None => {
            dispatch(FormAction::SetMeetingActive(true));
            let created = service
                .create_meeting(&request.title, &request.name, media_region)
                .await?;
            let data = created.meeting.to_record_data()?;
            store
                .add_meeting(&request.title, created.meeting.meeting_id(), &data)
                .await?;
            let attendee_id = created.attendee.attendee_id.clone();
            store.add_attendee(&attendee_id, &request.name).await?;
            dispatch(FormAction::SetInitiator(attendee_id.clone()));

            session
                .join(SessionConfiguration::new(created.meeting, created.attendee))
                .await?;
            Ok(JoinOutcome::Created { attendee_id })
        }
    }
}

/// Everything the submit button does.
///
/// The session is first handed a resolver that names attendees from the
/// store's attendee records. Failures are logged and swallowed: device bring-up runs whether or not
/// the join succeeded. Returns what device bring-up achieved, if it got
/// that far.
pub async fn submit<S, V, M, F>(
    store: &Rc<S>,
    service: &V,
    session: &M,
    media_region: &str,
    meeting_title: &str,
    attendee_name: &str,
    dispatch: F,
) -> Option<DeviceBootstrap>
where
    S: MeetingStore + 'static,
    V: SessionService,
    M: MeetingSession,
    F: Fn(FormAction),
{
    let request = JoinRequest::from_form(meeting_title, attendee_name);
    dispatch(FormAction::SetMeetingIdentifier(request.title.clone()));
    session.set_attendee_name_resolver(attendee_name_resolver(store.clone()));

    match join_or_create(store.as_ref(), service, session, media_region, &request, &dispatch).await {
        Ok(JoinOutcome::Joined { attendee_id }) => {
            log::info!("joined meeting '{}' as {attendee_id}", request.title)
        }
        Ok(JoinOutcome::Created { attendee_id }) => {
            log::info!("created meeting '{}' as {attendee_id}", request.title)
        }
        Err(e) => log::error!("failed to join meeting '{}': {e}", request.title),
    }

    match bootstrap_devices(session).await {
        Ok(bootstrap) => Some(bootstrap),
        Err(e) => {
            log::error!("failed to start video input: {e}");
            None
        }
    }
}
