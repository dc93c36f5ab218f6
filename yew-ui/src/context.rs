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

//! Context providers for the application
//!
//! This module centralises shared state that needs to be accessed across
//! the component tree through Yew's `ContextProvider`.

use std::rc::Rc;

use scriptide_client::{AuthMode, MeetingApiClient};
use yew::prelude::*;

use crate::constants::RuntimeConfig;
use crate::session::BrowserSession;

// -----------------------------------------------------------------------------
// Form state
// -----------------------------------------------------------------------------

/// Everything the meeting form and its siblings need to know.
///
/// `meeting_title` and `attendee_name` hold the raw text as typed. The
/// remaining fields are written by the join workflow.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FormState {
    pub meeting_title: String,
    pub attendee_name: String,
    /// Normalized title of the meeting being joined.
    pub meeting_identifier: Option<String>,
    pub meeting_active: bool,
    /// Attendee id of whoever created the meeting, when it was this client.
    pub initiator: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    SetMeetingTitle(String),
    SetAttendeeName(String),
    /// Both fields at once, after a redirect-back.
    Restore { title: String, name: String },
    SetMeetingIdentifier(String),
    SetMeetingActive(bool),
    SetInitiator(String),
}

impl FormState {
    /// Return the state that results from `action`. `self` is left untouched.
    pub fn apply(&self, action: FormAction) -> Self {
        let mut next = self.clone();
        match action {
            FormAction::SetMeetingTitle(title) => next.meeting_title = title,
            FormAction::SetAttendeeName(name) => next.attendee_name = name,
            FormAction::Restore { title, name } => {
                next.meeting_title = title;
                next.attendee_name = name;
            }
            FormAction::SetMeetingIdentifier(identifier) => {
                next.meeting_identifier = Some(identifier)
            }
            FormAction::SetMeetingActive(active) => next.meeting_active = active,
            FormAction::SetInitiator(attendee_id) => next.initiator = Some(attendee_id),
        }
        next
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Type alias used throughout the app when accessing the form context.
pub type FormStateCtx = UseReducerHandle<FormState>;

// -----------------------------------------------------------------------------
// Remote collaborators
// -----------------------------------------------------------------------------

/// Handles to the meeting API and the communication session, plus the
/// tunables read from the runtime config.
#[derive(Clone)]
pub struct MeetingServices {
    pub client: Rc<MeetingApiClient>,
    pub session: Rc<BrowserSession>,
    pub media_region: String,
    pub video_enable_delay_ms: u32,
    pub restore_replay_delay_ms: u32,
}

impl MeetingServices {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        let client = Rc::new(MeetingApiClient::new(
            &config.meeting_api_base_url,
            AuthMode::Cookie,
        ));
        let session = Rc::new(BrowserSession::new());
        Self {
            client,
            session,
            media_region: config.media_region.clone(),
            video_enable_delay_ms: config.video_enable_delay_ms,
            restore_replay_delay_ms: config.restore_replay_delay_ms,
        }
    }
}

impl PartialEq for MeetingServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client) && Rc::ptr_eq(&self.session, &other.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_does_not_mutate_the_original() {
        let before = FormState::default();
        let after = before.apply(FormAction::SetMeetingTitle("Standup".into()));
        assert_eq!(before.meeting_title, "");
        assert_eq!(after.meeting_title, "Standup");
    }

    #[test]
    fn restore_sets_both_fields() {
        let state = FormState::default().apply(FormAction::Restore {
            title: "Standup".into(),
            name: "Ada".into(),
        });
        assert_eq!(state.meeting_title, "Standup");
        assert_eq!(state.attendee_name, "Ada");
        assert!(!state.meeting_active);
        assert_eq!(state.initiator, None);
    }

    #[test]
    fn workflow_fields_are_independent_of_text_fields() {
        let state = FormState::default()
            .apply(FormAction::SetAttendeeName("  Grace ".into()))
            .apply(FormAction::SetMeetingIdentifier("weekly sync".into()))
            .apply(FormAction::SetMeetingActive(true))
            .apply(FormAction::SetInitiator("a-1".into()));
        assert_eq!(state.attendee_name, "  Grace ");
        assert_eq!(state.meeting_identifier.as_deref(), Some("weekly sync"));
        assert!(state.meeting_active);
        assert_eq!(state.initiator.as_deref(), Some("a-1"));
    }

    #[test]
    fn reducer_returns_new_rc() {
        let state = Rc::new(FormState::default());
        let next = state.clone().reduce(FormAction::SetMeetingActive(true));
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.meeting_active);
        assert!(!state.meeting_active);
    }
}
