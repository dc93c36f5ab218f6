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

//! The communication session the form joins.
//!
//! [`MeetingSession`] is the seam between the join workflow and whatever
//! carries media. [`BrowserSession`] is the in-browser implementation: it
//! holds the join configuration, owns the local camera stream and resolves
//! attendee display names through whatever [`AttendeeNameResolver`] the join
//! workflow installed. Media transport is not its concern.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::Array;
use scriptide_client::MeetingStore;
use scriptide_types::SessionConfiguration;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    MediaDeviceInfo, MediaDeviceKind, MediaStream, MediaStreamConstraints, MediaStreamTrack,
    MediaTrackConstraints,
};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("session has not been joined")]
    NotJoined,
    #[error("no video input has been started")]
    NoVideoInput,
    #[error("browser call failed: {0}")]
    Browser(String),
}

impl From<JsValue> for SessionError {
    fn from(value: JsValue) -> Self {
        SessionError::Browser(format!("{value:?}"))
    }
}

/// A camera as reported by device enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoInputDevice {
    pub device_id: String,
    pub label: String,
}

impl From<&MediaDeviceInfo> for VideoInputDevice {
    fn from(info: &MediaDeviceInfo) -> Self {
        Self {
            device_id: info.device_id(),
            label: info.label(),
        }
    }
}

/// Maps an attendee id to the display name shown in the roster.
pub type AttendeeNameResolver = Rc<dyn Fn(String) -> LocalBoxFuture<'static, Option<String>>>;

/// A resolver backed by the meeting store's attendee records.
pub fn attendee_name_resolver<S: MeetingStore + 'static>(store: Rc<S>) -> AttendeeNameResolver {
    Rc::new(move |attendee_id: String| {
        let store = store.clone();
        async move {
            match store.get_attendee(&attendee_id).await {
                Ok(record) => Some(record.name),
                Err(e) => {
                    log::warn!("no name for attendee {attendee_id}: {e}");
                    None
                }
            }
        }
        .boxed_local()
    })
}

/// Operations the join workflow performs on a communication session.
///
/// Methods take `&self`; implementations keep their state behind interior
/// mutability so one session can be shared between callbacks.
#[allow(async_fn_in_trait)]
pub trait MeetingSession {
    /// Replaces any previously installed resolver.
    fn set_attendee_name_resolver(&self, resolver: AttendeeNameResolver);
    async fn join(&self, config: SessionConfiguration) -> Result<(), SessionError>;
    async fn start(&self) -> Result<(), SessionError>;
    async fn mute_local_audio(&self) -> Result<(), SessionError>;
    async fn list_video_input_devices(&self) -> Result<Vec<VideoInputDevice>, SessionError>;
    async fn start_video_input(&self, device_id: &str) -> Result<(), SessionError>;
    fn is_video_enabled(&self) -> bool;
    fn toggle_video(&self) -> Result<bool, SessionError>;
}

#[derive(Default)]
struct SessionState {
    config: Option<SessionConfiguration>,
    started: bool,
    audio_muted: bool,
    video_stream: Option<MediaStream>,
    video_enabled: bool,
}

#[derive(Default)]
pub struct BrowserSession {
    name_resolver: RefCell<Option<AttendeeNameResolver>>,
    state: RefCell<SessionState>,
}

impl BrowserSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configuration(&self) -> Option<SessionConfiguration> {
        self.state.borrow().config.clone()
    }

    pub fn is_started(&self) -> bool {
        self.state.borrow().started
    }

    pub fn is_audio_muted(&self) -> bool {
        self.state.borrow().audio_muted
    }

    /// Display name for an attendee id. `None` until a resolver is installed.
    pub async fn attendee_name(&self, attendee_id: &str) -> Option<String> {
        let resolver = self.name_resolver.borrow().clone()?;
        resolver(attendee_id.to_string()).await
    }

    fn set_video_tracks_enabled(stream: &MediaStream, enabled: bool) {
        for track in stream.get_video_tracks().iter() {
            track.unchecked_into::<MediaStreamTrack>().set_enabled(enabled);
        }
    }
}

impl MeetingSession for BrowserSession {
    fn set_attendee_name_resolver(&self, resolver: AttendeeNameResolver) {
        *self.name_resolver.borrow_mut() = Some(resolver);
    }

    async fn join(&self, config: SessionConfiguration) -> Result<(), SessionError> {
        log::info!(
            "joining session {} as attendee {}",
            config.meeting_id(),
            config.attendee_id()
        );
        self.state.borrow_mut().config = Some(config);
        Ok(())
    }

    async fn start(&self) -> Result<(), SessionError> {
        let mut state = self.state.borrow_mut();
        if state.config.is_none() {
            return Err(SessionError::NotJoined);
        }
        state.started = true;
        Ok(())
    }

    async fn mute_local_audio(&self) -> Result<(), SessionError> {
        self.state.borrow_mut().audio_muted = true;
        Ok(())
    }

    async fn list_video_input_devices(&self) -> Result<Vec<VideoInputDevice>, SessionError> {
        let window = web_sys::window().ok_or(SessionError::Browser("no window".to_string()))?;
        let media_devices = window.navigator().media_devices()?;
        let devices = JsFuture::from(media_devices.enumerate_devices()?).await?;
        let devices: Array = devices.unchecked_into();
        Ok(devices
            .iter()
            .map(|device| device.unchecked_into::<MediaDeviceInfo>())
            .filter(|device| device.kind() == MediaDeviceKind::Videoinput)
            .map(|device| VideoInputDevice::from(&device))
            .collect())
    }

    async fn start_video_input(&self, device_id: &str) -> Result<(), SessionError> {
        let window = web_sys::window().ok_or(SessionError::Browser("no window".to_string()))?;
        let media_devices = window.navigator().media_devices()?;

        let exact = js_sys::Object::new();
        js_sys::Reflect::set(
            &exact,
            &JsValue::from_str("exact"),
            &JsValue::from_str(device_id),
        )?;
        let video = MediaTrackConstraints::new();
        video.set_device_id(&exact.into());
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&video.into());
        constraints.set_audio(&JsValue::FALSE);

        let stream: MediaStream =
            JsFuture::from(media_devices.get_user_media_with_constraints(&constraints)?)
                .await?
                .unchecked_into();
        log::debug!("video input {device_id} acquired, stream id={}", stream.id());

        // Input is acquired but not shown until video is toggled on.
        Self::set_video_tracks_enabled(&stream, false);
        let mut state = self.state.borrow_mut();
        if let Some(previous) = state.video_stream.replace(stream) {
            for track in previous.get_tracks().iter() {
                track.unchecked_into::<MediaStreamTrack>().stop();
            }
        }
        state.video_enabled = false;
        Ok(())
    }

    fn is_video_enabled(&self) -> bool {
        self.state.borrow().video_enabled
    }

    fn toggle_video(&self) -> Result<bool, SessionError> {
        let mut state = self.state.borrow_mut();
        let enabled = !state.video_enabled;
        let stream = state.video_stream.as_ref().ok_or(SessionError::NoVideoInput)?;
        Self::set_video_tracks_enabled(stream, enabled);
        state.video_enabled = enabled;
        log::info!("local video {}", if enabled { "enabled" } else { "disabled" });
        Ok(enabled)
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Some(stream) = self.state.get_mut().video_stream.take() {
            for track in stream.get_tracks().iter() {
                track.unchecked_into::<MediaStreamTrack>().stop();
            }
        }
    }
}
