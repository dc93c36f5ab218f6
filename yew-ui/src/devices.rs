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

//! Camera bring-up after a session has been joined.

use std::rc::Rc;

use crate::session::{MeetingSession, SessionError, VideoInputDevice};
use crate::timers::TimerSlot;

/// What device bring-up did, and what is left for the caller to schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceBootstrap {
    /// The camera video input was started on, if any was found.
    pub device_id: Option<String>,
    /// Local video should be turned on once the enable delay elapses.
    pub enable_video: bool,
}

/// The camera to use: the last one enumerated.
pub fn select_video_device(devices: &[VideoInputDevice]) -> Option<&VideoInputDevice> {
    devices.last()
}

/// Start the session, pick a camera and start video input on it.
///
/// Local video itself is not enabled here. When a camera was found and video
/// is still off, [`DeviceBootstrap::enable_video`] tells the caller to do it
/// after its delay.
pub async fn bootstrap_devices<M: MeetingSession>(
    session: &M,
) -> Result<DeviceBootstrap, SessionError> {
    session.start().await?;

    let devices = session.list_video_input_devices().await?;
    log::debug!("{} video input device(s) available", devices.len());
    let device_id = select_video_device(&devices).map(|device| device.device_id.clone());

    if let Some(device_id) = &device_id {
        session.start_video_input(device_id).await?;
    }

    Ok(DeviceBootstrap {
        enable_video: device_id.is_some() && !session.is_video_enabled(),
        device_id,
    })
}

/// Turn local video on once, `delay_ms` from now.
///
/// Video that is already on when the timer fires is left alone. Closing
/// `slot` first cancels the enable.
pub fn schedule_video_enable<M: MeetingSession + 'static>(
    slot: &TimerSlot,
    delay_ms: u32,
    session: Rc<M>,
) {
    slot.schedule(delay_ms, move || {
        if session.is_video_enabled() {
            log::debug!("local video already on");
            return;
        }
        if let Err(e) = session.toggle_video() {
            log::error!("failed to enable local video: {e}");
        }
    });
}
