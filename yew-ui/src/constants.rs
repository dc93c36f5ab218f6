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

//! Runtime configuration.
//!
//! The page embeds a `window.__APP_CONFIG` object before the wasm bundle
//! loads. Only the API base URL is required; everything else has a default.

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;

/// Region new sessions are placed in unless the config says otherwise.
pub const DEFAULT_MEDIA_REGION: &str = "us-east-1";

/// Delay before a restored form is submitted again.
pub const RESTORE_REPLAY_DELAY_MS: u32 = 200;

/// Delay between starting video input and enabling local video.
pub const VIDEO_ENABLE_DELAY_MS: u32 = 3000;

/// Query parameter an OAuth provider appends when redirecting back.
pub const REDIRECT_CODE_PARAM: &str = "code";

/// DOM id of the submit button. The redirect replay clicks it.
pub const PRIMARY_BUTTON_ID: &str = "primary-button";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    #[serde(rename = "meetingApiBaseUrl")]
    pub meeting_api_base_url: String,
    #[serde(rename = "mediaRegion")]
    #[serde(default = "default_media_region")]
    pub media_region: String,
    #[serde(rename = "videoEnableDelayMs")]
    #[serde(default = "default_video_enable_delay_ms")]
    pub video_enable_delay_ms: u32,
    #[serde(rename = "restoreReplayDelayMs")]
    #[serde(default = "default_restore_replay_delay_ms")]
    pub restore_replay_delay_ms: u32,
}

fn default_media_region() -> String {
    DEFAULT_MEDIA_REGION.to_string()
}

fn default_video_enable_delay_ms() -> u32 {
    VIDEO_ENABLE_DELAY_MS
}

fn default_restore_replay_delay_ms() -> u32 {
    RESTORE_REPLAY_DELAY_MS
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = web_sys::window().ok_or_else(|| "No window object available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}
