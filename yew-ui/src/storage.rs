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

//! Local-storage mirror of the meeting form.
//!
//! Both text fields are written on every keystroke so that they survive an
//! OAuth redirect round-trip. Values are stored JSON-encoded.

use web_sys::Storage;

pub const MEETING_TITLE_KEY: &str = "meetingTitle";
pub const ATTENDEE_NAME_KEY: &str = "attendeeName";
pub const MEETING_ENDED_KEY: &str = "meetingIsEnded";

/// Minimal string key/value store. Implemented by [`LocalStorage`] in the
/// browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every operation is a no-op when storage is
/// unavailable (private browsing, sandboxed iframes).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to write {key} to localStorage");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Form values recovered after a redirect-back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoredForm {
    pub meeting_title: String,
    pub attendee_name: String,
}

fn persist_field(store: &impl KeyValueStore, key: &str, value: &str) {
    match serde_json::to_string(value) {
        Ok(encoded) => store.set(key, &encoded),
        Err(e) => log::warn!("failed to encode {key}: {e}"),
    }
}

fn load_field(store: &impl KeyValueStore, key: &str) -> Option<String> {
    let raw = store.get(key)?;
    match serde_json::from_str::<String>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unreadable {key} in storage: {e}");
            None
        }
    }
}

pub fn persist_meeting_title(store: &impl KeyValueStore, title: &str) {
    persist_field(store, MEETING_TITLE_KEY, title);
}

pub fn persist_attendee_name(store: &impl KeyValueStore, name: &str) {
    persist_field(store, ATTENDEE_NAME_KEY, name);
}

pub fn load_meeting_title(store: &impl KeyValueStore) -> Option<String> {
    load_field(store, MEETING_TITLE_KEY)
}

pub fn load_attendee_name(store: &impl KeyValueStore) -> Option<String> {
    load_field(store, ATTENDEE_NAME_KEY)
}

/// The marker is written by the in-call view once the meeting is over.
pub fn is_meeting_ended(store: &impl KeyValueStore) -> bool {
    store
        .get(MEETING_ENDED_KEY)
        .is_some_and(|marker| !marker.is_empty())
}

pub fn clear_meeting_ended(store: &impl KeyValueStore) {
    store.remove(MEETING_ENDED_KEY);
}

/// Decide whether the form should be restored on mount.
///
/// Restores only when a non-empty redirect code is present, no meeting-ended
/// marker exists, and both fields are stored and decodable.
pub fn restore_after_redirect(
    store: &impl KeyValueStore,
    redirect_code: Option<&str>,
) -> Option<RestoredForm> {
    redirect_code.filter(|code| !code.is_empty())?;
    if is_meeting_ended(store) {
        log::debug!("meeting ended marker present, skipping restore");
        return None;
    }
    Some(RestoredForm {
        meeting_title: load_meeting_title(store)?,
        attendee_name: load_attendee_name(store)?,
    })
}

/// The redirect code in the current page URL, if any.
pub fn current_redirect_code(param: &str) -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get(param)
}
