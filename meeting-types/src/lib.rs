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

//! Shared API types for the Scriptide meeting store and session service.
//!
//! This crate defines the contract between the meeting form and its remote
//! collaborators: the data store that keeps meeting/attendee records and the
//! session service that creates and joins communication sessions.
//! It is intentionally framework-agnostic.

pub mod error;
pub mod requests;
pub mod responses;
pub mod session;

pub use error::APIError;
pub use responses::APIResponse;
pub use session::{AttendeeInfo, MediaPlacement, SessionConfiguration, SessionDescriptor};
