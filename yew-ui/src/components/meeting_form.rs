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

//! The "Join Meeting" form.
//!
//! Two text fields (meeting title, attendee name) mirrored into
//! `localStorage` on every keystroke, and a button that runs the
//! join-or-create workflow. After an OAuth redirect-back the fields are
//! restored and the button is clicked again on the user's behalf.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::constants::{PRIMARY_BUTTON_ID, REDIRECT_CODE_PARAM};
use crate::context::{FormAction, FormStateCtx, MeetingServices};
use crate::devices::schedule_video_enable;
use crate::orchestrator::submit;
use crate::storage::{
    clear_meeting_ended, current_redirect_code, persist_attendee_name, persist_meeting_title,
    restore_after_redirect, LocalStorage,
};
use crate::timers::use_timer_slot;

fn click_primary_button() {
    let button = gloo_utils::document()
        .get_element_by_id(PRIMARY_BUTTON_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    match button {
        Some(button) => button.click(),
        None => log::warn!("#{PRIMARY_BUTTON_ID} not found, cannot replay submit"),
    }
}

#[function_component(MeetingForm)]
pub fn meeting_form() -> Html {
    let form = use_context::<FormStateCtx>();
    let services = use_context::<MeetingServices>();
    let replay_timer = use_timer_slot();
    let video_timer = use_timer_slot();

    // Restore after redirect-back, once per mount.
    {
        let form = form.clone();
        let replay_delay = services.as_ref().map(|s| s.restore_replay_delay_ms);
        let replay_timer = replay_timer.clone();
        use_effect_with((), move |_| {
            if let (Some(form), Some(delay)) = (form, replay_delay) {
                let code = current_redirect_code(REDIRECT_CODE_PARAM);
                if let Some(restored) = restore_after_redirect(&LocalStorage, code.as_deref()) {
                    log::info!("restoring meeting form after redirect");
                    form.dispatch(FormAction::Restore {
                        title: restored.meeting_title,
                        name: restored.attendee_name,
                    });
                    replay_timer.schedule(delay, click_primary_button);
                }
            }
        });
    }

    let (Some(form), Some(services)) = (form, services) else {
        log::error!("MeetingForm rendered without FormStateCtx or MeetingServices");
        return html! {};
    };

    let on_title_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            persist_meeting_title(&LocalStorage, &value);
            form.dispatch(FormAction::SetMeetingTitle(value));
        })
    };

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            persist_attendee_name(&LocalStorage, &value);
            form.dispatch(FormAction::SetAttendeeName(value));
        })
    };

    let on_join = {
        let form = form.clone();
        let services = services.clone();
        let video_timer = video_timer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            clear_meeting_ended(&LocalStorage);

            let meeting_title = form.meeting_title.clone();
            let attendee_name = form.attendee_name.clone();
            let dispatcher = form.dispatcher();
            let services = services.clone();
            let video_timer = video_timer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let bootstrap = submit(
                    &services.client,
                    services.client.as_ref(),
                    services.session.as_ref(),
                    &services.media_region,
                    &meeting_title,
                    &attendee_name,
                    move |action| dispatcher.dispatch(action),
                )
                .await;

                if bootstrap.is_some_and(|b| b.enable_video) {
                    schedule_video_enable(
                        &video_timer,
                        services.video_enable_delay_ms,
                        services.session.clone(),
                    );
                }
            });
        })
    };

    html! {
        <div class="form-container">
            <form>
                <div class="form-field">
                    <label for="meeting-title">{ "Meeting ID" }</label>
                    <input
                        id="meeting-title"
                        name="Meeting ID"
                        type="text"
                        placeholder="Enter a Meeting ID"
                        value={form.meeting_title.clone()}
                        oninput={on_title_input}
                    />
                </div>
                <div class="form-field">
                    <label for="attendee-name">{ "Name" }</label>
                    <input
                        id="attendee-name"
                        name="Name"
                        type="text"
                        placeholder="Enter your Attendee Name"
                        value={form.attendee_name.clone()}
                        oninput={on_name_input}
                    />
                </div>
                <button
                    id={PRIMARY_BUTTON_ID}
                    type="submit"
                    class="btn-apple btn-primary"
                    onclick={on_join}>
                    { "Join Meeting" }
                </button>
            </form>
        </div>
    }
}
