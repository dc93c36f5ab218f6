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

use scriptide_ui::components::config_error::ConfigError;
use scriptide_ui::components::meeting_form::MeetingForm;
use scriptide_ui::constants::app_config;
use scriptide_ui::context::{FormState, FormStateCtx, MeetingServices};
use yew::prelude::*;

#[function_component(App)]
fn app_component() -> Html {
    let form = use_reducer(FormState::default);
    let services = use_memo((), |_| {
        app_config().map(|config| MeetingServices::from_config(&config))
    });

    match &*services {
        Ok(services) => html! {
            <ContextProvider<FormStateCtx> context={form}>
                <ContextProvider<MeetingServices> context={services.clone()}>
                    <MeetingForm />
                </ContextProvider<MeetingServices>>
            </ContextProvider<FormStateCtx>>
        },
        Err(e) => {
            log::error!("{e}");
            html! { <ConfigError message={e.clone()} /> }
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("failed to initialise logger: {e}").into());
    }
    yew::Renderer::<App>::new().render();
}
