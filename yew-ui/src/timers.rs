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

//! One-shot timers bound to a component's lifetime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Holds at most one pending [`Timeout`].
///
/// Scheduling replaces (and so cancels) whatever was pending. Once
/// [`close`](Self::close) has been called, typically from an effect's
/// cleanup, nothing new is scheduled and the pending timeout is dropped.
#[derive(Default)]
pub struct TimerSlot {
    closed: Cell<bool>,
    pending: RefCell<Option<Timeout>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        if self.closed.get() {
            log::debug!("timer slot closed, dropping {millis}ms task");
            return;
        }
        self.pending
            .borrow_mut()
            .replace(Timeout::new(millis, callback));
    }

    pub fn close(&self) {
        self.closed.set(true);
        self.pending.borrow_mut().take();
    }
}

/// A [`TimerSlot`] that lives as long as the calling component and is
/// closed when it unmounts.
#[hook]
pub fn use_timer_slot() -> Rc<TimerSlot> {
    let slot = use_memo((), |_| TimerSlot::new());
    {
        let slot = slot.clone();
        use_effect_with((), move |_| move || slot.close());
    }
    slot
}
