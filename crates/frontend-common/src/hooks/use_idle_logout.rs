//! Idle-session enforcement.
//!
//! Wires the [`IdleTimer`] state machine to the DOM: activity listeners in
//! the capture phase, a one-second interval advancing the clock, and the
//! blocking confirmation prompt on the warning transition. Armed only while
//! authenticated; torn down on unmount or when `enabled` flips.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::config::IdleConfig;
use crate::session::{IdleEvent, IdleTimer};

const WARNING_PROMPT: &str =
    "Your session will expire in 1 minute due to inactivity. Do you want to continue your session?";

/// Hook enforcing the idle timeout while `enabled` is true. `on_logout`
/// fires on decline or expiry; the caller performs the actual logout.
#[hook]
pub fn use_idle_logout(enabled: bool, on_logout: Callback<()>) {
    use_effect_with(enabled, move |enabled| {
        let mut listeners = Vec::new();
        let mut interval = None;

        if *enabled {
            let timer = Rc::new(RefCell::new(IdleTimer::new(
                IdleConfig::SESSION_TIMEOUT_MS,
                IdleConfig::WARNING_BEFORE_EXPIRY_MS,
            )));
            let last_tick = Rc::new(Cell::new(js_sys::Date::now()));

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                for event in IdleConfig::ACTIVITY_EVENTS {
                    let timer = timer.clone();
                    listeners.push(EventListener::new_with_options(
                        &document,
                        event,
                        EventListenerOptions::run_in_capture_phase(),
                        move |_| timer.borrow_mut().record_activity(),
                    ));
                }
            }

            interval = Some(Interval::new(IdleConfig::TICK_MS, move || {
                // Wall-clock deltas, not tick counts: intervals are
                // throttled in background tabs and blocked by the prompt.
                let now = js_sys::Date::now();
                let delta = (now - last_tick.get()).max(0.0) as u64;
                last_tick.set(now);

                let event = timer.borrow_mut().advance(delta);
                match event {
                    Some(IdleEvent::Warn) => {
                        let confirmed = web_sys::window()
                            .and_then(|w| w.confirm_with_message(WARNING_PROMPT).ok())
                            .unwrap_or(false);
                        if confirmed {
                            timer.borrow_mut().confirm_continue();
                        } else {
                            tracing::info!("idle warning declined, logging out");
                            on_logout.emit(());
                        }
                    }
                    Some(IdleEvent::Expired) => {
                        tracing::info!("idle session expired, logging out");
                        on_logout.emit(());
                    }
                    None => {}
                }
            }));
        }

        move || {
            drop(listeners);
            drop(interval);
        }
    });
}
