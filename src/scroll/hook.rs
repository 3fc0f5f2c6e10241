use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::engine::{LayoutSnapshot, ScrollState};
use super::layout;
use crate::config::ScrollConfig;

/// One measurement to fold into the current state.
pub struct Measured {
    pub snapshot: LayoutSnapshot,
    pub config: ScrollConfig,
}

impl Reducible for ScrollState {
    type Action = Measured;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(ScrollState::derive(&self, &action.snapshot, &action.config))
    }
}

fn measure(state: &UseReducerDispatcher<ScrollState>, config: ScrollConfig) {
    match layout::snapshot(&config) {
        Ok(snapshot) => state.dispatch(Measured { snapshot, config }),
        // keep whatever we showed last
        Err(e) => debug!("Skipping scroll update: {}", e),
    }
}

/// Scroll-linked state of the page, kept current for as long as the caller is mounted.
#[hook]
pub fn use_scroll_state(config: ScrollConfig) -> ScrollState {
    let state = use_reducer_eq(ScrollState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |config: &ScrollConfig| {
                let config = *config;
                if let Err(e) = layout::scroll_to_top() {
                    debug!("Could not reset scroll position: {}", e);
                }
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let dispatcher = dispatcher.clone();
                        move || measure(&dispatcher, config)
                    });
                    let registered = window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok();
                    if !registered {
                        debug!("Scroll listener was not registered");
                    }
                    // Initial state
                    measure(&dispatcher, config);
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            config,
        );
    }

    *state
}
