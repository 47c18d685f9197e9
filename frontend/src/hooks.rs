use log::warn;
use yew::prelude::*;

use crate::host::{browser_window, ScrollSubscription};
use crate::scroll::ScrollState;

/// Tracks the window scroll position for the lifetime of the calling
/// component. Re-renders only when the state actually flips.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |_| {
                let subscription = browser_window()
                    .and_then(|window| ScrollSubscription::acquire(window, move |next| setter.set(next)));

                let subscription = match subscription {
                    Ok(subscription) => {
                        subscription.sync();
                        Some(subscription)
                    }
                    Err(e) => {
                        warn!("Scroll tracking unavailable, navbar stays at top: {}", e);
                        None
                    }
                };

                move || drop(subscription)
            },
            (), // Subscribe once on mount, release on unmount
        );
    }

    *state
}
