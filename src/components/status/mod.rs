//! Load status line.
//!
//! Reports the startup fetch: a loading notice while it is in flight and
//! the error message if it failed. Renders nothing once data is loaded.

use country_core::LoadState;
use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

#[component]
pub fn LoadStatus() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let load_state = Memo::new(move |_| ctx.state.with(|s| s.load_state().clone()));

    move || match load_state.get() {
        LoadState::NotStarted | LoadState::Loaded => None,
        LoadState::InFlight => Some(
            view! {
                <p class=css::loading role="status">"Loading countries..."</p>
            }
            .into_any(),
        ),
        LoadState::Failed(msg) => Some(
            view! {
                <p class=css::error role="alert">
                    <span class=css::errorLabel>"Could not load countries:"</span>
                    " "
                    {msg}
                </p>
            }
            .into_any(),
        ),
    }
}
