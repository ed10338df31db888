//! Search bar component.
//!
//! Every keystroke dispatches the new query; the visible subset is
//! recomputed synchronously by the explorer state.

use country_core::Action;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SEARCH_PLACEHOLDER;
use crate::utils::format::format_count;

stylance::import_crate_style!(css, "src/components/search/search.module.css");

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let query = Signal::derive(move || ctx.state.with(|s| s.query().to_string()));
    let has_query = Signal::derive(move || ctx.state.with(|s| !s.query().is_empty()));
    let count = Signal::derive(move || {
        ctx.state.with(|s| format_count(s.visible().len(), s.records().len()))
    });

    let on_input = move |ev: leptos::ev::Event| {
        ctx.dispatch(Action::SetQuery(event_target_value(&ev)));
    };

    let on_clear = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(Action::SetQuery(String::new()));
    };

    view! {
        <div class=css::bar role="search">
            <span class=css::icon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                class=css::input
                type="search"
                placeholder=SEARCH_PLACEHOLDER
                aria-label="Search countries"
                prop:value=move || query.get()
                on:input=on_input
            />
            <Show when=move || has_query.get()>
                <button
                    class=css::clear
                    on:click=on_clear
                    title="Clear search"
                    aria-label="Clear search"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </Show>
            <span class=css::count aria-live="polite">{move || count.get()}</span>
        </div>
    }
}
