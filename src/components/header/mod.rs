//! Page header component.
//!
//! Shows the application title and the favorites-list toggle.

use country_core::Action;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_TITLE;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let favorite_count = Signal::derive(move || ctx.state.with(|s| s.favorites().len()));
    let is_open = Signal::derive(move || ctx.state.with(|s| s.favorites_view_open()));

    let toggle_favorites = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(Action::ToggleFavoritesView);
    };

    let toggle_label = Signal::derive(move || {
        if is_open.get() {
            "Hide favorites"
        } else {
            "Show favorites"
        }
    });

    view! {
        <header class=css::header>
            <h2 class=css::title>
                <span class=css::titleIcon><Icon icon=ic::GLOBE /></span>
                {APP_TITLE}
            </h2>
            <button
                class=move || {
                    if is_open.get() {
                        format!("{} {}", css::favoritesButton, css::active)
                    } else {
                        css::favoritesButton.to_string()
                    }
                }
                on:click=toggle_favorites
                title=move || toggle_label.get()
                aria-pressed=move || is_open.get().to_string()
            >
                <Icon icon=ic::STAR_FILL />
                <span class=css::buttonLabel>"Favorites"</span>
                <span class=css::badge>{move || favorite_count.get()}</span>
            </button>
        </header>
    }
}
