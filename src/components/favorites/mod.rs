//! Favorites side panel.
//!
//! Lists favorited countries in dataset order, independent of the current
//! search. Clicking an entry opens its details; the star removes it.

use country_core::{Action, Country};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/favorites/favorites.module.css");

#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = Memo::new(move |_| {
        ctx.state.with(|s| {
            s.favorite_records()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let is_empty = Signal::derive(move || entries.with(|e| e.is_empty()));

    let close = move |_: leptos::ev::MouseEvent| ctx.dispatch(Action::ToggleFavoritesView);

    view! {
        <aside class=css::panel role="complementary" aria-label="Favorite countries">
            <header class=css::header>
                <span class=css::title>"Favorites"</span>
                <button
                    class=css::closeButton
                    on:click=close
                    title="Close favorites"
                    aria-label="Close favorites panel"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </header>
            <Show
                when=move || !is_empty.get()
                fallback=|| view! {
                    <p class=css::empty>"No favorites yet. Use the star on any row."</p>
                }
            >
                <ul class=css::list>
                    <For
                        each=move || entries.get()
                        key=|country| country.id()
                        children=move |country| view! { <FavoriteItem country=country /> }
                    />
                </ul>
            </Show>
        </aside>
    }
}

#[component]
fn FavoriteItem(country: Country) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = country.id();
    let id_for_select = id.clone();
    let name = country.name.common.clone();

    let open = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(Action::Select(id_for_select.clone()));
    };
    let remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.dispatch(Action::ToggleFavorite(id.clone()));
    };

    view! {
        <li class=css::item on:click=open>
            <img
                class=css::flag
                src=country.flag_image_url().to_string()
                alt=country.flag_alt()
                loading="lazy"
            />
            <span class=css::name>{name.clone()}</span>
            <button
                class=css::remove
                on:click=remove
                title="Remove from favorites"
                aria-label=format!("Remove {} from favorites", name)
            >
                <Icon icon=ic::STAR_FILL />
            </button>
        </li>
    }
}
