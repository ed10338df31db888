//! Country detail modal.
//!
//! Opens for the selected country. Selecting another country swaps the
//! content in place; the close button, a backdrop click, or Escape
//! deselects. The favorites panel can stay open alongside it.

use country_core::{Action, Country};
use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::{format_area, format_population, join_or};

stylance::import_crate_style!(css, "src/components/detail/detail.module.css");

#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let selected = Memo::new(move |_| ctx.state.with(|s| s.selected().cloned()));

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            ctx.dispatch(Action::CloseDetail);
        }
    });
    on_cleanup(move || handle.remove());

    move || {
        selected.get().map(|country| {
            view! { <DetailCard country=country /> }
        })
    }
}

#[component]
fn DetailCard(country: Country) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = country.id();
    let is_favorite = Signal::derive({
        let id = id.clone();
        move || ctx.state.with(|s| s.is_favorite(&id))
    });

    let close = move |_: ev::MouseEvent| ctx.dispatch(Action::CloseDetail);
    let toggle_favorite = move |_: ev::MouseEvent| {
        ctx.dispatch(Action::ToggleFavorite(id.clone()));
    };

    let official = (!country.name.official.is_empty()
        && country.name.official != country.name.common)
        .then(|| country.name.official.clone());

    view! {
        <div class=css::backdrop on:click=close>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                aria-label=format!("{} details", country.name.common)
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <header class=css::header>
                    <img
                        class=css::flag
                        src=country.flag_image_url().to_string()
                        alt=country.flag_alt()
                    />
                    <div class=css::names>
                        <h3 class=css::common>{country.name.common.clone()}</h3>
                        {official.map(|name| view! { <p class=css::official>{name}</p> })}
                    </div>
                    <div class=css::actions>
                        <button
                            class=move || {
                                if is_favorite.get() {
                                    format!("{} {}", css::favButton, css::favOn)
                                } else {
                                    css::favButton.to_string()
                                }
                            }
                            on:click=toggle_favorite
                            aria-pressed=move || is_favorite.get().to_string()
                        >
                            {move || {
                                if is_favorite.get() {
                                    view! { <Icon icon=ic::STAR_FILL /> }
                                } else {
                                    view! { <Icon icon=ic::STAR /> }
                                }
                            }}
                            <span>
                                {move || {
                                    if is_favorite.get() {
                                        "Favorited"
                                    } else {
                                        "Add to favorites"
                                    }
                                }}
                            </span>
                        </button>
                        <button
                            class=css::closeButton
                            on:click=close
                            title="Close"
                            aria-label="Close details"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </header>

                <dl class=css::facts>
                    <Fact label="Capital" value=country.capital_label() />
                    <Fact label="Region" value=country.region_label() />
                    <Fact label="Population" value=format_population(country.population) />
                    <Fact label="Area" value=format_area(country.area) />
                    <Fact label="Languages" value=country.languages_label() />
                    <Fact label="Currencies" value=country.currencies_label() />
                    <Fact label="Timezones" value=join_or(&country.timezones, "-") />
                    <Fact label="Borders" value=country.borders_label() />
                </dl>
            </div>
        </div>
    }
}

#[component]
fn Fact(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class=css::fact>
            <dt class=css::factLabel>{label}</dt>
            <dd class=css::factValue>{value}</dd>
        </div>
    }
}
