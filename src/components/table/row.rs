//! A single country row.

use country_core::{Action, Country};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::format_population;

#[component]
pub fn CountryRow(country: Country) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = country.id();
    let id_for_fav = id.clone();
    let id_for_sel = id.clone();
    let id_for_click = id.clone();
    let id_for_key = id.clone();

    let is_favorite = Signal::derive(move || ctx.state.with(|s| s.is_favorite(&id_for_fav)));
    let is_selected =
        Signal::derive(move || ctx.state.with(|s| s.selected_id() == Some(&id_for_sel)));

    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(Action::Select(id_for_click.clone()));
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ctx.dispatch(Action::Select(id_for_key.clone()));
        }
    };

    // Star click must not also open the detail view
    let handle_star = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.dispatch(Action::ToggleFavorite(id.clone()));
    };

    // Enter on the focused star is the button's own click; keep it off the row
    let handle_star_key = move |ev: leptos::ev::KeyboardEvent| ev.stop_propagation();

    let row_class = move || {
        if is_selected.get() {
            format!("{} {}", css::row, css::selected)
        } else {
            css::row.to_string()
        }
    };

    let name = country.name.common.clone();
    let aria_label = format!("Country: {}", name);
    let star_label = Signal::derive({
        let name = name.clone();
        move || {
            if is_favorite.get() {
                format!("Remove {} from favorites", name)
            } else {
                format!("Add {} to favorites", name)
            }
        }
    });

    view! {
        <div
            class=row_class
            role="row"
            tabindex="0"
            aria-label=aria_label
            aria-selected=move || is_selected.get().to_string()
            on:click=handle_click
            on:keydown=handle_keydown
        >
            <span class=css::flagCell>
                <img
                    class=css::flag
                    src=country.flag_image_url().to_string()
                    alt=country.flag_alt()
                    loading="lazy"
                />
            </span>
            <span class=css::nameCell>{name}</span>
            <span class=css::cell>{country.currencies_label()}</span>
            <span class=css::cell>{country.languages_label()}</span>
            <span class=format!("{} {}", css::cell, css::numeric)>
                {format_population(country.population)}
            </span>
            <span class=css::starCell>
                <button
                    class=move || {
                        if is_favorite.get() {
                            format!("{} {}", css::star, css::starOn)
                        } else {
                            css::star.to_string()
                        }
                    }
                    on:click=handle_star
                    on:keydown=handle_star_key
                    title=move || star_label.get()
                    aria-label=move || star_label.get()
                    aria-pressed=move || is_favorite.get().to_string()
                >
                    {move || {
                        if is_favorite.get() {
                            view! { <Icon icon=ic::STAR_FILL /> }
                        } else {
                            view! { <Icon icon=ic::STAR /> }
                        }
                    }}
                </button>
            </span>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use country_core::CountryName;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn france() -> Country {
        Country {
            name: CountryName {
                common: "France".to_string(),
                official: "French Republic".to_string(),
            },
            cca3: "FRA".to_string(),
            ..Default::default()
        }
    }

    fn press_enter(target: &web_sys::Element) {
        let init = KeyboardEventInit::new();
        init.set_key("Enter");
        init.set_bubbles(true);
        let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        target.dispatch_event(&ev).unwrap();
    }

    fn mount_row(ctx: AppContext) -> HtmlElement {
        let document = document();
        let parent = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<HtmlElement>();
        document.body().unwrap().append_child(&parent).unwrap();
        mount_to(parent.clone(), move || {
            provide_context(ctx);
            view! { <CountryRow country=france() /> }
        })
        .forget();
        parent
    }

    #[wasm_bindgen_test]
    fn test_enter_on_star_does_not_select_row() {
        let ctx = AppContext::new();
        let parent = mount_row(ctx);

        let star = parent.query_selector("button").unwrap().unwrap();
        press_enter(&star);
        assert!(ctx.state.with_untracked(|s| s.selected_id().is_none()));

        let row = parent.query_selector("[role=row]").unwrap().unwrap();
        press_enter(&row);
        assert_eq!(
            ctx.state.with_untracked(|s| s.selected_id().map(|id| id.as_str().to_string())),
            Some("FRA".to_string())
        );
        parent.remove();
    }
}
