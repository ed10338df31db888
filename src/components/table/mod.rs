//! Country table components.
//!
//! Columns: Flag, Name, Currencies, Languages, Population, and a favorite
//! star. Every column except Flag sorts on header click and has a filter
//! box under its label. Rows are paged, `PAGE_SIZE` at a time.

mod row;

use country_core::{Action, LoadState, PAGE_SIZE, SortColumn, SortDirection, SortKey};
use leptos::prelude::*;
use leptos_icons::Icon;

use self::row::CountryRow;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::format_page_range;

stylance::import_crate_style!(css, "src/components/table/table.module.css");

#[component]
pub fn CountryTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let rows = Memo::new(move |_| ctx.state.with(|s| s.page_rows()));
    let sort = Memo::new(move |_| ctx.state.with(|s| s.sort()));
    let is_empty = Signal::derive(move || rows.with(|r| r.is_empty()));
    let is_loaded =
        Signal::derive(move || ctx.state.with(|s| *s.load_state() == LoadState::Loaded));

    view! {
        <div class=css::table role="grid" aria-label="Countries">
            <div class=css::headerRow role="row">
                <span class=css::flagCell role="columnheader">"Flag"</span>
                {SortColumn::ALL
                    .into_iter()
                    .map(|column| view! { <SortHeader column=column sort=sort /> })
                    .collect_view()}
                <span class=css::starCell role="columnheader" aria-label="Favorite"></span>
            </div>
            <For
                each=move || rows.get()
                key=|country| country.id()
                children=move |country| {
                    view! { <CountryRow country=country /> }
                }
            />
            <Show when=move || is_empty.get() && is_loaded.get()>
                <p class=css::empty>"No countries match your search."</p>
            </Show>
            <Pager />
        </div>
    }
}

/// Previous/next page controls under the table.
#[component]
fn Pager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let page = Memo::new(move |_| ctx.state.with(|s| s.page()));
    let page_count = Memo::new(move |_| ctx.state.with(|s| s.page_count()));
    let range = Signal::derive(move || {
        ctx.state.with(|s| format_page_range(s.page(), PAGE_SIZE, s.rows().len()))
    });

    let at_first = move || page.get() == 0;
    let at_last = move || page.get() + 1 >= page_count.get();

    let prev = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(Action::SetPage(page.get_untracked().saturating_sub(1)));
    };
    let next = move |_: leptos::ev::MouseEvent| {
        ctx.dispatch(Action::SetPage(page.get_untracked() + 1));
    };

    view! {
        <nav class=css::pager aria-label="Pages">
            <button
                class=css::pageButton
                disabled=at_first
                on:click=prev
            >
                "Previous"
            </button>
            <span class=css::pageInfo>
                {move || format!("Page {} of {}", page.get() + 1, page_count.get())}
            </span>
            <span class=css::pageRange>{move || range.get()}</span>
            <button
                class=css::pageButton
                disabled=at_last
                on:click=next
            >
                "Next"
            </button>
        </nav>
    }
}

/// Column header: sort button showing the current direction, and the
/// column's filter box.
#[component]
fn SortHeader(column: SortColumn, sort: Memo<Option<SortKey>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let filter_value =
        Signal::derive(move || ctx.state.with(|s| s.column_filters().get(column).to_string()));

    let direction = Signal::derive(move || {
        sort.get()
            .filter(|key| key.column == column)
            .map(|key| key.direction)
    });

    let aria_sort = move || match direction.get() {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    };

    let cell_class = if column.is_numeric() {
        format!("{} {}", css::headerCell, css::numeric)
    } else {
        css::headerCell.to_string()
    };

    let on_filter = move |ev: leptos::ev::Event| {
        ctx.dispatch(Action::SetColumnFilter(column, event_target_value(&ev)));
    };

    view! {
        <div class=css::headerWrap role="columnheader" aria-sort=aria_sort>
            <button class=cell_class on:click=move |_| ctx.dispatch(Action::SortBy(column))>
                <span>{column.label()}</span>
                <span class=css::sortIcon aria-hidden="true">
                    {move || {
                        let icon = match direction.get() {
                            Some(SortDirection::Ascending) => ic::SORT_ASC,
                            Some(SortDirection::Descending) => ic::SORT_DESC,
                            None => ic::UNSORTED,
                        };
                        view! { <Icon icon=icon /> }
                    }}
                </span>
            </button>
            <input
                class=css::columnFilter
                type="search"
                placeholder="Filter"
                aria-label=format!("Filter by {}", column.label())
                prop:value=move || filter_value.get()
                on:input=on_filter
            />
        </div>
    }
}
