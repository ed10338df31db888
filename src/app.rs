//! Root application module.
//!
//! Contains the main App component, the AppContext that owns the explorer
//! state, and the startup load.

use country_core::{Action, ExplorerState, source};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CountryTable, DetailModal, FavoritesPanel, Header, LoadStatus, SearchBar};
use crate::utils::{RestCountries, log};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and reached from any child
/// with `use_context::<AppContext>()`. All state sits in one signal and
/// changes only through [`AppContext::dispatch`], so mutations never
/// interleave.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Explorer state (records, query, favorites, selection).
    pub state: RwSignal<ExplorerState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ExplorerState::new()),
        }
    }

    /// Apply one action to the explorer state.
    pub fn dispatch(&self, action: Action) {
        self.state.update(|s| s.apply(action));
    }

    /// Start the one-shot dataset fetch.
    ///
    /// Failures are logged and leave the table empty; there is no retry.
    pub fn load_countries(&self) {
        let ctx = *self;
        ctx.dispatch(Action::LoadStarted);

        spawn_local(async move {
            let action = source::load(&RestCountries::default()).await;
            match &action {
                Action::Loaded(countries) if countries.is_empty() => {
                    log::warn("Country provider returned an empty list");
                }
                Action::Loaded(countries) => {
                    log::info(&format!("Loaded {} countries", countries.len()));
                }
                Action::LoadFailed(msg) => {
                    log::error(&format!("Error fetching countries: {}", msg));
                }
                _ => {}
            }
            ctx.dispatch(action);
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the AppContext
/// - Kicks off the startup fetch
/// - Lays out header, search, table, favorites panel, and detail modal
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.load_countries();

    let favorites_open = Signal::derive(move || ctx.state.with(|s| s.favorites_view_open()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::crash>
                    <h1 class=css::crashTitle>"Something went wrong"</h1>
                    <p class=css::crashText>
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul class=css::crashErrors>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class=css::reload
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=css::page>
                <Header />
                <SearchBar />
                <LoadStatus />
                <div class=css::body>
                    <main class=css::tablePane>
                        <CountryTable />
                    </main>
                    <Show when=move || favorites_open.get()>
                        <FavoritesPanel />
                    </Show>
                </div>
                <DetailModal />
            </div>
        </ErrorBoundary>
    }
}
