//! Root component and the page-wide context provider.

use chatbot::{AppContext, SessionConfig};
use leptos::prelude::*;

use crate::components::support_chat::Chatbot;

/// Provides an `RwSignal<AppContext>` to every descendant.
///
/// The config half is fixed for the page lifetime; the session flags are
/// changed through `AppContext::session` setters via `update`.
#[component]
pub fn AppContextProvider(config: SessionConfig, children: Children) -> impl IntoView {
    leptos::logging::log!("chat backend url: {}", config.backend_url());
    provide_context(RwSignal::new(AppContext::new(config)));
    children()
}

/// Root application component.
///
/// The backend base URL is baked in at build time from `CHATBOT_BACKEND_URL`;
/// without it the widget talks to the page origin.
#[component]
pub fn App() -> impl IntoView {
    let config = SessionConfig::from_value_or_origin(option_env!("CHATBOT_BACKEND_URL"));

    view! {
        <AppContextProvider config=config>
            <Chatbot/>
        </AppContextProvider>
    }
}
