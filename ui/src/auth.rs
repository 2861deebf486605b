//! Authentication context and hooks for the UI.

use std::sync::Arc;

use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;
use store::SharedStore;

/// Authentication state for the application.
///
/// Token presence is the whole story: a stored session means logged in,
/// nothing else is tracked client-side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<store::Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Platform session store: browser `localStorage` on the web, an
/// in-memory slot elsewhere.
fn make_store() -> SharedStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::BrowserStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that owns the API client and authentication state.
/// Wrap the app with this component; the stored session (if any) is
/// picked up on mount, so a login survives page reloads.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_hook(|| ApiClient::new(ApiConfig::default(), make_store()));
    let initial = client.session();
    let auth_state = use_signal(move || AuthState { session: initial });

    use_context_provider(move || client.clone());
    use_context_provider(move || auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let api = use_api();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        api.logout();
        auth_state.set(AuthState::default());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
