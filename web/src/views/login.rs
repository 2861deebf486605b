//! Login page view.

use dioxus::prelude::*;
use ui::{use_auth, LoginForm, Navbar};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // If already logged in, go back to the feed
    if auth().is_authenticated() {
        nav.replace(Route::Home {});
    }

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
        }

        main {
            class: "page auth-page",

            h1 { "Log in" }
            p {
                class: "auth-subtitle",
                "Sign in to write posts and join the discussion."
            }

            LoginForm {
                on_success: move |_| {
                    nav.replace(Route::Home {});
                },
            }

            p {
                class: "auth-switch",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
