use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::FaUser;
use crate::{Icon, UI_CSS};

/// Top navigation bar: brand, caller-provided links, auth status.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        header {
            class: "navbar",
            a {
                class: "navbar-brand",
                href: "/",
                "Inkwell"
            }
            nav {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-auth",
                if auth().is_authenticated() {
                    span {
                        class: "navbar-user",
                        title: "Signed in",
                        Icon { icon: FaUser, width: 14, height: 14 }
                        " Signed in"
                    }
                    LogoutButton { class: "btn btn-secondary" }
                } else {
                    a {
                        class: "btn btn-primary",
                        href: "/login",
                        "Log in"
                    }
                }
            }
        }
    }
}
