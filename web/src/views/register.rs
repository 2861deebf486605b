//! Registration page view.

use api::NewUser;
use dioxus::prelude::*;
use ui::{use_api, use_auth, Navbar};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Logged-in users have nothing to register
    if auth().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let user = NewUser {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
            };
            if let Err(msg) = user.validate() {
                error.set(Some(msg.to_string()));
                return;
            }

            loading.set(true);
            match api.register(&user).await {
                Ok(_) => {
                    loading.set(false);
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::error!("registration failed: {e}");
                    loading.set(false);
                    error.set(Some(format!("Registration failed: {e}")));
                }
            }
        });
    };

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
        }

        main {
            class: "page auth-page",

            h1 { "Create account" }

            form {
                class: "register-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div {
                        class: "form-error",
                        "{err}"
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "reg-username", "Username" }
                    input {
                        id: "reg-username",
                        r#type: "text",
                        required: true,
                        value: username(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "reg-email", "Email" }
                    input {
                        id: "reg-email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "reg-password", "Password" }
                    input {
                        id: "reg-password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { r#for: "reg-first-name", "First name" }
                        input {
                            id: "reg-first-name",
                            r#type: "text",
                            value: first_name(),
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "reg-last-name", "Last name" }
                        input {
                            id: "reg-last-name",
                            r#type: "text",
                            value: last_name(),
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
