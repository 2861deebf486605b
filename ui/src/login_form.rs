use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, AuthState};

/// Username/password form. A successful login persists the token pair
/// and flips the auth state; a failed one shows the server's message and
/// leaves the state unauthenticated.
#[component]
pub fn LoginForm(on_success: EventHandler<()>) -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let user = username().trim().to_string();
            let pass = password();
            if user.is_empty() || pass.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            loading.set(true);
            match api.login(&user, &pass).await {
                Ok(_) => {
                    auth.set(AuthState {
                        session: api.session(),
                    });
                    username.set(String::new());
                    password.set(String::new());
                    loading.set(false);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    loading.set(false);
                    error.set(Some(format!("Login failed: {e}")));
                }
            }
        });
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div {
                    class: "form-error",
                    "{err}"
                }
            }

            div {
                class: "form-field",
                label { r#for: "login-username", "Username" }
                input {
                    id: "login-username",
                    r#type: "text",
                    placeholder: "Username",
                    required: true,
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Logging in..." } else { "Log in" }
            }
        }
    }
}
