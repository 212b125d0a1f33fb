//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Already signed in (restored or just logged in)
    let state = session.read();
    if !state.is_loading() && state.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }
    let busy = state.is_busy();
    let error = state.error().map(str::to_string);
    drop(state);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let e = email().trim().to_string();
        let p = password();
        spawn(async move {
            ui::session::login(session, e, p).await;
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "PokéDex" }
                p { class: "auth-subtitle", "Sign in to manage your collection" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error {
                        div { class: "auth-error", "{err}" }
                    }

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: busy,
                        if busy { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
