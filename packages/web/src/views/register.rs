//! Registration page view with username/email/password form.

use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Registration signs the new account in
    let state = session.read();
    if !state.is_loading() && state.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }
    let busy = state.is_busy();
    let error = state.error().map(str::to_string);
    drop(state);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let n = username().trim().to_string();
        let e = email().trim().to_string();
        let p = password();
        spawn(async move {
            ui::session::register(session, n, e, p).await;
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Start your Pokémon collection" }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    if let Some(err) = error {
                        div { class: "auth-error", "{err}" }
                    }

                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        required: true,
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
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
                        if busy { "Creating account..." } else { "Register" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
