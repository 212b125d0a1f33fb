//! Session context and actions for the UI.

use api::session::{self, AuthAction, SessionState};
use dioxus::prelude::*;

use crate::services::use_services;
use crate::icons::FaRightFromBracket;
use crate::Icon;

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Must sit inside a `ServicesProvider`.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let services = use_services();
    let state = use_signal(move || {
        let backend = &services.backend;
        let mut state = SessionState::default();
        state.restore(backend.storage(), backend.session_key());
        state
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Log in and persist the session on success.
pub async fn login(mut state: Signal<SessionState>, email: String, password: String) {
    let backend = current_backend();
    state.write().begin();
    let outcome = session::login(&backend, &email, &password).await;
    state.write().finish(
        AuthAction::Login,
        outcome,
        backend.storage(),
        backend.session_key(),
    );
}

/// Register, then sign in as the new account.
pub async fn register(
    mut state: Signal<SessionState>,
    username: String,
    email: String,
    password: String,
) {
    let backend = current_backend();
    state.write().begin();
    let outcome = session::register(&backend, &username, &email, &password).await;
    state.write().finish(
        AuthAction::Register,
        outcome,
        backend.storage(),
        backend.session_key(),
    );
}

pub fn logout(mut state: Signal<SessionState>) {
    let backend = current_backend();
    state
        .write()
        .logout(backend.storage(), backend.session_key());
}

fn current_backend() -> crate::services::Backend {
    consume_context::<crate::services::Services>().backend
}

/// Button that ends the session and then calls `on_logout`.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let state = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                logout(state);
                on_logout.call(());
            },
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
