use dioxus::prelude::*;

const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");

/// A full-screen backdrop that centers its children in a card.
/// Clicking the backdrop triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    /// Use the wide card (detail views) instead of the form-sized one.
    #[props(default)]
    wide: bool,
    children: Element,
) -> Element {
    let card_class = if wide { "modal-card modal-card-wide" } else { "modal-card" };

    rsx! {
        document::Link { rel: "stylesheet", href: MODAL_CSS }
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "{card_class}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
