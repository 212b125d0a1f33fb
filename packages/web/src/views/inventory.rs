use dioxus::prelude::*;
use ui::views::InventoryView;

#[component]
pub fn Inventory() -> Element {
    rsx! {
        InventoryView {}
    }
}
