use api::collection::{FormField, FormMode, RecordForm};
use dioxus::prelude::*;

const RECORD_FORM_CSS: Asset = asset!("/assets/styling/record_form.css");

#[component]
fn FormInput(field: FormField, value: String, on_change: EventHandler<(FormField, String)>) -> Element {
    let kind = if field.is_stat() { "number" } else { "text" };
    let required = matches!(field, FormField::Name | FormField::Types);
    let label = field.label();

    rsx! {
        div {
            class: "form-field",
            label { r#for: field.id(), "{label}" }
            input {
                id: field.id(),
                r#type: kind,
                min: if field.is_stat() { "0" },
                required,
                value,
                oninput: move |evt: FormEvent| on_change.call((field, evt.value())),
            }
        }
    }
}

/// Add/modify form for a collection record.
///
/// Keeps its own draft; `on_submit` receives the raw text and the parent
/// decides how to validate and save it.
#[component]
pub fn RecordFormDialog(
    mode: FormMode,
    initial: RecordForm,
    #[props(default)] error: Option<String>,
    #[props(default)] busy: bool,
    on_submit: EventHandler<RecordForm>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(move || initial);
    let set_field = move |(field, value): (FormField, String)| {
        *draft.write().field_mut(field) = value;
    };

    let description = FormField::Description;
    let description_label = description.label();
    let (title, action) = match &mode {
        FormMode::Add => ("Add New Pokemon".to_string(), "Add Pokemon"),
        FormMode::Modify { name } => (format!("Modify {name}"), "Save Changes"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: RECORD_FORM_CSS }
        form {
            class: "record-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(draft());
            },
            h2 { class: "record-form-title", "{title}" }

            if let Some(err) = error {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "record-form-fields",
                FormInput { field: FormField::Name, value: draft.read().name.clone(), on_change: set_field }
                for field in FormField::LISTS {
                    FormInput { key: "{field:?}", field, value: draft.read().field(field).to_string(), on_change: set_field }
                }

                fieldset {
                    legend { "Base Stats" }
                    div {
                        class: "record-form-grid",
                        for field in FormField::STATS {
                            FormInput { key: "{field:?}", field, value: draft.read().field(field).to_string(), on_change: set_field }
                        }
                    }
                }

                fieldset {
                    legend { "Evolution" }
                    div {
                        class: "record-form-grid",
                        for field in FormField::EVOLUTION {
                            FormInput { key: "{field:?}", field, value: draft.read().field(field).to_string(), on_change: set_field }
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: description.id(), "{description_label}" }
                    textarea {
                        id: description.id(),
                        rows: "3",
                        value: draft.read().description.clone(),
                        oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                    }
                }
            }

            div {
                class: "record-form-actions",
                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: busy,
                    if busy { "Saving..." } else { "{action}" }
                }
            }
        }
    }
}
