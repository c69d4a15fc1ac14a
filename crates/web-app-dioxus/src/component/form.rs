use dioxus::prelude::*;

use super::element::Icon;

#[component]
pub fn TextAreaField(
    label: String,
    placeholder: Option<String>,
    rows: Option<usize>,
    value: String,
    is_disabled: Option<bool>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                textarea {
                    class: "textarea",
                    disabled: if let Some(is_disabled) = is_disabled { is_disabled },
                    placeholder: if let Some(placeholder) = placeholder { placeholder },
                    rows: rows.unwrap_or(3),
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
        }
    }
}

/// Labelled group of chips, optionally with a hint on the right of the label.
#[component]
pub fn ChipField(children: Element, label: String, icon: String, hint: Option<String>) -> Element {
    rsx! {
        div {
            class: "field",
            label {
                class: "label",
                span {
                    class: "icon-text",
                    Icon { name: icon }
                    span { "{label}" }
                }
                if let Some(hint) = hint {
                    span { class: "has-text-weight-normal has-text-grey is-size-7 ml-2", "{hint}" }
                }
            }
            div {
                class: "tags",
                {children}
            }
        }
    }
}

#[component]
pub fn SubmitButton(text: String, icon: String, is_loading: bool) -> Element {
    rsx! {
        div {
            class: "field",
            div {
                class: "control",
                button {
                    class: "button is-primary is-fullwidth is-medium",
                    class: if is_loading { "is-loading" },
                    r#type: "submit",
                    disabled: is_loading,
                    Icon { name: icon }
                    span { "{text}" }
                }
            }
        }
    }
}
