use dioxus::prelude::*;
use strum::Display;

#[allow(dead_code)]
#[derive(Display, Clone, Copy, PartialEq)]
pub enum Color {
    #[strum(to_string = "text")]
    Text,
    #[strum(to_string = "link")]
    Link,
    #[strum(to_string = "primary")]
    Primary,
    #[strum(to_string = "info")]
    Info,
    #[strum(to_string = "success")]
    Success,
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "danger")]
    Danger,
    #[strum(to_string = "dark")]
    Dark,
}

#[component]
pub fn DataBox(children: Element, title: String) -> Element {
    rsx! {
        div {
            class: "box has-text-centered mx-1 p-3",
            p {
                class: "is-size-7 has-text-grey",
                {title}
            }
            p {
                class: "is-size-5 has-text-weight-bold",
                {children}
            }
        }
    }
}

#[component]
pub fn Message(children: Element, color: Color) -> Element {
    rsx! {
        div {
            class: "message my-1 is-{color}",
            div {
                class: "message-body p-2",
                {children}
            }
        }
    }
}

#[component]
pub fn Error(message: String) -> Element {
    rsx! {
        IconText { icon: "triangle-exclamation", text: message, color: Color::Danger }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "message is-danger mx-2",
            div {
                class: "message-body has-text-dark",
                div {
                    class: "title has-text-danger is-size-4",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn Icon(
    name: String,
    is_small: Option<bool>,
    px: Option<u8>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon",
            class: if is_small.unwrap_or_default() { "is-small" },
            class: if let Some(px) = px { "px-{px}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            i { class: "fas fa-{name}" }
        }
    }
}

#[component]
pub fn IconText(
    icon: String,
    text: String,
    color: Option<Color>,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        span {
            class: "icon-text",
            class: if let Some(color) = color { "has-text-{color}" },
            onclick: move |evt| {
                if let Some(event_handler) = onclick {
                    event_handler.call(evt);
                }
            },
            Icon { name: icon }
            span { {text} }
        }
    }
}

#[component]
pub fn ElementWithDescription(
    children: Element,
    description: String,
    right_aligned: Option<bool>,
) -> Element {
    rsx! {
        div {
            class: "dropdown is-hoverable",
            class: if right_aligned.unwrap_or_default() { "is-right" },
            div {
                class: "dropdown-trigger",
                div {
                    class: "control is-clickable",
                    {children}
                }
            }
            if !description.is_empty() {
                div {
                    class: "dropdown-menu has-no-min-width",
                    div {
                        class: "dropdown-content",
                        div {
                            class: "dropdown-item",
                            "{description}"
                        }
                    }
                }
            }
        }
    }
}

/// Selectable tag, highlighted while `selected`.
#[component]
pub fn Chip(
    text: String,
    selected: bool,
    is_disabled: Option<bool>,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let is_disabled = is_disabled.unwrap_or_default();
    rsx! {
        button {
            class: "tag is-medium is-rounded is-clickable-chip",
            class: if selected { "is-link" } else { "is-light" },
            r#type: "button",
            aria_pressed: selected,
            disabled: is_disabled,
            onclick: move |evt| {
                if !is_disabled {
                    onclick.call(evt);
                }
            },
            if selected {
                Icon { name: "check", is_small: true }
            }
            span { {text} }
        }
    }
}

#[component]
pub fn Dialog(
    children: Element,
    title: Option<Element>,
    close_event: EventHandler<MouseEvent>,
    color: Option<Color>,
) -> Element {
    let color = color.unwrap_or(Color::Primary);
    rsx! {
        div {
            class: "modal is-active",
            div {
                class: "modal-background",
                onclick: close_event
            }
            div {
                class: "modal-content",
                div {
                    class: "message is-{color} mx-2",
                    div {
                        class: "message-body has-text-text-bold has-background-scheme-main",
                        if let Some(title) = title {
                            div {
                                class: "title has-text-{color}",
                                {title}
                            }
                        }
                        {children}
                    }
                }
            }
            button {
                aria_label: "close",
                class: "modal-close",
                onclick: close_event,
            }
        }
    }
}
