use dioxus::prelude::*;

use trainer_domain as domain;
use trainer_web_app::log::Service;

use crate::{
    BACKEND_STATUS, Route, WEB_APP_SERVICE,
    component::element::{Color, Dialog, ElementWithDescription, Error, Icon, IconText, Message},
};

#[component]
pub fn Navbar() -> Element {
    let mut log_visible = use_signal(|| false);
    let navigator = use_navigator();
    let status = BACKEND_STATUS();

    let go_up_target = match use_route::<Route>() {
        Route::Planner {} => None,
        Route::NotFound { .. } => Some(Route::Planner {}),
    };

    rsx! {
        nav {
            class: "navbar is-primary has-shadow has-text-weight-bold mb-5",
            div {
                class: "container",
                div {
                    class: "navbar-brand is-flex-grow-1",
                    if let Some(go_up_target) = go_up_target {
                        a {
                            class: "navbar-item is-size-5",
                            Icon {
                                name: "chevron-left",
                                onclick: move |_| {
                                    navigator.push(go_up_target.clone());
                                },
                            }
                        }
                    }
                    div {
                        class: "navbar-item is-size-5",
                        Icon { name: "dumbbell", px: 2 }
                        "AI Personal Trainer"
                    }
                    div { class: "mx-auto" }
                    div {
                        class: "navbar-item is-size-5 mx-1",
                        ElementWithDescription {
                            description: "{status.description()}",
                            right_aligned: true,
                            BackendStatusIcon { status }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}

        footer {
            class: "has-text-centered is-size-7 has-text-grey mt-6",
            p {
                class: "block",
                "Workouts are generated by an AI model. Consult a professional before starting a new training program."
            }
            a {
                onclick: move |_| { *log_visible.write() = true },
                IconText { icon: "list", text: "Log" }
            }
        }

        if log_visible() {
            LogDialog {
                close_event: move |_| { *log_visible.write() = false },
            }
        }
    }
}

#[component]
fn BackendStatusIcon(status: domain::BackendStatus) -> Element {
    match status {
        domain::BackendStatus::Checking => rsx! {
            Icon { name: "spinner fa-pulse" }
        },
        domain::BackendStatus::Connected => rsx! {
            Icon { name: "plug-circle-check" }
        },
        domain::BackendStatus::Error => rsx! {
            span {
                class: "has-text-danger-light",
                Icon { name: "plug-circle-xmark" }
            }
        },
    }
}

#[component]
fn LogDialog(close_event: EventHandler<MouseEvent>) -> Element {
    let entries = WEB_APP_SERVICE.read().get_log_entries();
    rsx! {
        Dialog {
            title: rsx! { "Log" },
            close_event: move |evt| close_event.call(evt),
            match entries {
                Ok(entries) if entries.is_empty() => rsx! {
                    p { class: "has-text-grey", "No entries" }
                },
                Ok(entries) => rsx! {
                    for entry in entries {
                        Message {
                            color: match entry.level {
                                log::Level::Error => Color::Danger,
                                log::Level::Warn => Color::Warning,
                                log::Level::Info => Color::Primary,
                                log::Level::Debug => Color::Info,
                                log::Level::Trace => Color::Dark,
                            },
                            p { class: "is-size-7", {entry.time} }
                            p { "{entry.message}" }
                        }
                    }
                },
                Err(err) => rsx! {
                    Error { message: err.to_string() }
                },
            }
        }
    }
}
