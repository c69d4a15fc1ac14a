use dioxus::prelude::*;

use trainer_domain as domain;

use super::element::{Icon, IconText};

#[component]
pub fn WorkoutSummary(plan: domain::WorkoutPlan) -> Element {
    rsx! {
        div {
            class: "box mb-5",
            h2 {
                class: "title is-4",
                IconText { icon: "clipboard-list", text: "{plan.title()}" }
            }
            if let Some(summary) = plan.summary() {
                p { class: "block", "{summary}" }
            }
            div {
                class: "field is-grouped is-grouped-multiline",
                Stat { icon: "clock", text: "{plan.estimated_time()}" }
                Stat { icon: "signal", text: "{plan.difficulty()}" }
                Stat { icon: "list-ol", text: "{plan.exercise_count()} exercises" }
            }
            if plan.has_warmup_or_cooldown() {
                div {
                    class: "columns mt-3",
                    if let Some(warmup) = plan.warmup() {
                        div {
                            class: "column",
                            div {
                                class: "notification is-warning is-light",
                                p {
                                    class: "has-text-weight-bold mb-1",
                                    IconText { icon: "fire", text: "Warm-up" }
                                }
                                p { "{warmup}" }
                            }
                        }
                    }
                    if let Some(cooldown) = plan.cooldown() {
                        div {
                            class: "column",
                            div {
                                class: "notification is-info is-light",
                                p {
                                    class: "has-text-weight-bold mb-1",
                                    IconText { icon: "snowflake", text: "Cool-down" }
                                }
                                p { "{cooldown}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Stat(icon: String, text: String) -> Element {
    rsx! {
        div {
            class: "control",
            span {
                class: "tag is-medium is-primary is-light",
                Icon { name: icon, is_small: true }
                span { "{text}" }
            }
        }
    }
}
