use dioxus::prelude::*;

use trainer_domain as domain;

use super::element::{Color, DataBox, Icon, IconText, Message};

#[component]
pub fn ExerciseCard(exercise: domain::Exercise, number: usize) -> Element {
    let mut show_instructions = use_signal(|| false);
    let mut image_failed = use_signal(|| false);
    let chevron = if show_instructions() {
        "chevron-up"
    } else {
        "chevron-down"
    };

    rsx! {
        div {
            class: "card mb-5",
            div {
                class: "card-image",
                if let Some(url) = exercise.image_url() {
                    if !image_failed() {
                        figure {
                            class: "image",
                            img {
                                class: "exercise-image",
                                src: "{url}",
                                alt: "{exercise.name}",
                                onerror: move |_| { *image_failed.write() = true },
                            }
                        }
                    }
                } else {
                    div {
                        class: "exercise-placeholder has-background-light has-text-grey-light is-size-1",
                        Icon { name: "dumbbell" }
                    }
                }
            }
            div {
                class: "card-content",
                div {
                    class: "level is-mobile mb-3",
                    div {
                        class: "level-left",
                        p {
                            class: "title is-5",
                            span { class: "has-text-grey mr-2", "{number}." }
                            "{exercise.name}"
                        }
                    }
                    if let Some(level) = exercise.level() {
                        div {
                            class: "level-right",
                            span { class: "tag is-{level_color(level)} is-light is-capitalized", "{level}" }
                        }
                    }
                }
                if let Some(url) = exercise.youtube_search_url() {
                    div {
                        class: "block",
                        a {
                            class: "button is-small is-danger is-light",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { name: "play", is_small: true }
                            span { "Watch video" }
                        }
                    }
                }
                div {
                    class: "tags",
                    span {
                        class: "tag is-primary is-light",
                        Icon { name: "bullseye", is_small: true }
                        span { "{exercise.primary_muscles()}" }
                    }
                    if let Some(muscles) = exercise.secondary_muscles() {
                        span { class: "tag is-light", "{muscles}" }
                    }
                    if let Some(equipment) = exercise.equipment() {
                        span {
                            class: "tag is-info is-light",
                            Icon { name: "toolbox", is_small: true }
                            span { "{equipment}" }
                        }
                    }
                }
                div {
                    class: "columns is-mobile is-gapless",
                    div { class: "column", DataBox { title: "Sets", "{exercise.sets()}" } }
                    div { class: "column", DataBox { title: "Reps", "{exercise.reps()}" } }
                    div { class: "column", DataBox { title: "Rest", "{exercise.rest_seconds()}s" } }
                }
                if let Some(notes) = exercise.trainer_notes() {
                    Message {
                        color: Color::Info,
                        IconText { icon: "lightbulb", text: "Trainer tip" }
                        p { "{notes}" }
                    }
                }
                if exercise.has_instructions() {
                    div {
                        class: "block mt-3",
                        button {
                            class: "button is-small is-text",
                            r#type: "button",
                            aria_expanded: show_instructions(),
                            onclick: move |_| { *show_instructions.write() = !show_instructions() },
                            Icon { name: "{chevron}", is_small: true }
                            span {
                                if show_instructions() { "Hide instructions" } else { "Show instructions" }
                            }
                        }
                        if show_instructions() {
                            div {
                                class: "content mt-3",
                                ol {
                                    class: "instructions",
                                    for step in &exercise.instructions {
                                        li { "{step}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn level_color(level: &str) -> Color {
    match level.trim().to_lowercase().as_str() {
        "beginner" => Color::Success,
        "intermediate" => Color::Warning,
        "expert" | "advanced" => Color::Danger,
        _ => Color::Info,
    }
}
