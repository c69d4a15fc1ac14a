use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::warn;

use trainer_domain::{self as domain, Property, WorkoutService};
use trainer_web_app as web_app;

use crate::{
    BACKEND_STATUS, DOMAIN_SERVICE,
    component::{
        element::{Chip, Icon, IconText},
        exercise_card::ExerciseCard,
        form::{ChipField, SubmitButton, TextAreaField},
        skeleton_card::SkeletonCard,
        workout_summary::WorkoutSummary,
    },
};

const RESULTS_ID: &str = "results";
const SCROLL_DELAY_MS: u32 = 100;
const SKELETON_CARDS: usize = 3;
const EXAMPLE_QUERIES: [&str; 5] = [
    "Leg day with dumbbells",
    "Upper body strength for beginners",
    "Full body workout with body weight only",
    "Core and abs in 20 minutes",
    "Chest and triceps with a barbell",
];

#[component]
pub fn Planner() -> Element {
    let mut planner = use_signal(domain::Planner::default);

    let submit = move |event: FormEvent| {
        event.prevent_default();
        let query = planner.write().begin_submit(BACKEND_STATUS());
        let Some(query) = query else {
            return;
        };
        spawn(async move {
            let result = DOMAIN_SERVICE.read().generate_workout(&query).await;
            let has_results = result
                .as_ref()
                .is_ok_and(domain::Workout::has_exercises);
            planner.write().finish_submit(result);
            if has_results {
                TimeoutFuture::new(SCROLL_DELAY_MS).await;
                if let Err(err) = web_app::scroll::scroll_into_view(RESULTS_ID) {
                    warn!("failed to scroll to results: {err}");
                }
            }
        });
    };

    let is_loading = planner.read().is_loading();
    let input = planner.read().input.clone();
    let filter = planner.read().filter.clone();
    let submit_text = if is_loading {
        "Generating..."
    } else {
        "Generate Workout"
    };

    rsx! {
        form {
            class: "box mb-5",
            onsubmit: submit,
            TextAreaField {
                label: "What do you want to train today?",
                placeholder: "e.g. A 30 minute leg workout with dumbbells, focusing on glutes",
                value: input,
                is_disabled: is_loading,
                oninput: move |event: FormEvent| {
                    planner.write().input = event.value();
                },
            }
            ChipField {
                label: "Difficulty",
                icon: "signal",
                hint: "optional",
                for (difficulty, selected) in filter.difficulty_list() {
                    Chip {
                        key: "{difficulty.name()}",
                        text: "{difficulty.name()}",
                        selected,
                        is_disabled: is_loading,
                        onclick: move |_| planner.write().filter.select_difficulty(difficulty),
                    }
                }
            }
            ChipField {
                label: "Equipment",
                icon: "toolbox",
                hint: "optional, select all that are available",
                for (equipment, selected) in filter.equipment_list() {
                    Chip {
                        key: "{equipment.name()}",
                        text: "{equipment.name()}",
                        selected,
                        is_disabled: is_loading,
                        onclick: move |_| planner.write().filter.toggle_equipment(equipment),
                    }
                }
            }
            SubmitButton {
                text: "{submit_text}",
                icon: "wand-magic-sparkles",
                is_loading,
            }
        }

        match planner.read().view() {
            domain::View::Loading => rsx! {
                LoadingView {}
            },
            domain::View::Error(message) => rsx! {
                ErrorView {
                    message: message.to_string(),
                    dismiss_event: move |_| planner.write().dismiss_error(),
                }
            },
            domain::View::Results(workout) => rsx! {
                ResultsView { workout: workout.clone() }
            },
            domain::View::Empty => rsx! {
                EmptyView {
                    select_event: move |example: String| {
                        planner.write().input = example;
                    },
                }
            },
        }
    }
}

#[component]
fn LoadingView() -> Element {
    rsx! {
        div {
            class: "block has-text-centered my-5",
            p {
                class: "is-size-5 has-text-primary",
                Icon { name: "spinner fa-pulse" }
            }
            p { class: "has-text-grey", "Generating your personalized workout..." }
        }
        for _ in 0..SKELETON_CARDS {
            SkeletonCard {}
        }
    }
}

#[component]
fn ErrorView(message: String, dismiss_event: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "message is-danger",
            role: "alert",
            div {
                class: "message-header",
                IconText { icon: "triangle-exclamation", text: "Something went wrong" }
                button {
                    class: "delete",
                    aria_label: "dismiss",
                    r#type: "button",
                    onclick: move |evt| dismiss_event.call(evt),
                }
            }
            div {
                class: "message-body",
                p { class: "block", "{message}" }
                button {
                    class: "button is-danger is-light",
                    r#type: "button",
                    onclick: move |evt| dismiss_event.call(evt),
                    "Dismiss"
                }
            }
        }
    }
}

#[component]
fn ResultsView(workout: domain::Workout) -> Element {
    rsx! {
        section {
            id: RESULTS_ID,
            WorkoutSummary { plan: workout.plan.clone() }
            for (idx, exercise) in workout.displayed_exercises().iter().enumerate() {
                ExerciseCard {
                    key: "{idx}-{exercise.id}",
                    exercise: exercise.clone(),
                    number: idx + 1,
                }
            }
        }
    }
}

#[component]
fn EmptyView(select_event: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "box has-text-centered py-6",
            p {
                class: "is-size-1 has-text-primary",
                Icon { name: "person-running" }
            }
            h2 { class: "title is-4", "Ready to train?" }
            p {
                class: "block has-text-grey",
                "Describe the workout you want and your AI personal trainer will put together a plan with exercises, sets, reps and rest times."
            }
            p { class: "block is-size-7 has-text-grey", "Try one of these:" }
            div {
                class: "buttons is-centered",
                for example in EXAMPLE_QUERIES {
                    button {
                        key: "{example}",
                        class: "button is-small is-rounded is-link is-light",
                        r#type: "button",
                        onclick: move |_| select_event.call(example.to_string()),
                        "{example}"
                    }
                }
            }
        }
    }
}
