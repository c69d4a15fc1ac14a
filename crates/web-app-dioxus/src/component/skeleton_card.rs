use dioxus::prelude::*;

/// Placeholder with the outline of an exercise card, shown while a workout is generated.
#[component]
pub fn SkeletonCard() -> Element {
    rsx! {
        div {
            class: "card mb-5",
            aria_hidden: "true",
            div {
                class: "card-image",
                div { class: "skeleton-block skeleton-image mb-0" }
            }
            div {
                class: "card-content",
                div { class: "title is-5 is-skeleton", "Exercise name" }
                div {
                    class: "tags",
                    span { class: "tag is-skeleton", "Muscles" }
                    span { class: "tag is-skeleton", "Equipment" }
                }
                div {
                    class: "columns is-mobile",
                    for _ in 0..3 {
                        div {
                            class: "column",
                            div { class: "skeleton-block mb-0", style: "height: 4rem" }
                        }
                    }
                }
                div {
                    class: "skeleton-lines",
                    div {}
                    div {}
                }
            }
        }
    }
}
