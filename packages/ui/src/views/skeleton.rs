use dioxus::prelude::*;

/// Shimmering placeholder block.
#[component]
pub fn Skeleton(#[props(default)] class: String) -> Element {
    rsx! {
        div {
            class: "skeleton {class}",
            div { class: "skeleton-shimmer" }
        }
    }
}

/// Six placeholder cards shown while a grid loads.
#[component]
pub fn SkeletonGrid() -> Element {
    rsx! {
        div {
            class: "card-grid",
            for i in 0..6 {
                div {
                    key: "{i}",
                    class: "card card-skeleton",
                    Skeleton { class: "skeleton-title" }
                    Skeleton { class: "skeleton-line" }
                    Skeleton { class: "skeleton-line skeleton-short" }
                    Skeleton { class: "skeleton-caption" }
                }
            }
        }
    }
}
