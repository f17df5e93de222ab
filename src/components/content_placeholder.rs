use dioxus::prelude::*;

/// Hatched area standing in for a chart. `pattern_id` must be unique in the page.
#[component]
pub fn ContentPlaceholder(#[props(into)] pattern_id: String) -> Element {
    let fill = format!("url(#{})", pattern_id);

    rsx! {
        div {
            "data-placeholder": "true",
            class: "relative h-full overflow-hidden rounded bg-gray-50 dark:bg-gray-800",
            svg {
                class: "absolute inset-0 h-full w-full stroke-gray-200 dark:stroke-gray-700",
                "fill": "none",
                defs {
                    pattern {
                        id: "{pattern_id}",
                        "x": "0",
                        "y": "0",
                        "width": "10",
                        "height": "10",
                        "patternUnits": "userSpaceOnUse",
                        path { "d": "M-3 13 15-5M-5 5l18-18M-1 21 17 3" }
                    }
                }
                rect {
                    "stroke": "none",
                    "fill": "{fill}",
                    "width": "100%",
                    "height": "100%",
                }
            }
        }
    }
}
