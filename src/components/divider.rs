use dioxus::prelude::*;

#[component]
pub fn Divider() -> Element {
    rsx! {
        div {
            role: "separator",
            class: "mx-auto my-6 flex w-full justify-between gap-3 text-sm text-gray-500 dark:text-gray-500",
            div { class: "h-[1px] w-full bg-gray-200 dark:bg-gray-800" }
        }
    }
}
