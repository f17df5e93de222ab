use dioxus::prelude::*;
use crate::utils::cx;

const BASE_CLASS: &str =
    "relative w-full rounded-lg border text-left shadow-sm bg-white border-gray-200 dark:bg-[#090E1A] dark:border-gray-900";

/// Bordered container. `padded: false` drops the default `p-6`.
#[component]
pub fn Card(
    #[props(default = true)] padded: bool,
    #[props(default, into)] class: String,
    children: Element
) -> Element {
    rsx! {
        div {
            class: cx(&[BASE_CLASS, if padded { "p-6" } else { "p-0" }, class.as_str()]),
            {children}
        }
    }
}
