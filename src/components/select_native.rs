use dioxus::prelude::*;
use crate::utils::cx;

const BASE_CLASS: &str =
    "peer w-full cursor-pointer appearance-none truncate rounded-md border px-2.5 py-2 shadow-sm outline-none transition-all sm:text-sm bg-white border-gray-300 text-gray-900 focus:ring-2 focus:ring-blue-200 focus:border-blue-500 dark:bg-gray-950 dark:border-gray-800 dark:text-gray-50 dark:focus:ring-blue-700/30 dark:focus:border-blue-700";

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Browser-native `select`. Reports the chosen option value.
#[component]
pub fn SelectNative(
    #[props(into)] value: String,
    options: Vec<SelectOption>,
    onchange: EventHandler<String>,
    #[props(default, into)] class: String
) -> Element {
    rsx! {
        select {
            class: cx(&[BASE_CLASS, class.as_str()]),
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            for opt in options.iter() {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == value,
                    "{opt.label}"
                }
            }
        }
    }
}
