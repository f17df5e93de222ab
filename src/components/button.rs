use dioxus::prelude::*;
use crate::utils::cx;

const BASE_CLASS: &str =
    "relative inline-flex items-center justify-center whitespace-nowrap rounded-md border px-3 py-2 text-center text-sm font-medium shadow-sm transition-all duration-100 ease-in-out disabled:pointer-events-none disabled:shadow-none";

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Light,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary =>
                "border-transparent text-white bg-blue-500 hover:bg-blue-600 disabled:bg-blue-300 dark:bg-blue-500 dark:hover:bg-blue-600",
            Self::Secondary =>
                "border-gray-300 text-gray-900 bg-white hover:bg-gray-50 disabled:text-gray-400 dark:border-gray-800 dark:text-gray-50 dark:bg-gray-950 dark:hover:bg-gray-900/60",
            Self::Light =>
                "shadow-none border-transparent text-gray-900 bg-gray-200 hover:bg-gray-300/70 dark:text-gray-50 dark:bg-gray-900 dark:hover:bg-gray-800/80",
            Self::Ghost =>
                "shadow-none border-transparent text-gray-900 bg-transparent hover:bg-gray-100 dark:text-gray-50 dark:hover:bg-gray-800/80",
            Self::Destructive =>
                "border-transparent text-white bg-red-600 hover:bg-red-700 dark:bg-red-700 dark:hover:bg-red-600",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default, into)] class: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: cx(&[BASE_CLASS, variant.class(), class.as_str()]),
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
