use dioxus::prelude::*;
use crate::utils::cx;

const CONTENT_CLASS: &str =
    "absolute z-50 mt-2 min-w-[8rem] overflow-hidden rounded-md border p-1 shadow-xl shadow-black/[2.5%] bg-white border-gray-200 text-gray-900 dark:bg-gray-950 dark:border-gray-800 dark:text-gray-50";
const ITEM_CLASS: &str =
    "relative flex cursor-pointer select-none items-center rounded py-1.5 pl-2 pr-1 outline-none transition-colors sm:text-sm text-gray-900 hover:bg-gray-100 dark:text-gray-50 dark:hover:bg-gray-900";

/// Horizontal alignment of the menu relative to its trigger.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum MenuAlign {
    Start,
    #[default]
    Center,
    End,
}

impl MenuAlign {
    fn class(&self) -> &'static str {
        match self {
            Self::Start => "left-0 origin-top-left",
            Self::Center => "left-1/2 -translate-x-1/2 origin-top",
            Self::End => "right-0 origin-top-right",
        }
    }
}

#[derive(Clone, Copy)]
struct MenuState {
    open: Signal<bool>,
}

impl MenuState {
    fn is_open(&self) -> bool {
        (self.open)()
    }

    fn toggle(&mut self) {
        let open = *self.open.peek();
        self.open.set(!open);
    }

    fn close(&mut self) {
        self.open.set(false);
    }
}

#[component]
pub fn DropdownMenu(children: Element) -> Element {
    let open = use_signal(|| false);
    let mut menu = use_context_provider(|| MenuState { open });

    rsx! {
        div {
            class: "relative inline-block text-left",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    menu.close();
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuTrigger(children: Element) -> Element {
    let mut menu = use_context::<MenuState>();

    rsx! {
        div {
            "aria-haspopup": "menu",
            "aria-expanded": menu.is_open(),
            onclick: move |_| menu.toggle(),
            {children}
        }
    }
}

/// Rendered only while the menu is open.
#[component]
pub fn DropdownMenuContent(#[props(default)] align: MenuAlign, children: Element) -> Element {
    let mut menu = use_context::<MenuState>();

    if !menu.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-40",
            onclick: move |_| menu.close(),
        }
        div {
            role: "menu",
            class: cx(&[CONTENT_CLASS, align.class()]),
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuItem(onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let mut menu = use_context::<MenuState>();

    rsx! {
        div {
            role: "menuitem",
            tabindex: "-1",
            class: ITEM_CLASS,
            onclick: move |evt| {
                onclick.call(evt);
                menu.close();
            },
            {children}
        }
    }
}
