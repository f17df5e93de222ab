use dioxus::prelude::*;
use crate::components::ModeToggle;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "border-b border-gray-200 bg-white shadow-sm transition-colors duration-200 dark:border-gray-800 dark:bg-gray-950",
                div {
                    id: "navbar",
                    class: "container mx-auto flex items-center justify-between px-4 py-3",
                    Link {
                        class: "font-semibold text-gray-900 transition-colors hover:text-blue-500 dark:text-gray-50",
                        to: Route::Report,
                        "Report"
                    }
                    ModeToggle {}
                }
            }
            Outlet::<Route> {}
        }
    }
}
