use dioxus::prelude::*;
use crate::views::{ Navbar, Report };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Report,
}
