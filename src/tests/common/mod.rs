pub mod events;
pub mod mocks;

use dioxus::prelude::*;

#[allow(dead_code)]
pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds the tree once and returns its server-rendered markup.
pub fn render_dom(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
