use std::rc::Rc;
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedSender;
use futures::StreamExt;
use crate::configs::{ theme_config, ThemeConfig };
use super::theme_state::{ ResolvedTheme, ThemePreference, ThemeState };
use super::theme_storage::{ BrowserStorage, SharedStorage, ThemeStorage };

#[cfg(target_arch = "wasm32")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Changes coming from the browser rather than from the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeEvent {
    SystemChanged(bool),
    /// Another tab wrote the storage key. `None` means it was removed.
    StorageChanged(Option<String>),
}

/// Setter for the theme preference.
pub trait SetTheme {
    fn set_theme(&mut self, preference: ThemePreference);
}

/// Handle returned by [`use_theme`]. Must be created inside a component.
#[derive(Clone, Copy, PartialEq)]
pub struct UseTheme {
    state: Signal<ThemeState>,
    storage: CopyValue<SharedStorage>,
    enable_system: bool,
}

impl UseTheme {
    pub fn new(state: Signal<ThemeState>, storage: SharedStorage, enable_system: bool) -> Self {
        Self { state, storage: CopyValue::new(storage), enable_system }
    }

    pub fn preference(&self) -> ThemePreference {
        self.state.read().preference
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.state.read().resolved()
    }

    pub fn is_dark(&self) -> bool {
        self.state.read().is_dark()
    }

    pub fn enable_system(&self) -> bool {
        self.enable_system
    }
}

impl SetTheme for UseTheme {
    fn set_theme(&mut self, preference: ThemePreference) {
        if !self.enable_system && preference == ThemePreference::System {
            log::warn!("System theme is disabled, ignoring selection");
            return;
        }
        log::info!("Theme preference set to {}", preference);
        self.state.with_mut(|state| {
            state.preference = preference;
        });
        if let Err(e) = self.storage.read().store(preference) {
            log::warn!("Failed to persist theme preference: {}", e);
        }
    }
}

/// The theme provided in context by [`ThemeProvider`].
pub fn use_theme() -> UseTheme {
    use_context::<UseTheme>()
}

/// Stored preference when present and allowed, otherwise the configured default.
pub fn initial_state(config: &ThemeConfig, storage: &dyn ThemeStorage, system_dark: bool) -> ThemeState {
    let preference = match storage.load() {
        Ok(Some(stored)) if config.allows(stored) => stored,
        Ok(Some(stored)) => {
            log::warn!("Stored theme {} is not allowed, using {}", stored, config.default_preference);
            config.default_preference
        }
        Ok(None) => config.default_preference,
        Err(e) => {
            log::warn!("Failed to load theme preference: {}", e);
            config.default_preference
        }
    };
    ThemeState::new(preference, system_dark)
}

/// Applies a browser event to the state. Returns whether anything changed.
pub fn apply_event(state: &mut ThemeState, config: &ThemeConfig, event: ThemeEvent) -> bool {
    let before = *state;
    match event {
        ThemeEvent::SystemChanged(dark) => {
            state.system_dark = dark;
        }
        ThemeEvent::StorageChanged(None) => {
            state.preference = config.default_preference;
        }
        ThemeEvent::StorageChanged(Some(raw)) => match raw.parse::<ThemePreference>() {
            Ok(preference) if config.allows(preference) => {
                state.preference = preference;
            }
            Ok(preference) => log::warn!("Ignoring synced theme {}", preference),
            Err(e) => log::warn!("Ignoring synced theme: {}", e),
        },
    }
    *state != before
}

/// Provides [`UseTheme`] to its children. Without `storage` the preference
/// lives in `localStorage` under the configured key.
#[component]
pub fn ThemeProvider(storage: Option<SharedStorage>, children: Element) -> Element {
    let config = use_hook(theme_config);
    let storage = use_hook(|| {
        storage.unwrap_or_else(|| SharedStorage::new(Rc::new(BrowserStorage::new(config.storage_key.clone()))))
    });
    let state = use_signal(|| initial_state(&config, &storage, system_prefers_dark()));
    let theme = use_context_provider(|| UseTheme::new(state, storage, config.enable_system));

    let event_config = config.clone();
    let events = use_coroutine(move |mut rx: UnboundedReceiver<ThemeEvent>| {
        let config = event_config.clone();
        let mut state = state;
        async move {
            while let Some(event) = rx.next().await {
                let mut next = *state.peek();
                if apply_event(&mut next, &config, event) {
                    state.set(next);
                }
            }
        }
    });

    let storage_key = config.storage_key.clone();
    use_hook(move || watch_browser(events.tx(), storage_key));

    use_effect(move || {
        apply_to_document(&state());
    });

    rsx! {
        div {
            class: if theme.is_dark() { "dark" } else { "" },
            "data-theme": theme.resolved().as_str(),
            {children}
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn system_prefers_dark() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn watch_browser(tx: UnboundedSender<ThemeEvent>, storage_key: String) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };

    if let Ok(Some(query)) = window.match_media(DARK_QUERY) {
        let sender = tx.clone();
        let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| {
                let _ = sender.unbounded_send(ThemeEvent::SystemChanged(event.matches()));
            }
        );
        if let Err(e) = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
            log::warn!("Failed to watch color scheme: {:?}", e);
        }
        on_change.forget();
    }

    let on_storage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
        move |event: web_sys::StorageEvent| {
            if event.key().as_deref() == Some(storage_key.as_str()) {
                let _ = tx.unbounded_send(ThemeEvent::StorageChanged(event.new_value()));
            }
        }
    );
    if let Err(e) = window.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref()) {
        log::warn!("Failed to watch theme storage: {:?}", e);
    }
    on_storage.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn watch_browser(_tx: UnboundedSender<ThemeEvent>, storage_key: String) {
    log::debug!("No browser to watch for {} changes", storage_key);
}

#[cfg(target_arch = "wasm32")]
fn apply_to_document(state: &ThemeState) {
    use wasm_bindgen::JsCast;

    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element()) else {
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force("dark", state.is_dark()) {
        log::warn!("Failed to toggle dark class: {:?}", e);
    }
    if let Some(element) = root.dyn_ref::<web_sys::HtmlElement>() {
        if let Err(e) = element.style().set_property("color-scheme", state.color_scheme()) {
            log::warn!("Failed to set color-scheme: {:?}", e);
        }
    }
    log::debug!("Applied {} theme to document", state.color_scheme());
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_to_document(state: &ThemeState) {
    log::debug!("Resolved theme {}", state.color_scheme());
}
