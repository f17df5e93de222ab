mod class_names;
mod theme_provider;
mod theme_state;
mod theme_storage;

pub use class_names::cx;
pub use theme_provider::{
    apply_event,
    initial_state,
    use_theme,
    SetTheme,
    ThemeEvent,
    ThemeProvider,
    UseTheme,
};
pub use theme_state::{ ResolvedTheme, ThemePreference, ThemeState };
pub use theme_storage::{ BrowserStorage, MemoryStorage, SharedStorage, ThemeStorage };
