use dioxus::prelude::*;
use crate::utils::{ use_theme, SetTheme, ThemePreference };
use super::{
    Button,
    ButtonVariant,
    DropdownMenu,
    DropdownMenuContent,
    DropdownMenuItem,
    DropdownMenuTrigger,
    MenuAlign,
    MoonIcon,
    SunIcon,
};

/// One entry of the theme menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeMenuItem {
    pub preference: ThemePreference,
}

impl ThemeMenuItem {
    pub fn label(&self) -> &'static str {
        self.preference.label()
    }

    /// What clicking the item does.
    pub fn select<S: SetTheme + ?Sized>(&self, setter: &mut S) {
        setter.set_theme(self.preference);
    }
}

/// Light, Dark and, when enabled, System.
pub fn theme_menu_items(enable_system: bool) -> Vec<ThemeMenuItem> {
    ThemePreference::ALL
        .into_iter()
        .filter(|preference| enable_system || *preference != ThemePreference::System)
        .map(|preference| ThemeMenuItem { preference })
        .collect()
}

/// Theme dropdown. Both glyphs are always rendered; `dark:` classes swap them.
#[component]
pub fn ModeToggle() -> Element {
    let mut theme = use_theme();
    let items = theme_menu_items(theme.enable_system());
    let current = theme.preference();

    rsx! {
        DropdownMenu {
            DropdownMenuTrigger {
                Button { variant: ButtonVariant::Secondary,
                    SunIcon { class: "h-[1.2rem] w-[1.2rem] rotate-0 scale-100 transition-all dark:-rotate-90 dark:scale-0" }
                    MoonIcon { class: "absolute h-[1.2rem] w-[1.2rem] rotate-90 scale-0 transition-all dark:rotate-0 dark:scale-100" }
                    span { class: "sr-only", "Toggle theme" }
                }
            }
            DropdownMenuContent { align: MenuAlign::Start,
                for item in items {
                    DropdownMenuItem {
                        key: "{item.preference}",
                        onclick: move |_| item.select(&mut theme),
                        span { class: "flex-1", {item.label()} }
                        if item.preference == current {
                            span { class: "ml-4 text-xs text-gray-500", "aria-hidden": "true", "✓" }
                        }
                    }
                }
            }
        }
    }
}
