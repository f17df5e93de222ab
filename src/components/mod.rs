mod button;
mod card;
mod content_placeholder;
mod divider;
mod dropdown;
mod icons;
mod mode_toggle;
mod select_native;

pub use button::{ Button, ButtonVariant };
pub use card::Card;
pub use content_placeholder::ContentPlaceholder;
pub use divider::Divider;
pub use dropdown::{
    DropdownMenu,
    DropdownMenuContent,
    DropdownMenuItem,
    DropdownMenuTrigger,
    MenuAlign,
};
pub use icons::{ MoonIcon, SunIcon };
pub use mode_toggle::{ theme_menu_items, ModeToggle, ThemeMenuItem };
pub use select_native::{ SelectNative, SelectOption };
