pub mod env_validate;

pub use env_validate::{ theme_config, ThemeConfig };
