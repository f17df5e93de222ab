pub mod components;
pub mod configs;
pub mod error;
mod routes;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ theme_config, ThemeConfig };
pub use crate::error::ThemeError;
