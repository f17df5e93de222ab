use crate::utils::ThemePreference;

pub const STORAGE_KEY_VAR: &str = "THEME_STORAGE_KEY";
pub const DEFAULT_THEME_VAR: &str = "DEFAULT_THEME";
pub const ENABLE_SYSTEM_VAR: &str = "THEME_ENABLE_SYSTEM";

const DEFAULT_STORAGE_KEY: &str = "theme";

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeConfig {
    /// localStorage key holding the preference.
    pub storage_key: String,
    pub default_preference: ThemePreference,
    /// Whether `system` may be chosen and stored.
    pub enable_system: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_preference: ThemePreference::System,
            enable_system: true,
        }
    }
}

impl ThemeConfig {
    /// Builds the config from a variable lookup. Invalid values are logged and
    /// replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self where F: Fn(&str) -> Option<String> {
        let defaults = Self::default();

        let storage_key = match lookup(STORAGE_KEY_VAR) {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            Some(_) => {
                log::warn!("{} is empty, using \"{}\"", STORAGE_KEY_VAR, defaults.storage_key);
                defaults.storage_key
            }
            None => defaults.storage_key,
        };

        let enable_system = match lookup(ENABLE_SYSTEM_VAR) {
            Some(raw) =>
                parse_flag(&raw).unwrap_or_else(|| {
                    log::warn!("{}={:?} is not a boolean, using {}", ENABLE_SYSTEM_VAR, raw, defaults.enable_system);
                    defaults.enable_system
                }),
            None => defaults.enable_system,
        };

        let mut default_preference = match lookup(DEFAULT_THEME_VAR) {
            Some(raw) =>
                raw.parse::<ThemePreference>().unwrap_or_else(|e| {
                    log::warn!("{}: {}, using {}", DEFAULT_THEME_VAR, e, defaults.default_preference);
                    defaults.default_preference
                }),
            None => defaults.default_preference,
        };

        if !enable_system && default_preference == ThemePreference::System {
            log::warn!("System theme disabled, default theme falls back to light");
            default_preference = ThemePreference::Light;
        }

        Self { storage_key, default_preference, enable_system }
    }

    /// Whether a preference may be restored from storage or selected.
    pub fn allows(&self, preference: ThemePreference) -> bool {
        self.enable_system || preference != ThemePreference::System
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Reads the theme configuration. Native builds use the process environment
/// (`.env` is loaded in `main`), wasm builds use values captured at compile time.
pub fn theme_config() -> ThemeConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        ThemeConfig::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    {
        ThemeConfig::from_lookup(|key| {
            let value = match key {
                STORAGE_KEY_VAR => option_env!("THEME_STORAGE_KEY"),
                DEFAULT_THEME_VAR => option_env!("DEFAULT_THEME"),
                ENABLE_SYSTEM_VAR => option_env!("THEME_ENABLE_SYSTEM"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}
