use std::cell::RefCell;
use std::rc::Rc;
use crate::error::ThemeError;
use super::theme_state::ThemePreference;

/// Where the theme preference is persisted.
pub trait ThemeStorage {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError>;
    fn store(&self, preference: ThemePreference) -> Result<(), ThemeError>;
}

/// `window.localStorage`. Outside the browser nothing is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(target_arch = "wasm32")]
    fn local_storage() -> Result<web_sys::Storage, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::Unavailable("no window".to_string()))?;
        window
            .local_storage()?
            .ok_or_else(|| ThemeError::Unavailable("localStorage disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeStorage for BrowserStorage {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        match Self::local_storage()?.get_item(&self.key)? {
            Some(raw) => raw.parse().map(Some),
            None => Ok(None),
        }
    }

    fn store(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        Self::local_storage()?.set_item(&self.key, preference.as_str())?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeStorage for BrowserStorage {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        Ok(None)
    }

    fn store(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        log::debug!("No browser storage, {}={} kept in memory", self.key, preference);
        Ok(())
    }
}

/// Shared handle to a storage backend, passed to `ThemeProvider`.
#[derive(Clone)]
pub struct SharedStorage(pub Rc<dyn ThemeStorage>);

impl SharedStorage {
    pub fn new<S: ThemeStorage + 'static>(storage: Rc<S>) -> Self {
        Self(storage)
    }
}

impl PartialEq for SharedStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ThemeStorage for SharedStorage {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        self.0.load()
    }

    fn store(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        self.0.store(preference)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: RefCell<Option<ThemePreference>>,
}

impl MemoryStorage {
    pub fn new(value: Option<ThemePreference>) -> Self {
        Self { value: RefCell::new(value) }
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        Ok(*self.value.borrow())
    }

    fn store(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        *self.value.borrow_mut() = Some(preference);
        Ok(())
    }
}
