use std::cell::RefCell;
use crate::error::ThemeError;
use crate::utils::{ SetTheme, ThemePreference, ThemeStorage };

/// Records every preference it is asked to set.
#[derive(Debug, Default)]
pub struct RecordingSetter {
    pub calls: Vec<ThemePreference>,
}

impl SetTheme for RecordingSetter {
    fn set_theme(&mut self, preference: ThemePreference) {
        self.calls.push(preference);
    }
}

/// Storage whose every operation fails.
pub struct FailingStorage;

impl ThemeStorage for FailingStorage {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        Err(ThemeError::Storage("quota exceeded".to_string()))
    }

    fn store(&self, _preference: ThemePreference) -> Result<(), ThemeError> {
        Err(ThemeError::Storage("quota exceeded".to_string()))
    }
}

/// Storage that remembers every write, in order.
#[derive(Debug, Default)]
pub struct RecordingStorage {
    pub stores: RefCell<Vec<ThemePreference>>,
}

impl ThemeStorage for RecordingStorage {
    fn load(&self) -> Result<Option<ThemePreference>, ThemeError> {
        Ok(self.stores.borrow().last().copied())
    }

    fn store(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        self.stores.borrow_mut().push(preference);
        Ok(())
    }
}
