use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[cfg(target_arch = "wasm32")]
use web_sys::{Storage, Window};

/// Durable string key/value storage shared by the session store and the API client.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// `window.localStorage`. Every call fails outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read {}", key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove {}", key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, String> {
        Err("No localStorage".into())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), String> {
        Err("No localStorage".into())
    }

    fn remove_item(&self, _key: &str) -> Result<(), String> {
        Err("No localStorage".into())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// localStorage when the browser offers it, otherwise a process-local map.
pub fn default_store() -> Rc<dyn KeyValueStore> {
    if browser_storage_available() {
        return Rc::new(BrowserStorage);
    }
    log::warn!("localStorage unavailable; session will not survive a reload");
    Rc::new(MemoryStorage::new())
}

#[cfg(target_arch = "wasm32")]
fn browser_storage_available() -> bool {
    local_storage().is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_storage_available() -> bool {
    false
}
