use web_sys::window;

/// Key/value persistence with string values.
///
/// Implementations are best-effort by contract: a failed read is an absent
/// value, a failed write is silently dropped. Callers that need structure
/// (the deleted set) serialize on top of this and treat a parse failure as
/// "empty".
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Durable per-origin storage backed by the browser's localStorage.
///
/// Disabled or full storage degrades to "state not remembered" without
/// surfacing an error.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory store standing in for localStorage in unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
