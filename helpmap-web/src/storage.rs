//! `localStorage`-backed [`KeyValueStore`].
//!
//! Outside the browser (server-side rendering, native tests) the store reads
//! nothing and drops writes.

use helpmap_core::KeyValueStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::local_storage().ok()?.get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(storage) = crate::dom::local_storage()
                && let Err(err) = storage.set_item(key, value)
            {
                log::warn!(
                    "could not persist {key}: {}",
                    crate::dom::js_error_message(&err)
                );
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(storage) = crate::dom::local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
        }
    }
}
