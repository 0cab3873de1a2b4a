//! Environment variable isolation for tests

use std::sync::Mutex;

/// Serializes tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with `key` set to `value` (or removed for `None`)
///
/// The previous value is restored afterwards. Holding [`ENV_LOCK`] keeps
/// concurrent tests from observing the change.
pub fn with_env_var<F, R>(key: &str, value: Option<&str>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let original = std::env::var(key).ok();

    // SAFETY: ENV_LOCK is held for the whole modification.
    unsafe {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    let result = f();

    // SAFETY: ENV_LOCK is still held.
    unsafe {
        match original {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    result
}
